//! Player display-name resolution with a process-lifetime cache.

use std::collections::HashMap;

use crate::config::GuestNamePolicy;
use crate::pacing::Pacer;
use crate::srcom::http::ApiClient;

/// Maps player ids to display names.
///
/// Each distinct id is looked up remotely at most once; every outcome
/// (including failures, which fall back to the id itself) is cached for the
/// life of the process and shared across all games.
pub struct PlayerNameResolver {
    cache: HashMap<String, String>,
    policy: GuestNamePolicy,
}

impl PlayerNameResolver {
    pub fn new(policy: GuestNamePolicy) -> Self {
        Self {
            cache: HashMap::new(),
            policy,
        }
    }

    /// The cached name for an id, if it has been resolved before.
    pub fn cached(&self, player_id: &str) -> Option<&str> {
        self.cache.get(player_id).map(String::as_str)
    }

    /// All resolved names, keyed by player id.
    pub fn names(&self) -> &HashMap<String, String> {
        &self.cache
    }

    /// Number of distinct players cached so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Resolve one player id to a display name.
    ///
    /// Cache hits and guest names return without touching the network. A
    /// remote lookup reads `data.names.international` and falls back to the
    /// id itself on any failure. Pacing applies only after a successful
    /// remote lookup.
    pub async fn resolve(&mut self, api: &ApiClient, pacer: &Pacer, player_id: &str) -> String {
        if let Some(name) = self.cache.get(player_id) {
            return name.clone();
        }

        if self.policy.is_guest_name(player_id) {
            self.cache
                .insert(player_id.to_string(), player_id.to_string());
            return player_id.to_string();
        }

        let name = match api.get_user(player_id).await {
            Ok(user) => {
                let name = user
                    .names
                    .map(|n| n.international)
                    .unwrap_or_else(|| player_id.to_string());
                pacer.after_user_lookup().await;
                name
            }
            Err(_) => player_id.to_string(),
        };

        self.cache.insert(player_id.to_string(), name.clone());
        name
    }
}
