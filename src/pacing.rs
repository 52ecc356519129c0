//! Fixed-delay pacing between dependent remote calls.

use std::time::Duration;

/// Delays inserted after remote calls to stay under the API rate limit.
///
/// The default values are conservative for the public speedrun.com API.
/// Tests substitute [`Pacer::none`] so nothing sleeps.
#[derive(Debug, Clone)]
pub struct Pacer {
    between_games: Duration,
    after_leaderboard: Duration,
    after_page: Duration,
    after_user_lookup: Duration,
}

impl Default for Pacer {
    fn default() -> Self {
        Self {
            between_games: Duration::from_millis(1500),
            after_leaderboard: Duration::from_millis(500),
            after_page: Duration::from_millis(500),
            after_user_lookup: Duration::from_millis(100),
        }
    }
}

impl Pacer {
    /// All delays zeroed.
    pub fn none() -> Self {
        Self {
            between_games: Duration::ZERO,
            after_leaderboard: Duration::ZERO,
            after_page: Duration::ZERO,
            after_user_lookup: Duration::ZERO,
        }
    }

    pub async fn between_games(&self) {
        Self::pause(self.between_games).await;
    }

    pub async fn after_leaderboard(&self) {
        Self::pause(self.after_leaderboard).await;
    }

    pub async fn after_page(&self) {
        Self::pause(self.after_page).await;
    }

    pub async fn after_user_lookup(&self) {
        Self::pause(self.after_user_lookup).await;
    }

    async fn pause(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn none_returns_immediately() {
        let pacer = Pacer::none();
        let start = std::time::Instant::now();
        pacer.between_games().await;
        pacer.after_leaderboard().await;
        pacer.after_page().await;
        pacer.after_user_lookup().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
