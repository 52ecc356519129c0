//! Wire formats for the speedrun.com API and the parsed records the rest of
//! the pipeline works with.
//!
//! Every endpoint wraps its payload in a `data` envelope. The raw structs
//! decode that shape tolerantly (optional fields defaulted, the category
//! reference accepted in both of its wire forms); [`RunData::from_raw`] is
//! the single place where missing or null fields turn into defaults.

use serde::Deserialize;


/// Game metadata, fetched once per game.
#[derive(Debug, Clone)]
pub struct GameInfo {
    pub name: String,
    pub release_year: i32,
}

impl GameInfo {
    /// Sentinel used when the game endpoint cannot be read.
    pub fn unknown() -> Self {
        Self {
            name: "Unknown".to_string(),
            release_year: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
}

/// One leaderboard row. Sequence order is the rank; index 0 is the world
/// record.
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub run_id: String,
    pub time: f64,
}

/// One run from the runs listing, with every optional field already
/// defaulted.
#[derive(Debug, Clone)]
pub struct RunData {
    pub id: String,
    pub game_id: String,
    pub category_id: String,
    pub player_id: String,
    pub submitted: Option<String>,
    pub platform: String,
    pub emulated: bool,
    pub video_link: Option<String>,
    pub comment: Option<String>,
    pub time_seconds: f64,
}

impl RunData {
    /// Flatten one wire run. `requested_game_id` fills in when the run omits
    /// its own game reference.
    pub fn from_raw(raw: RawRun, requested_game_id: &str) -> Self {
        let player_id = raw
            .players
            .iter()
            .find_map(|p| p.id.as_deref().or(p.name.as_deref()))
            .unwrap_or("unknown")
            .to_string();

        let category_id = raw
            .category
            .as_ref()
            .and_then(CategoryRef::id)
            .unwrap_or("unknown")
            .to_string();

        let (platform, emulated) = match raw.system {
            Some(system) => (
                system.platform.unwrap_or_else(|| "Unknown".to_string()),
                system.emulated.unwrap_or(false),
            ),
            None => ("Unknown".to_string(), false),
        };

        let video_link = raw
            .videos
            .and_then(|v| v.links.into_iter().find_map(|link| link.uri));

        Self {
            id: raw.id,
            game_id: raw
                .game
                .unwrap_or_else(|| requested_game_id.to_string()),
            category_id,
            player_id,
            submitted: raw.submitted,
            platform,
            emulated,
            video_link,
            comment: raw.comment,
            time_seconds: raw.times.primary_t,
        }
    }
}

// ---- wire formats ---------------------------------------------------------

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub struct RawGame {
    pub names: RawNames,
    #[serde(default)]
    pub released: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct RawNames {
    pub international: String,
}

#[derive(Debug, Deserialize)]
pub struct RawCategory {
    pub id: String,
    pub name: String,
}

/// User lookup body. `names` is absent for some deleted accounts.
#[derive(Debug, Deserialize)]
pub struct RawUser {
    #[serde(default)]
    pub names: Option<RawNames>,
}

#[derive(Debug, Deserialize)]
pub struct RawLeaderboard {
    pub runs: Vec<RawLeaderboardRun>,
}

#[derive(Debug, Deserialize)]
pub struct RawLeaderboardRun {
    pub run: RawLeaderboardRunInner,
}

#[derive(Debug, Deserialize)]
pub struct RawLeaderboardRunInner {
    pub id: String,
    pub times: RawTimes,
}

#[derive(Debug, Deserialize)]
pub struct RawTimes {
    pub primary_t: f64,
}

/// One page of the runs listing.
#[derive(Debug, Deserialize)]
pub struct RunsPage {
    pub data: Vec<RawRun>,
    pub pagination: RawPagination,
}

#[derive(Debug, Deserialize)]
pub struct RawPagination {
    #[serde(default)]
    pub size: u64,
}

#[derive(Debug, Deserialize)]
pub struct RawRun {
    pub id: String,
    #[serde(default)]
    pub game: Option<String>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub players: Vec<RawPlayerRef>,
    #[serde(default)]
    pub submitted: Option<String>,
    #[serde(default)]
    pub system: Option<RawSystem>,
    #[serde(default)]
    pub videos: Option<RawVideos>,
    #[serde(default)]
    pub comment: Option<String>,
    pub times: RawTimes,
}

/// The category field arrives as a plain id string, or as an embedded object
/// when the listing was requested with `embed=category`. Anything else maps
/// to no id, which downstream turns into the "unknown" sentinel.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Id(String),
    Embedded { data: RawCategoryData },
    Other(serde_json::Value),
}

impl CategoryRef {
    pub fn id(&self) -> Option<&str> {
        match self {
            CategoryRef::Id(id) => Some(id),
            CategoryRef::Embedded { data } => Some(&data.id),
            CategoryRef::Other(_) => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RawCategoryData {
    pub id: String,
}

/// Registered players carry an `id`, guests only a `name`.
#[derive(Debug, Deserialize)]
pub struct RawPlayerRef {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSystem {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub emulated: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct RawVideos {
    #[serde(default)]
    pub links: Vec<RawVideoLink>,
}

#[derive(Debug, Deserialize)]
pub struct RawVideoLink {
    #[serde(default)]
    pub uri: Option<String>,
}
