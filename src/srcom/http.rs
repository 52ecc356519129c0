//! HTTP access to the speedrun.com API v1 endpoints.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::pacing::Pacer;
use crate::srcom::types::{
    Category, Envelope, GameInfo, LeaderboardEntry, RawCategory, RawGame, RawLeaderboard,
    RawUser, RunData, RunsPage,
};

/// Base path for the speedrun.com v1 API.
pub const SRC_BASE_URL: &str = "https://www.speedrun.com/api/v1";

/// Page size for the runs listing.
pub const RUNS_PAGE_SIZE: usize = 200;

/// Hard cap on runs collected for a single game.
pub const MAX_RUNS_PER_GAME: usize = 100_000;

/// Leaderboards are fetched top-100; runs below that never receive a rank.
pub const LEADERBOARD_TOP: usize = 100;

/// Thin wrapper over one HTTP GET + JSON decode per call. Callers decide
/// which failures to swallow.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(SRC_BASE_URL)
    }

    /// Client against a different base URL. Tests point this at a local
    /// server or an unroutable address.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let res = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }

    /// Game name and release year. Falls back to the unknown sentinel on any
    /// failure instead of propagating.
    pub async fn get_game_info(&self, game_id: &str) -> GameInfo {
        match self
            .get_json::<Envelope<RawGame>>(&format!("/games/{game_id}"))
            .await
        {
            Ok(body) => GameInfo {
                name: body.data.names.international,
                release_year: body.data.released.unwrap_or(0),
            },
            Err(_) => GameInfo::unknown(),
        }
    }

    /// Ordered category list for a game. A failure here aborts processing of
    /// the game.
    pub async fn get_categories(&self, game_id: &str) -> Result<Vec<Category>> {
        let body = self
            .get_json::<Envelope<Vec<RawCategory>>>(&format!("/games/{game_id}/categories"))
            .await?;

        Ok(body
            .data
            .into_iter()
            .map(|c| Category {
                id: c.id,
                name: c.name,
            })
            .collect())
    }

    /// Top-100 leaderboard in API order (best time first). Empty on failure;
    /// the category is then treated as having no ranks and no world record.
    pub async fn get_leaderboard(&self, game_id: &str, category_id: &str) -> Vec<LeaderboardEntry> {
        let path = format!("/leaderboards/{game_id}/category/{category_id}?top={LEADERBOARD_TOP}");

        match self.get_json::<Envelope<RawLeaderboard>>(&path).await {
            Ok(body) => body
                .data
                .runs
                .into_iter()
                .map(|entry| LeaderboardEntry {
                    run_id: entry.run.id,
                    time: entry.run.times.primary_t,
                })
                .collect(),
            Err(_) => Vec::new(),
        }
    }

    /// User lookup for player-name resolution.
    pub async fn get_user(&self, player_id: &str) -> Result<RawUser> {
        let body = self
            .get_json::<Envelope<RawUser>>(&format!("/users/{player_id}"))
            .await?;
        Ok(body.data)
    }

    /// Every run for a game, newest submissions first, paginated until a
    /// short page or the per-game cap. A page failure stops pagination and
    /// keeps the pages already fetched.
    pub async fn get_all_runs(&self, game_id: &str, pacer: &Pacer, verbose: bool) -> Vec<RunData> {
        let mut runs = Vec::new();
        let mut offset = 0usize;

        loop {
            let path = format!(
                "/runs?game={game_id}&max={RUNS_PAGE_SIZE}&offset={offset}&orderby=submitted&direction=desc"
            );

            let fetched = self.get_json::<RunsPage>(&path).await;
            // The delay follows every page fetch, successful or not.
            pacer.after_page().await;

            let page = match fetched {
                Ok(page) => page,
                Err(e) => {
                    println!("    ⚠ Error fetching runs at offset {offset}: {e}");
                    break;
                }
            };

            let page_len = page.data.len();
            runs.extend(
                page.data
                    .into_iter()
                    .map(|raw| RunData::from_raw(raw, game_id)),
            );
            if verbose {
                println!("    Page at offset {offset}: {page_len} runs");
            }

            offset += RUNS_PAGE_SIZE;

            if !has_more(page_len, page.pagination.size, runs.len()) {
                break;
            }
        }

        runs
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// True when another page of runs should be fetched: the last page was
/// exactly full, the server agreed on the page size, and the cap has not
/// been reached.
fn has_more(page_len: usize, reported_size: u64, collected: usize) -> bool {
    page_len == RUNS_PAGE_SIZE
        && reported_size == RUNS_PAGE_SIZE as u64
        && collected < MAX_RUNS_PER_GAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_continues() {
        assert!(has_more(200, 200, 200));
        assert!(has_more(200, 200, 99_800));
    }

    #[test]
    fn short_page_stops() {
        assert!(!has_more(199, 199, 199));
        assert!(!has_more(0, 0, 400));
    }

    #[test]
    fn size_disagreement_stops() {
        // A full page with a mismatched server-reported size ends pagination.
        assert!(!has_more(200, 100, 200));
    }

    #[test]
    fn cap_stops_even_on_full_page() {
        assert!(!has_more(200, 200, MAX_RUNS_PER_GAME));
        assert!(!has_more(200, 200, MAX_RUNS_PER_GAME + 200));
    }

    #[tokio::test]
    async fn unreachable_host_yields_no_runs() {
        let api = ApiClient::with_base_url("http://127.0.0.1:9");
        let runs = api.get_all_runs("pd0wq31e", &Pacer::none(), false).await;
        assert!(runs.is_empty());
    }

    #[tokio::test]
    async fn unreachable_host_yields_sentinel_game_info() {
        let api = ApiClient::with_base_url("http://127.0.0.1:9");
        let info = api.get_game_info("pd0wq31e").await;
        assert_eq!(info.name, "Unknown");
        assert_eq!(info.release_year, 0);
    }

    #[tokio::test]
    async fn unreachable_host_yields_empty_leaderboard() {
        let api = ApiClient::with_base_url("http://127.0.0.1:9");
        let lb = api.get_leaderboard("pd0wq31e", "wkpoo02r").await;
        assert!(lb.is_empty());
    }

    #[tokio::test]
    async fn categories_failure_propagates() {
        let api = ApiClient::with_base_url("http://127.0.0.1:9");
        assert!(api.get_categories("pd0wq31e").await.is_err());
    }
}
