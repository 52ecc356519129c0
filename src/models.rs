//! Derived per-player statistics and the flat output row.

use serde::Serialize;

/// Summary statistics for one player, computed from a single game's run set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerStats {
    pub total_runs: usize,
    pub unique_games: usize,
    pub unique_categories: usize,
    pub avg_time_improvement: f64,
    pub days_active: i64,
}

/// One exported CSV row. Field order is the column order; flag columns
/// serialize as 0/1 integers and absent optionals as the empty string.
#[derive(Debug, Clone, Serialize)]
pub struct RunRecord {
    pub run_id: String,
    pub game_id: String,
    pub game_name: String,
    pub game_release_year: i32,
    pub category_id: String,
    pub category_name: String,
    pub time_seconds: f64,
    pub date_submitted: String,
    pub player_id: String,
    pub player_name: String,
    pub is_wr: u8,
    pub rank: usize,
    pub total_runners_in_category: usize,
    pub video_link: String,
    pub has_video: u8,
    pub platform: String,
    pub emulated: u8,
    pub player_total_runs: usize,
    pub player_total_games: usize,
    pub player_total_categories: usize,
    pub player_avg_time_improvement: f64,
    pub player_days_active: i64,
    pub run_comment_length: usize,
    pub has_comment: u8,
}

impl RunRecord {
    /// Column names in export order. Must stay in sync with the struct
    /// fields above; the exporter writes this row even when there are no
    /// records.
    pub const CSV_HEADER: &'static [&'static str] = &[
        "run_id",
        "game_id",
        "game_name",
        "game_release_year",
        "category_id",
        "category_name",
        "time_seconds",
        "date_submitted",
        "player_id",
        "player_name",
        "is_wr",
        "rank",
        "total_runners_in_category",
        "video_link",
        "has_video",
        "platform",
        "emulated",
        "player_total_runs",
        "player_total_games",
        "player_total_categories",
        "player_avg_time_improvement",
        "player_days_active",
        "run_comment_length",
        "has_comment",
    ];
}
