//! Joins fetched metadata into flat output rows.

use std::collections::HashMap;

use crate::models::{PlayerStats, RunRecord};
use crate::srcom::types::{GameInfo, LeaderboardEntry, RunData};

/// Everything known about one game at assembly time. Borrowed snapshots
/// only; assembly itself does no I/O.
pub struct GameContext<'a> {
    pub game_id: &'a str,
    pub game: &'a GameInfo,
    pub category_names: &'a HashMap<String, String>,
    pub leaderboards: &'a HashMap<String, Vec<LeaderboardEntry>>,
    pub world_records: &'a HashMap<String, String>,
    pub player_names: &'a HashMap<String, String>,
    pub player_stats: &'a HashMap<String, PlayerStats>,
}

/// Produce one output row for a run. Deterministic given its inputs.
///
/// Lookups that miss fall back per the output contract: "Unknown" for the
/// category name, the raw id for the player name, rank 0 and an all-zero
/// stats block elsewhere.
pub fn assemble_record(run: &RunData, ctx: &GameContext<'_>) -> RunRecord {
    let category_name = ctx
        .category_names
        .get(&run.category_id)
        .cloned()
        .unwrap_or_else(|| "Unknown".to_string());

    let player_name = ctx
        .player_names
        .get(&run.player_id)
        .cloned()
        .unwrap_or_else(|| run.player_id.clone());

    let is_wr = ctx
        .world_records
        .get(&run.category_id)
        .is_some_and(|wr_run_id| *wr_run_id == run.id);

    let (rank, total_runners_in_category) = match ctx.leaderboards.get(&run.category_id) {
        Some(leaderboard) => {
            let rank = leaderboard
                .iter()
                .position(|entry| entry.run_id == run.id)
                .map(|i| i + 1)
                .unwrap_or(0);
            (rank, leaderboard.len())
        }
        None => (0, 0),
    };

    let stats = ctx
        .player_stats
        .get(&run.player_id)
        .cloned()
        .unwrap_or_default();

    let has_video = run.video_link.as_deref().is_some_and(|v| !v.is_empty());
    let has_comment = run.comment.as_deref().is_some_and(|c| !c.is_empty());
    let run_comment_length = run
        .comment
        .as_deref()
        .map(|c| c.chars().count())
        .unwrap_or(0);

    RunRecord {
        run_id: run.id.clone(),
        game_id: ctx.game_id.to_string(),
        game_name: ctx.game.name.clone(),
        game_release_year: ctx.game.release_year,
        category_id: run.category_id.clone(),
        category_name,
        time_seconds: run.time_seconds,
        date_submitted: run.submitted.clone().unwrap_or_default(),
        player_id: run.player_id.clone(),
        player_name,
        is_wr: u8::from(is_wr),
        rank,
        total_runners_in_category,
        video_link: run.video_link.clone().unwrap_or_default(),
        has_video: u8::from(has_video),
        platform: run.platform.clone(),
        emulated: u8::from(run.emulated),
        player_total_runs: stats.total_runs,
        player_total_games: stats.unique_games,
        player_total_categories: stats.unique_categories,
        player_avg_time_improvement: stats.avg_time_improvement,
        player_days_active: stats.days_active,
        run_comment_length,
        has_comment: u8::from(has_comment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_run() -> RunData {
        RunData {
            id: "run1".to_string(),
            game_id: "pd0wq31e".to_string(),
            category_id: "cat-a".to_string(),
            player_id: "e8envo80".to_string(),
            submitted: Some("2021-03-01T10:00:00Z".to_string()),
            platform: "w89rwelk".to_string(),
            emulated: false,
            video_link: Some("https://youtu.be/abc".to_string()),
            comment: Some("gg".to_string()),
            time_seconds: 5834.0,
        }
    }

    fn empty_ctx_maps() -> (
        HashMap<String, String>,
        HashMap<String, Vec<LeaderboardEntry>>,
        HashMap<String, String>,
        HashMap<String, String>,
        HashMap<String, PlayerStats>,
    ) {
        (
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
            HashMap::new(),
        )
    }

    #[test]
    fn world_record_and_rank_attribution() {
        let game = GameInfo {
            name: "Super Mario 64".to_string(),
            release_year: 1996,
        };
        let (mut names, mut boards, mut records, mut players, stats) = empty_ctx_maps();
        names.insert("cat-a".to_string(), "120 Star".to_string());
        boards.insert(
            "cat-a".to_string(),
            vec![
                LeaderboardEntry {
                    run_id: "run1".to_string(),
                    time: 5834.0,
                },
                LeaderboardEntry {
                    run_id: "run2".to_string(),
                    time: 5901.5,
                },
            ],
        );
        records.insert("cat-a".to_string(), "run1".to_string());
        players.insert("e8envo80".to_string(), "cheese".to_string());

        let ctx = GameContext {
            game_id: "pd0wq31e",
            game: &game,
            category_names: &names,
            leaderboards: &boards,
            world_records: &records,
            player_names: &players,
            player_stats: &stats,
        };

        let record = assemble_record(&sample_run(), &ctx);
        assert_eq!(record.is_wr, 1);
        assert_eq!(record.rank, 1);
        assert_eq!(record.total_runners_in_category, 2);
        assert_eq!(record.category_name, "120 Star");
        assert_eq!(record.player_name, "cheese");
        assert_eq!(record.game_name, "Super Mario 64");
        assert_eq!(record.game_release_year, 1996);
    }

    #[test]
    fn run_off_the_leaderboard_gets_rank_zero() {
        let game = GameInfo::unknown();
        let (names, mut boards, mut records, players, stats) = empty_ctx_maps();
        boards.insert(
            "cat-a".to_string(),
            vec![LeaderboardEntry {
                run_id: "other".to_string(),
                time: 1.0,
            }],
        );
        records.insert("cat-a".to_string(), "other".to_string());

        let ctx = GameContext {
            game_id: "pd0wq31e",
            game: &game,
            category_names: &names,
            leaderboards: &boards,
            world_records: &records,
            player_names: &players,
            player_stats: &stats,
        };

        let record = assemble_record(&sample_run(), &ctx);
        assert_eq!(record.is_wr, 0);
        assert_eq!(record.rank, 0);
        assert_eq!(record.total_runners_in_category, 1);
    }

    #[test]
    fn missing_lookups_fall_back() {
        let game = GameInfo::unknown();
        let (names, boards, records, players, stats) = empty_ctx_maps();

        let ctx = GameContext {
            game_id: "pd0wq31e",
            game: &game,
            category_names: &names,
            leaderboards: &boards,
            world_records: &records,
            player_names: &players,
            player_stats: &stats,
        };

        let record = assemble_record(&sample_run(), &ctx);
        assert_eq!(record.category_name, "Unknown");
        assert_eq!(record.player_name, "e8envo80");
        assert_eq!(record.rank, 0);
        assert_eq!(record.total_runners_in_category, 0);
        assert_eq!(record.player_total_runs, 0);
        assert_eq!(record.player_days_active, 0);
    }

    #[test]
    fn video_and_comment_flags_derive_from_content() {
        let game = GameInfo::unknown();
        let (names, boards, records, players, stats) = empty_ctx_maps();
        let ctx = GameContext {
            game_id: "pd0wq31e",
            game: &game,
            category_names: &names,
            leaderboards: &boards,
            world_records: &records,
            player_names: &players,
            player_stats: &stats,
        };

        let with_both = assemble_record(&sample_run(), &ctx);
        assert_eq!(with_both.has_video, 1);
        assert_eq!(with_both.has_comment, 1);
        assert_eq!(with_both.run_comment_length, 2);

        let mut bare = sample_run();
        bare.video_link = None;
        bare.comment = None;
        bare.submitted = None;
        let without = assemble_record(&bare, &ctx);
        assert_eq!(without.has_video, 0);
        assert_eq!(without.has_comment, 0);
        assert_eq!(without.run_comment_length, 0);
        assert_eq!(without.date_submitted, "");
        assert_eq!(without.video_link, "");

        let mut empty_video = sample_run();
        empty_video.video_link = Some(String::new());
        let record = assemble_record(&empty_video, &ctx);
        assert_eq!(record.has_video, 0);
    }
}
