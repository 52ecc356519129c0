//! Per-player summary statistics over one game's run list.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::PlayerStats;
use crate::srcom::types::RunData;


/// Compute summary statistics for every player appearing in `runs`.
///
/// The input is one game's full run list; every statistic is scoped to it.
pub fn calculate_player_statistics(runs: &[RunData]) -> HashMap<String, PlayerStats> {
    let mut by_player: HashMap<&str, Vec<&RunData>> = HashMap::new();
    for run in runs {
        by_player.entry(&run.player_id).or_default().push(run);
    }

    let mut stats = HashMap::new();
    for (player_id, mut player_runs) in by_player {
        // Absent submission dates order first, like the raw string sort the
        // rest of the pipeline uses.
        player_runs.sort_by(|a, b| a.submitted.cmp(&b.submitted));
        stats.insert(player_id.to_string(), stats_for_player(&player_runs));
    }

    stats
}

fn stats_for_player(ordered: &[&RunData]) -> PlayerStats {
    let unique_games = ordered
        .iter()
        .map(|r| r.game_id.as_str())
        .collect::<HashSet<_>>()
        .len();
    let unique_categories = ordered
        .iter()
        .map(|r| r.category_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    PlayerStats {
        total_runs: ordered.len(),
        unique_games,
        unique_categories,
        avg_time_improvement: average_improvement(ordered),
        days_active: days_active(ordered),
    }
}

/// Mean of the strictly positive time deltas between consecutive runs within
/// each category, submission order ascending. Regressions and ties
/// contribute nothing; 0.0 when no improvement exists.
fn average_improvement(ordered: &[&RunData]) -> f64 {
    let mut by_category: HashMap<&str, Vec<&RunData>> = HashMap::new();
    for run in ordered {
        by_category.entry(&run.category_id).or_default().push(run);
    }

    let mut improvements = Vec::new();
    for category_runs in by_category.values_mut() {
        category_runs.sort_by(|a, b| a.submitted.cmp(&b.submitted));
        for pair in category_runs.windows(2) {
            let delta = pair[0].time_seconds - pair[1].time_seconds;
            if delta > 0.0 {
                improvements.push(delta);
            }
        }
    }

    if improvements.is_empty() {
        0.0
    } else {
        improvements.iter().sum::<f64>() / improvements.len() as f64
    }
}

/// Whole days between the first and last submission, never negative. A run
/// without a submission date stands in as today; any unparseable date
/// yields 0.
fn days_active(ordered: &[&RunData]) -> i64 {
    if ordered.len() < 2 {
        return 0;
    }

    let first = submission_date(ordered[0]);
    let last = submission_date(ordered[ordered.len() - 1]);

    match (first, last) {
        (Some(first), Some(last)) => last.signed_duration_since(first).num_days().max(0),
        _ => 0,
    }
}

fn submission_date(run: &RunData) -> Option<NaiveDate> {
    match run.submitted.as_deref() {
        Some(s) => parse_submission_date(s),
        None => Some(Utc::now().date_naive()),
    }
}

/// Submission timestamps are RFC 3339; a bare date is tolerated as well.
fn parse_submission_date(s: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
