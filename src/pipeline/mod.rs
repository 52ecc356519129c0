//! Sequential per-game pipeline and the process-wide accumulators.
//!
//! One logical task drives everything: games in configuration order,
//! categories and runs in API order, records appended in enumeration order.
//! The only shared mutable state, the output accumulator and the player-name
//! cache, lives on [`Pipeline`] and is touched from that single task.

pub mod assemble;
pub mod stats;

use std::collections::{HashMap, HashSet};

use crate::config::GuestNamePolicy;
use crate::error::Result;
use crate::models::RunRecord;
use crate::pacing::Pacer;
use crate::srcom::http::ApiClient;
use crate::srcom::resolver::PlayerNameResolver;
use crate::srcom::types::LeaderboardEntry;

use assemble::{assemble_record, GameContext};

/// Totals reported after the pipeline finishes.
#[derive(Debug, Clone, Copy)]
pub struct PipelineSummary {
    pub total_runs: usize,
    pub unique_players: usize,
}

/// Drives the fetch, enrich and assemble stages for every configured game.
pub struct Pipeline {
    api: ApiClient,
    pacer: Pacer,
    resolver: PlayerNameResolver,
    records: Vec<RunRecord>,
    verbose: bool,
}

impl Pipeline {
    pub fn new(api: ApiClient, pacer: Pacer, policy: GuestNamePolicy, verbose: bool) -> Self {
        Self {
            api,
            pacer,
            resolver: PlayerNameResolver::new(policy),
            records: Vec::new(),
            verbose,
        }
    }

    /// Process every game in order. A per-game failure is logged and the
    /// loop continues; records accumulated so far survive.
    pub async fn run(&mut self, game_ids: &[String]) -> PipelineSummary {
        for (i, game_id) in game_ids.iter().enumerate() {
            println!(
                "[{}/{}] Processing game ID: {}",
                i + 1,
                game_ids.len(),
                game_id
            );

            match self.process_game(game_id).await {
                Ok(()) => self.pacer.between_games().await,
                Err(e) => println!("  ⚠ Error processing game {game_id}: {e}"),
            }

            println!("  Total runs collected so far: {}", self.records.len());
            println!("  Unique players cached: {}\n", self.resolver.len());
        }

        PipelineSummary {
            total_runs: self.records.len(),
            unique_players: self.resolver.len(),
        }
    }

    /// Records accumulated so far, in collection order.
    pub fn records(&self) -> &[RunRecord] {
        &self.records
    }

    async fn process_game(&mut self, game_id: &str) -> Result<()> {
        let game = self.api.get_game_info(game_id).await;
        println!("  Game: {}", game.name);

        // A categories failure aborts this game; everything below degrades
        // per-item instead.
        let categories = self.api.get_categories(game_id).await?;
        println!("  Categories found: {}", categories.len());

        let category_names: HashMap<String, String> = categories
            .iter()
            .map(|c| (c.id.clone(), c.name.clone()))
            .collect();

        let mut leaderboards: HashMap<String, Vec<LeaderboardEntry>> = HashMap::new();
        let mut world_records: HashMap<String, String> = HashMap::new();
        for category in &categories {
            let leaderboard = self.api.get_leaderboard(game_id, &category.id).await;
            if let Some(first) = leaderboard.first() {
                world_records.insert(category.id.clone(), first.run_id.clone());
            }
            leaderboards.insert(category.id.clone(), leaderboard);
            self.pacer.after_leaderboard().await;
        }

        let runs = self
            .api
            .get_all_runs(game_id, &self.pacer, self.verbose)
            .await;
        println!("  Runs retrieved: {}", runs.len());

        println!("  Fetching player names...");
        let mut seen = HashSet::new();
        let distinct_players: Vec<String> = runs
            .iter()
            .filter(|r| seen.insert(r.player_id.clone()))
            .map(|r| r.player_id.clone())
            .collect();

        let mut resolved = 0usize;
        for player_id in &distinct_players {
            if self.resolver.cached(player_id).is_none() {
                self.resolver
                    .resolve(&self.api, &self.pacer, player_id)
                    .await;
                resolved += 1;
                if resolved % 10 == 0 {
                    println!(
                        "    Resolved {}/{} player names...",
                        resolved,
                        distinct_players.len()
                    );
                }
            }
        }

        let player_stats = stats::calculate_player_statistics(&runs);

        let ctx = GameContext {
            game_id,
            game: &game,
            category_names: &category_names,
            leaderboards: &leaderboards,
            world_records: &world_records,
            player_names: self.resolver.names(),
            player_stats: &player_stats,
        };
        let new_records: Vec<RunRecord> =
            runs.iter().map(|run| assemble_record(run, &ctx)).collect();
        self.records.extend(new_records);

        Ok(())
    }
}
