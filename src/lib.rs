//! speedrun.com run data exporter
//!
//! Pulls leaderboard and run metadata from the speedrun.com REST API for a
//! configured list of games, enriches each run with derived player
//! statistics, and flattens everything into a single CSV file for offline
//! statistical analysis.
//!
//! ## Pipeline
//!
//! For each game, in configuration order:
//!
//! - **Game info + categories**: names and release year, the category list.
//! - **Leaderboards**: top-100 snapshot per category; the first entry is the
//!   world record, position is the rank.
//! - **Runs**: the full paginated run listing, newest submissions first.
//! - **Player names**: each distinct player id resolved once per process,
//!   with a guest-name short-circuit.
//! - **Player statistics**: run counts, distinct categories, average time
//!   improvement, days active, computed from that game's runs.
//! - **Assembly**: one flat [`RunRecord`](models::RunRecord) per run,
//!   appended to the process-wide accumulator.
//!
//! After all games, the accumulator is written out once as CSV.
//!
//! ```rust,no_run
//! use srcom_export::{
//!     config::GuestNamePolicy, export::export_to_csv, pacing::Pacer,
//!     pipeline::Pipeline, srcom::http::ApiClient,
//! };
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut pipeline = Pipeline::new(
//!     ApiClient::new(),
//!     Pacer::default(),
//!     GuestNamePolicy::default(),
//!     false,
//! );
//! let summary = pipeline.run(&["pd0wq31e".to_string()]).await;
//! export_to_csv("speedrun_data_names.csv".as_ref(), pipeline.records())?;
//! println!("collected {} runs", summary.total_runs);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod pacing;
pub mod pipeline;
pub mod srcom;

// Re-export commonly used types
pub use error::{Result, SrcomError};
pub use models::{PlayerStats, RunRecord};
