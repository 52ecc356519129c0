//! CLI argument definitions and parsing.

use std::path::PathBuf;

use clap::Parser;

/// Pull speedrun.com leaderboard and run data into a flat CSV.
///
/// A bare invocation processes the built-in game list and writes
/// `speedrun_data_names.csv` in the working directory.
#[derive(Debug, Parser)]
#[clap(name = "srcom-export", about = "speedrun.com run data exporter")]
pub struct SrcomExport {
    /// Output CSV path.
    #[clap(long, short, default_value = "speedrun_data_names.csv")]
    pub output: PathBuf,

    /// Game ID to collect (repeatable): `-g pd0wq31e -g 76rkv4d8`.
    /// Defaults to the built-in game list.
    #[clap(long, short)]
    pub game: Option<Vec<String>>,

    /// Exit without waiting for a keypress.
    #[clap(long)]
    pub no_wait: bool,

    /// Show detailed progress information.
    #[clap(long)]
    pub verbose: bool,
}
