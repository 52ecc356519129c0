//! Entry point: parse CLI, drive the pipeline, export the CSV.

use std::io::BufRead;

use anyhow::Context;
use clap::Parser;
use srcom_export::{
    cli::SrcomExport,
    config::{default_game_ids, GuestNamePolicy},
    export::export_to_csv,
    pacing::Pacer,
    pipeline::Pipeline,
    srcom::http::ApiClient,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = SrcomExport::parse();
    let game_ids = app.game.unwrap_or_else(default_game_ids);

    println!("Starting speedrun data collection for Stata analysis...\n");
    println!("This may take several minutes due to API rate limiting.\n");

    let mut pipeline = Pipeline::new(
        ApiClient::new(),
        Pacer::default(),
        GuestNamePolicy::default(),
        app.verbose,
    );
    let summary = pipeline.run(&game_ids).await;

    export_to_csv(&app.output, pipeline.records())
        .with_context(|| format!("failed to write {}", app.output.display()))?;

    println!("\n=== COMPLETE ===");
    println!("Total runs collected: {}", summary.total_runs);
    println!("Unique players resolved: {}", summary.unique_players);
    println!("Exported to: {}", app.output.display());

    if !app.no_wait {
        println!("\nPress Enter to exit.");
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }

    Ok(())
}
