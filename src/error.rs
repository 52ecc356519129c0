//! Error types for the speedrun.com run exporter

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SrcomError>;

#[derive(Error, Debug)]
pub enum SrcomError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}
