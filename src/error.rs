//! Error types for the edges of the chart: window construction, config
//! loading and event loading. The layout and render passes themselves never
//! fail; bad intervals are clamped and off-screen events are skipped.

use std::io;
use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WindowError {
    #[error("window ends ({end}) before it starts ({start})")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },

    #[error("pixels per day must be a positive number, got {0}")]
    InvalidScale(f32),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed chart config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid hex color '{0}': expected 6 or 8 hex digits")]
    InvalidColor(String),

    #[error("color palette must contain at least one color")]
    EmptyPalette,

    #[error("'{field}' must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
}

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required columns (found {found:?}); need equipment and start date")]
    MissingColumns { found: Vec<String> },
}
