//! Error types for setup paths
//!
//! The per-frame simulation never fails; these only surface while selecting
//! levels, reading settings, loading assets, or wiring up the page.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no level with id {0}")]
    UnknownLevel(u32),
    #[error("level {level} is invalid: {reason}")]
    InvalidLevel { level: u32, reason: String },
    #[error("settings could not be parsed: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("asset `{key}` failed to load")]
    Asset { key: String },
    #[error("browser setup failed: {0}")]
    Platform(String),
}
