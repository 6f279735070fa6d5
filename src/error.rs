//! Error types for the reference board

use thiserror::Error;

/// Result type alias for board operations that touch the outside world
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors raised at the edges (file metadata, config loading).
///
/// None of these reach the user: intake skips the offending file and
/// the config loader falls back to defaults.
#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
