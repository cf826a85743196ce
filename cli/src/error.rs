//! Errors surfaced by the sampler CLI

use thiserror::Error;

/// Errors that can occur while configuring or emitting samples
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Shift {shift} out of range: must be at most {max}")]
    ShiftOutOfRange { shift: u8, max: u8 },

    #[error("Sample count must be positive")]
    EmptyCount,

    #[error("Sample count {count} too large: must be at most {max}")]
    CountTooLarge { count: usize, max: usize },

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
