//! Error types for bidifmt
//!
//! The formatting path itself is total: every Unicode string, including
//! empty or purely neutral text, produces a deterministic result. Errors
//! only arise at the boundaries, where caller input (direction names,
//! locale tags, batch jobs, files) has to be validated.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BidiError>;

/// Main error type for bidifmt
#[derive(Debug, Error)]
pub enum BidiError {
    #[error("invalid direction {0:?} (expected \"ltr\" or \"rtl\")")]
    InvalidDirection(String),

    #[error("invalid locale tag: {0}")]
    InvalidLocale(String),

    #[error("batch job failed: {0}")]
    Batch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
