//! Error types for weekview-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("event source query failed: {0}")]
    Source(String),

    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("invalid slot label: {0}")]
    InvalidSlotLabel(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
