//! Engine error types

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Configuration error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
