//! Error types for control primitive construction.

use thiserror::Error;

/// Result type for control primitive operations.
pub type ControlResult<T> = Result<T, ControlError>;

/// Errors that can occur when configuring a control primitive.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ControlError {
    /// Invalid argument provided to a constructor.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
