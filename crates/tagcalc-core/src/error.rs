//! Error types for tagcalc-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a variable table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Variable name is empty
    #[error("Variable name must not be empty")]
    EmptyName,

    /// Variable name contains a bracket or whitespace
    #[error("Invalid variable name: {0:?}")]
    InvalidName(String),

    /// Two variables share a name
    #[error("Duplicate variable name: {0}")]
    DuplicateName(String),

    /// Variable value is NaN or infinite
    #[error("Variable {name} has a non-finite value: {value}")]
    NonFiniteValue { name: String, value: f64 },

    /// Variable source payload could not be decoded
    #[error("Invalid variable payload: {0}")]
    Payload(String),
}
