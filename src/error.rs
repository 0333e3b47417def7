//! Custom error types for samity-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::Money;

/// The main error type for samity-cli operations
#[derive(Error, Debug)]
pub enum SamityError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transaction amount is zero or negative
    #[error("Invalid amount: {0} (amounts must be positive)")]
    InvalidAmount(Money),

    /// A transaction or deletion targets a member that does not exist
    #[error("Member not found: {0}")]
    UnknownMember(String),

    /// A loan repayment exceeds the member's outstanding principal
    #[error("Repayment of {requested} exceeds outstanding principal of {outstanding}")]
    OverRepayment {
        requested: Money,
        outstanding: Money,
    },

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl SamityError {
    /// Create an "unknown member" error from any identifier
    pub fn member_not_found(identifier: impl Into<String>) -> Self {
        Self::UnknownMember(identifier.into())
    }

    /// Check if this is an "unknown member" error
    pub fn is_unknown_member(&self) -> bool {
        matches!(self, Self::UnknownMember(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SamityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SamityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for samity-cli operations
pub type SamityResult<T> = Result<T, SamityError>;
