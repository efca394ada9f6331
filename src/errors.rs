// ABOUTME: Unified error type for the training plan engine
// ABOUTME: Value-level errors only; nothing in this crate panics or retries
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Error Handling
//!
//! Every fallible operation in this crate returns [`AppResult`]. Errors are
//! plain values carrying a category and a human-readable message; the caller
//! (UI, persistence layer) decides how to surface them. A failed generation
//! leaves any previously held plan untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the engine
#[derive(Debug, Error)]
pub enum AppError {
    /// The provided input configuration is invalid (e.g. race date in the past)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A numeric value is outside its documented range
    #[error("Value out of range: {0}")]
    ValueOutOfRange(String),

    /// Data could not be parsed in the expected format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// A referenced entity (date, workout id) does not exist in the plan
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal invariant was violated
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid-input error
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a value-out-of-range error
    #[must_use]
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::ValueOutOfRange(message.into())
    }

    /// Create an invalid-format error
    #[must_use]
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::InvalidFormat(message.into())
    }

    /// Create a not-found error
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create an internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable code for collaborators that serialize errors
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            Self::InvalidFormat(_) => ErrorCode::InvalidFormat,
            Self::NotFound(_) => ErrorCode::ResourceNotFound,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Standard error codes exposed at the interface boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The provided value is outside the acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// The data format is invalid
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat,
    /// The requested resource was not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// An internal error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        let err = AppError::invalid_input("race date is in the past");
        assert_eq!(err.code(), ErrorCode::InvalidInput);
        assert_eq!(
            serde_json::to_string(&err.code()).unwrap(),
            "\"INVALID_INPUT\""
        );
    }

    #[test]
    fn test_display_includes_message() {
        let err = AppError::value_out_of_range("weekly hours must be 2-40, got 55");
        assert!(err.to_string().contains("55"));
    }
}
