//! # Errors
//!
//! A bad form is not an error: it comes back as a
//! [`crate::validation::SchemaResult`]. [`CalcError`] is reserved for broken
//! catalog data, storage and config trouble, and formulas that cannot run.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn parse_radius(radius: f64) -> CalcResult<f64> {
//!     if radius < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "radius",
//!             radius.to_string(),
//!             "Radius cannot be negative",
//!         ));
//!     }
//!     Ok(radius)
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shorthand used across the crate
pub type CalcResult<T> = Result<T, CalcError>;

/// Every failure calc_core reports. Serializes as `{"type": ..., "details": ...}`.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value reached a formula that it cannot use
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Calculator id not present in the catalog
    #[error("Calculator not found: {id}")]
    CalculatorNotFound { id: String },

    /// Two catalog records share an id
    #[error("Duplicate {kind} id in catalog: {id}")]
    DuplicateId { kind: String, id: String },

    /// A calculator references a category that has no descriptor
    #[error("Calculator '{calculator_id}' references unknown category '{category}'")]
    DanglingCategory {
        calculator_id: String,
        category: String,
    },

    /// A calculator sits in another category's table
    #[error("Calculator '{calculator_id}' is declared as '{declared}' but listed under '{listed}'")]
    CategoryMismatch {
        calculator_id: String,
        declared: String,
        listed: String,
    },

    /// Resolver mapping points at a unit that does not exist
    #[error("Calculator '{calculator_id}' is mapped to unknown unit '{unit_key}'")]
    UnknownUnit {
        calculator_id: String,
        unit_key: String,
    },

    /// The inputs were accepted but the formula has no answer for them
    #[error("Could not compute {calculator}: {reason}")]
    CalculationFailed { calculator: String, reason: String },

    /// Storage backend error (read, write or remove)
    #[error("Storage error: {operation} on '{key}' - {reason}")]
    StorageError {
        operation: String,
        key: String,
        reason: String,
    },

    /// Storage is locked by another process
    #[error("Storage locked: '{path}'")]
    StorageLocked { path: String },

    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Configuration file could not be read or is invalid
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Network fetch failed (offline cache)
    #[error("Network error fetching '{url}': {reason}")]
    NetworkError { url: String, reason: String },
}

impl CalcError {
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    pub fn calculator_not_found(id: impl Into<String>) -> Self {
        CalcError::CalculatorNotFound { id: id.into() }
    }

    pub fn duplicate_id(kind: impl Into<String>, id: impl Into<String>) -> Self {
        CalcError::DuplicateId {
            kind: kind.into(),
            id: id.into(),
        }
    }

    pub fn calculation_failed(calculator: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculator: calculator.into(),
            reason: reason.into(),
        }
    }

    /// `operation` is one of `read`, `write`, `remove`
    pub fn storage(operation: impl Into<String>, key: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::StorageError {
            operation: operation.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Worth retrying: a lock held by another process or a flaky network
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::StorageLocked { .. } | CalcError::NetworkError { .. }
        )
    }

    /// Stable SCREAMING_CASE code for logs and JSON output
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::CalculatorNotFound { .. } => "CALCULATOR_NOT_FOUND",
            CalcError::DuplicateId { .. } => "DUPLICATE_ID",
            CalcError::DanglingCategory { .. } => "DANGLING_CATEGORY",
            CalcError::CategoryMismatch { .. } => "CATEGORY_MISMATCH",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::StorageError { .. } => "STORAGE_ERROR",
            CalcError::StorageLocked { .. } => "STORAGE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::ConfigError { .. } => "CONFIG_ERROR",
            CalcError::NetworkError { .. } => "NETWORK_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_tagged() {
        let error = CalcError::calculation_failed("loan-calculator", "payment overflow");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "CalculationFailed");
        assert_eq!(value["details"]["calculator"], "loan-calculator");
        let back: CalcError = serde_json::from_value(value).unwrap();
        assert_eq!(back, error);
        assert_eq!(error.to_string(), "Could not compute loan-calculator: payment overflow");
    }

    #[test]
    fn test_codes() {
        assert_eq!(CalcError::missing_field("bill").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::calculator_not_found("nope").error_code(),
            "CALCULATOR_NOT_FOUND"
        );
        assert_eq!(
            CalcError::duplicate_id("calculator", "bmi-calculator").error_code(),
            "DUPLICATE_ID"
        );
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::StorageLocked { path: "x".into() }.is_recoverable());
        assert!(!CalcError::storage("write", "k", "quota").is_recoverable());
    }
}
