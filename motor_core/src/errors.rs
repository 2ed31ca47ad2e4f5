//! # Error Types
//!
//! Structured error types for motor_core. All errors are local and
//! recoverable: the calling layer translates them into 400-class responses,
//! they never crash the process.
//!
//! ## Example
//!
//! ```rust
//! use motor_core::errors::{EngineError, EngineResult};
//!
//! fn validate_frequency(frequency_hz: f64) -> EngineResult<()> {
//!     if frequency_hz <= 0.0 {
//!         return Err(EngineError::invalid_parameter(
//!             "frequency",
//!             frequency_hz.to_string(),
//!             "Frequency must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for motor_core operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Structured error type for the calculation engine.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic error handling by the API layer and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum EngineError {
    /// A negative value was supplied to a physical quantity
    #[error("Invalid quantity '{quantity}': {value} - value cannot be negative")]
    InvalidQuantity { quantity: String, value: f64 },

    /// A specification field violates a hard structural bound
    /// (zero/negative denominator, odd pole count, empty name, ...)
    #[error("Invalid parameter '{field}': {value} - {reason}")]
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit conversion requested for an unmodeled unit
    #[error("Unknown unit: {unit}")]
    UnknownUnit { unit: String },
}

impl EngineError {
    /// Create an InvalidQuantity error
    pub fn invalid_quantity(quantity: impl Into<String>, value: f64) -> Self {
        EngineError::InvalidQuantity {
            quantity: quantity.into(),
            value,
        }
    }

    /// Create an InvalidParameter error
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        EngineError::InvalidParameter {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        EngineError::UnknownUnit { unit: unit.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            EngineError::InvalidQuantity { .. } => "INVALID_QUANTITY",
            EngineError::InvalidParameter { .. } => "INVALID_PARAMETER",
            EngineError::UnknownUnit { .. } => "UNKNOWN_UNIT",
        }
    }

    /// The field or quantity name the error concerns
    pub fn subject(&self) -> &str {
        match self {
            EngineError::InvalidQuantity { quantity, .. } => quantity,
            EngineError::InvalidParameter { field, .. } => field,
            EngineError::UnknownUnit { unit } => unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = EngineError::invalid_parameter("poles", "3", "Poles must be even");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: EngineError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            EngineError::invalid_quantity("power", -1.0).error_code(),
            "INVALID_QUANTITY"
        );
        assert_eq!(EngineError::unknown_unit("PS").error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_error_subject() {
        let error = EngineError::invalid_parameter("frequency", "0", "must be positive");
        assert_eq!(error.subject(), "frequency");
    }

    #[test]
    fn test_error_display() {
        let error = EngineError::invalid_parameter("poles", "3", "Poles must be even");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'poles': 3 - Poles must be even"
        );
    }
}
