//! # Validation Alerts
//!
//! Severity-tagged engineering alerts attached to a successful calculation.
//! Soft-limit violations (typical-range efficiency, saturation thresholds,
//! current-density recommendations, harmonic distortion) are never errors;
//! they accumulate here in pipeline-stage order and are never deduplicated.

use serde::{Deserialize, Serialize};

/// Alert severity, from informational to safety-critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// One engineering limit violation observed during a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationAlert {
    pub severity: Severity,

    /// Human-readable message
    pub message: String,

    /// The parameter the alert concerns (e.g., "StatorToothInduction")
    pub parameter: String,

    /// The offending value, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<f64>,

    /// Recommended lower bound, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_min: Option<f64>,

    /// Recommended upper bound, where one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_max: Option<f64>,
}

impl ValidationAlert {
    pub fn new(severity: Severity, parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationAlert {
            severity,
            message: message.into(),
            parameter: parameter.into(),
            current_value: None,
            recommended_min: None,
            recommended_max: None,
        }
    }

    pub fn info(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationAlert::new(Severity::Info, parameter, message)
    }

    pub fn warning(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationAlert::new(Severity::Warning, parameter, message)
    }

    pub fn critical(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationAlert::new(Severity::Critical, parameter, message)
    }

    /// Attach the offending value
    pub fn with_value(mut self, value: f64) -> Self {
        self.current_value = Some(value);
        self
    }

    /// Attach a recommended [min, max] range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.recommended_min = Some(min);
        self.recommended_max = Some(max);
        self
    }

    /// Attach only a recommended maximum
    pub fn with_max(mut self, max: f64) -> Self {
        self.recommended_max = Some(max);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let alert = ValidationAlert::warning("CurrentDensity", "High current density")
            .with_value(5.2)
            .with_max(4.5);
        assert_eq!(alert.severity, Severity::Warning);
        assert_eq!(alert.current_value, Some(5.2));
        assert_eq!(alert.recommended_min, None);
        assert_eq!(alert.recommended_max, Some(4.5));
    }

    #[test]
    fn test_serialization_skips_absent_bounds() {
        let alert = ValidationAlert::critical("PowerFactor", "Out of range");
        let json = serde_json::to_string(&alert).unwrap();
        assert!(!json.contains("recommended_min"));
        assert!(json.contains("Critical"));

        let roundtrip: ValidationAlert = serde_json::from_str(&json).unwrap();
        assert_eq!(alert, roundtrip);
    }
}
