//! # Motor Calculations
//!
//! The two calculation variants supported by the engine. Each follows the
//! pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, EngineError>` - Pure calculation
//!   function
//!
//! ## Available Calculations
//!
//! - [`design`] - Full staged pipeline over winding core data (slot
//!   geometry, star/delta ratings)
//! - [`rated`] - Physics approximation over nameplate ratings and outline
//!   dimensions
//!
//! The two variants encode different formula sets over differently shaped
//! inputs. [`MotorInput`] tags them so a caller always selects one
//! explicitly; nothing is inferred from field presence.

pub mod design;
pub mod rated;

use serde::{Deserialize, Serialize};

use crate::errors::EngineResult;

// Re-export commonly used types
pub use design::{CoreGeometry, DesignInput, DesignResult, HarmonicSpectrum};
pub use rated::{RatedInput, RatedResult};

/// Tagged wrapper for the two historical input shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MotorInput {
    /// Nameplate ratings and outline dimensions
    Rated(RatedInput),
    /// Winding core data for the full staged pipeline
    Design(DesignInput),
}

/// Result wrapper mirroring the [`MotorInput`] variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MotorOutcome {
    Rated(RatedResult),
    Design(DesignResult),
}

impl MotorInput {
    /// Get the user-provided name or model for this input
    pub fn label(&self) -> &str {
        match self {
            MotorInput::Rated(r) => &r.name,
            MotorInput::Design(d) => &d.model,
        }
    }

    /// Get the calculation variant as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            MotorInput::Rated(_) => "Rated",
            MotorInput::Design(_) => "Design",
        }
    }

    /// Validate the structural bounds of the wrapped input
    pub fn validate(&self) -> EngineResult<()> {
        match self {
            MotorInput::Rated(r) => r.validate(),
            MotorInput::Design(d) => d.validate(),
        }
    }

    /// Run the matching calculation variant
    pub fn calculate(&self) -> EngineResult<MotorOutcome> {
        match self {
            MotorInput::Rated(r) => rated::calculate(r).map(MotorOutcome::Rated),
            MotorInput::Design(d) => design::calculate(d).map(MotorOutcome::Design),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Power, PowerUnit, Voltage};

    fn rated_input() -> RatedInput {
        RatedInput {
            name: "R-1".to_string(),
            power: Power::new(50.0, PowerUnit::Kw).unwrap(),
            voltage: Voltage::new(380.0).unwrap(),
            frequency: 50.0,
            poles: 4,
            efficiency: 0.93,
            power_factor: 0.88,
            current_density: 4.0,
            diameter: 250.0,
            length: 350.0,
            air_gap_length: 0.8,
        }
    }

    #[test]
    fn test_dispatch_by_variant() {
        let input = MotorInput::Rated(rated_input());
        assert_eq!(input.calc_type(), "Rated");
        assert_eq!(input.label(), "R-1");
        match input.calculate().unwrap() {
            MotorOutcome::Rated(r) => assert!(r.synchronous_speed > 0.0),
            MotorOutcome::Design(_) => panic!("wrong variant dispatched"),
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let input = MotorInput::Rated(rated_input());
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains("\"type\":\"Rated\""));
        let roundtrip: MotorInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }
}
