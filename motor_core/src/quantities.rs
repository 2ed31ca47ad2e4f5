//! # Physical Quantity Types
//!
//! Immutable value types for the electrical quantities the engine works
//! with. Each wraps an `f64` and rejects negative values at construction.
//!
//! ## Design Philosophy
//!
//! Simple validated wrappers rather than a full units library:
//! - The engine uses a fixed, small set of units (V, A, T, Wb, plus the
//!   power units CV/HP/kW/W)
//! - JSON serialization stays clean
//! - Minimal runtime overhead
//!
//! ## Example
//!
//! ```rust
//! use motor_core::quantities::{Power, PowerUnit, Voltage};
//!
//! let rating = Power::new(100.0, PowerUnit::Cv).unwrap();
//! assert_eq!(rating.to_watts(), 73550.0);
//!
//! let line = Voltage::new(380.0).unwrap();
//! assert_eq!(line.value(), 380.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{EngineError, EngineResult};

// ============================================================================
// Power
// ============================================================================

/// Unit tag for a [`Power`] quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PowerUnit {
    /// Metric horsepower (cavalo-vapor), 735.5 W
    #[default]
    #[serde(rename = "CV")]
    Cv,
    /// Mechanical horsepower, 746 W
    #[serde(rename = "HP")]
    Hp,
    /// Kilowatt
    #[serde(rename = "kW")]
    Kw,
    /// Watt
    #[serde(rename = "W")]
    W,
}

impl PowerUnit {
    /// Multiplier to convert one unit of this power into watts
    pub fn watts_multiplier(self) -> f64 {
        match self {
            PowerUnit::Cv => 735.5,
            PowerUnit::Hp => 746.0,
            PowerUnit::Kw => 1000.0,
            PowerUnit::W => 1.0,
        }
    }

    /// Parse a unit tag as it appears on the wire ("CV", "HP", "kW", "W").
    ///
    /// Unrecognized tags fail with [`EngineError::UnknownUnit`].
    pub fn parse(tag: &str) -> EngineResult<Self> {
        match tag {
            "CV" => Ok(PowerUnit::Cv),
            "HP" => Ok(PowerUnit::Hp),
            "kW" => Ok(PowerUnit::Kw),
            "W" => Ok(PowerUnit::W),
            other => Err(EngineError::unknown_unit(other)),
        }
    }

    /// Display label for the unit
    pub fn label(self) -> &'static str {
        match self {
            PowerUnit::Cv => "CV",
            PowerUnit::Hp => "HP",
            PowerUnit::Kw => "kW",
            PowerUnit::W => "W",
        }
    }
}

/// Motor power rating with its unit tag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Power {
    value: f64,
    unit: PowerUnit,
}

impl Power {
    /// Create a power quantity. Negative values fail with
    /// [`EngineError::InvalidQuantity`].
    pub fn new(value: f64, unit: PowerUnit) -> EngineResult<Self> {
        if value < 0.0 {
            return Err(EngineError::invalid_quantity("power", value));
        }
        Ok(Power { value, unit })
    }

    /// Create from a raw value and a wire-format unit tag
    pub fn from_parts(value: f64, unit_tag: &str) -> EngineResult<Self> {
        Power::new(value, PowerUnit::parse(unit_tag)?)
    }

    /// Raw value in the source unit
    pub fn value(self) -> f64 {
        self.value
    }

    /// The unit tag
    pub fn unit(self) -> PowerUnit {
        self.unit
    }

    /// Convert to watts via the fixed multiplier table
    /// (CV→735.5, HP→746, kW→1000, W→1)
    pub fn to_watts(self) -> f64 {
        self.value * self.unit.watts_multiplier()
    }
}

// ============================================================================
// Voltage, Current, MagneticInduction
// ============================================================================

macro_rules! scalar_quantity {
    ($(#[$doc:meta])* $name:ident, $label:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(f64);

        impl $name {
            /// Create the quantity. Negative values fail with
            /// [`EngineError::InvalidQuantity`].
            pub fn new(value: f64) -> EngineResult<Self> {
                if value < 0.0 {
                    return Err(EngineError::invalid_quantity($label, value));
                }
                Ok(Self(value))
            }

            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

scalar_quantity!(
    /// Voltage in volts
    Voltage,
    "voltage"
);
scalar_quantity!(
    /// Current in amperes
    Current,
    "current"
);
scalar_quantity!(
    /// Magnetic flux density in teslas
    MagneticInduction,
    "magnetic_induction"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_to_watts() {
        assert_eq!(Power::new(1.0, PowerUnit::Cv).unwrap().to_watts(), 735.5);
        assert_eq!(Power::new(1.0, PowerUnit::Hp).unwrap().to_watts(), 746.0);
        assert_eq!(Power::new(2.0, PowerUnit::Kw).unwrap().to_watts(), 2000.0);
        assert_eq!(Power::new(42.0, PowerUnit::W).unwrap().to_watts(), 42.0);
    }

    #[test]
    fn test_negative_power_rejected() {
        let err = Power::new(-5.0, PowerUnit::Hp).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_QUANTITY");
    }

    #[test]
    fn test_unknown_unit() {
        let err = PowerUnit::parse("PS").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");
        assert!(Power::from_parts(10.0, "kW").is_ok());
    }

    #[test]
    fn test_equality_by_value_and_unit() {
        let a = Power::new(1.0, PowerUnit::Kw).unwrap();
        let b = Power::new(1.0, PowerUnit::Kw).unwrap();
        let c = Power::new(1.0, PowerUnit::Hp).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_scalar_quantities() {
        assert_eq!(Voltage::new(380.0).unwrap().value(), 380.0);
        assert!(Current::new(-1.0).is_err());
        assert_eq!(MagneticInduction::new(0.0).unwrap().value(), 0.0);
    }

    #[test]
    fn test_serialization() {
        let v = Voltage::new(220.0).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "220.0");

        let p = Power::new(10.0, PowerUnit::Hp).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert!(json.contains("\"HP\""));
        let roundtrip: Power = serde_json::from_str(&json).unwrap();
        assert_eq!(p, roundtrip);
    }
}
