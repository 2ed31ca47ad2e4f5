//! # Rated-Data Approximation Calculation
//!
//! The physics-approximation variant of the engine: works from nameplate
//! ratings and outline dimensions only (no slot geometry), so fluxes and
//! inductions come from empirical scaling rules rather than the staged
//! winding calculation in [`super::design`]. The two variants encode
//! genuinely different formula sets and are selected explicitly by the
//! caller, never inferred.
//!
//! ## Example
//!
//! ```rust
//! use motor_core::calculations::rated::{calculate, RatedInput};
//! use motor_core::quantities::{Power, PowerUnit, Voltage};
//!
//! let input = RatedInput {
//!     name: "WEG-100CV".to_string(),
//!     power: Power::new(100.0, PowerUnit::Cv).unwrap(),
//!     voltage: Voltage::new(380.0).unwrap(),
//!     frequency: 60.0,
//!     poles: 4,
//!     efficiency: 0.95,
//!     power_factor: 0.85,
//!     current_density: 4.0,
//!     diameter: 200.0,
//!     length: 300.0,
//!     air_gap_length: 1.0,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.air_gap_induction.value() > 0.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::alerts::ValidationAlert;
use crate::errors::{EngineError, EngineResult};
use crate::quantities::{MagneticInduction, Power, Voltage};

/// Steel density used for the weight estimate, kg/m³
const STEEL_DENSITY: f64 = 7800.0;

/// Input parameters for the rated-data calculation.
///
/// Lengths in millimeters, matching nameplate/outline drawings.
///
/// ## JSON Example
///
/// ```json
/// {
///   "name": "WEG-100CV",
///   "power": { "value": 100.0, "unit": "CV" },
///   "voltage": 380.0,
///   "frequency": 60.0,
///   "poles": 4,
///   "efficiency": 0.95,
///   "power_factor": 0.85,
///   "current_density": 4.0,
///   "diameter": 200.0,
///   "length": 300.0,
///   "air_gap_length": 1.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedInput {
    /// Motor name or model designation
    pub name: String,

    /// Rated power with its unit (CV, HP, kW or W)
    pub power: Power,

    /// Nominal line voltage
    pub voltage: Voltage,

    /// Line frequency, Hz
    pub frequency: f64,

    /// Number of poles (even)
    pub poles: u32,

    /// Efficiency, fraction
    pub efficiency: f64,

    /// Power factor, fraction
    pub power_factor: f64,

    /// Target current density, A/mm²
    pub current_density: f64,

    /// Outer stator diameter, mm
    pub diameter: f64,

    /// Core length, mm
    pub length: f64,

    /// Radial air-gap length, mm
    pub air_gap_length: f64,
}

impl RatedInput {
    /// Validate structural bounds, in the fixed field order
    /// name → power → voltage → frequency → poles → efficiency →
    /// power factor → current density → geometry.
    pub fn validate(&self) -> EngineResult<()> {
        if self.name.trim().is_empty() {
            return Err(EngineError::invalid_parameter(
                "name",
                &self.name,
                "Motor name is required",
            ));
        }
        if self.name.len() > 100 {
            return Err(EngineError::invalid_parameter(
                "name",
                self.name.len().to_string(),
                "Motor name cannot exceed 100 characters",
            ));
        }
        if self.power.value() <= 0.0 || self.power.value() > 10000.0 {
            return Err(EngineError::invalid_parameter(
                "power",
                self.power.value().to_string(),
                "Power rating must be in (0, 10000]",
            ));
        }
        if self.voltage.value() <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "voltage",
                self.voltage.value().to_string(),
                "Voltage must be positive",
            ));
        }
        if self.frequency <= 0.0 || self.frequency > 400.0 {
            return Err(EngineError::invalid_parameter(
                "frequency",
                self.frequency.to_string(),
                "Frequency must be in (0, 400] Hz",
            ));
        }
        if self.poles == 0 || self.poles % 2 != 0 {
            return Err(EngineError::invalid_parameter(
                "poles",
                self.poles.to_string(),
                "Poles must be a positive even number",
            ));
        }
        if self.poles > 100 {
            return Err(EngineError::invalid_parameter(
                "poles",
                self.poles.to_string(),
                "Poles cannot exceed 100",
            ));
        }
        if self.efficiency <= 0.0 || self.efficiency > 1.05 {
            return Err(EngineError::invalid_parameter(
                "efficiency",
                self.efficiency.to_string(),
                "Efficiency must be in (0, 1.05]",
            ));
        }
        if self.power_factor <= 0.0 || self.power_factor > 1.0 {
            return Err(EngineError::invalid_parameter(
                "power_factor",
                self.power_factor.to_string(),
                "Power factor must be in (0, 1]",
            ));
        }
        if self.current_density <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "current_density",
                self.current_density.to_string(),
                "Current density must be positive",
            ));
        }
        if self.diameter <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "diameter",
                self.diameter.to_string(),
                "Diameter must be positive",
            ));
        }
        if self.length <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "length",
                self.length.to_string(),
                "Length must be positive",
            ));
        }
        if self.air_gap_length <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "air_gap_length",
                self.air_gap_length.to_string(),
                "Air gap length must be positive",
            ));
        }
        Ok(())
    }
}

/// Results from the rated-data approximation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedResult {
    /// Synchronous speed, RPM (120·f / poles)
    pub synchronous_speed: f64,

    /// Rated torque at synchronous speed, N·m
    pub rated_torque: f64,

    /// Cylindrical air-gap area, m²
    pub air_gap_area: f64,

    /// Flux per pole from the empirical power scaling, Wb
    pub flux_per_pole: f64,

    /// Air-gap flux density
    pub air_gap_induction: MagneticInduction,

    /// Approximate tooth flux density (tooth area ≈ 0.7 × gap area)
    pub tooth_induction: MagneticInduction,

    /// Approximate yoke flux density (yoke area ≈ 0.3 × gap area,
    /// flux split over two return paths)
    pub yoke_induction: MagneticInduction,

    /// Winding factor (typical pitch × distribution values)
    pub winding_factor: f64,

    /// Turns-per-phase estimate
    pub turns_per_phase: f64,

    /// Induced EMF from the estimated turns, V
    pub induced_voltage: f64,

    /// Specific power, kW per kg of estimated core mass
    pub specific_power: f64,

    /// Alerts from the engineering-limit rules
    pub alerts: Vec<ValidationAlert>,
}

/// Run the rated-data approximation.
///
/// Pure and deterministic, same contract as the design pipeline.
pub fn calculate(input: &RatedInput) -> EngineResult<RatedResult> {
    input.validate()?;

    let power_watts = input.power.to_watts();
    let poles = f64::from(input.poles);

    let synchronous_speed = 120.0 * input.frequency / poles;
    let rated_torque = power_watts * 60.0 / (2.0 * PI * synchronous_speed);

    // Outline dimensions arrive in mm
    let air_gap_radius = input.diameter / 2000.0;
    let air_gap_area = 2.0 * PI * air_gap_radius * (input.length / 1000.0);

    // Empirical flux scaling against a 1 kW / 1 mWb / 50 Hz / 4-pole reference
    let flux_per_pole =
        0.001 * (power_watts / 1000.0).sqrt() * (50.0 / input.frequency) * (4.0 / poles);

    let air_gap_induction = flux_per_pole / air_gap_area;
    let tooth_induction = flux_per_pole / (air_gap_area * 0.7);
    let yoke_induction = flux_per_pole / (2.0 * air_gap_area * 0.3);

    // Typical pitch (0.966) and distribution (0.956) factors
    let winding_factor = 0.966 * 0.956;

    // EMF = 4.44·f·N·Φ·kw with the typical 0.9 winding factor
    let turns_per_phase =
        input.voltage.value() / (4.44 * input.frequency * flux_per_pole * 0.9);
    let induced_voltage = 4.44 * input.frequency * turns_per_phase * flux_per_pole * 0.9;

    // kW per kg of a solid-steel cylinder of the outline dimensions
    let power_kw = power_watts / 1000.0;
    let volume = PI * (input.diameter / 2000.0).powi(2) * (input.length / 1000.0);
    let estimated_weight = volume * STEEL_DENSITY;
    let specific_power = power_kw / estimated_weight;

    let alerts = limit_alerts(input, air_gap_induction);

    Ok(RatedResult {
        synchronous_speed,
        rated_torque,
        air_gap_area,
        flux_per_pole,
        air_gap_induction: MagneticInduction::new(air_gap_induction)?,
        tooth_induction: MagneticInduction::new(tooth_induction)?,
        yoke_induction: MagneticInduction::new(yoke_induction)?,
        winding_factor,
        turns_per_phase,
        induced_voltage,
        specific_power,
        alerts,
    })
}

/// Engineering-limit rules for the rated shape.
fn limit_alerts(input: &RatedInput, air_gap_induction: f64) -> Vec<ValidationAlert> {
    let mut alerts = Vec::new();

    if air_gap_induction > 1.1 {
        alerts.push(
            ValidationAlert::critical(
                "AirGapInduction",
                "Air gap induction exceeds 1.1 T - magnetic saturation risk",
            )
            .with_value(air_gap_induction)
            .with_max(1.1),
        );
    }

    if input.current_density > 4.5 {
        alerts.push(
            ValidationAlert::warning(
                "CurrentDensity",
                "Current density above 4.5 A/mm² - consider increasing conductor area",
            )
            .with_value(input.current_density)
            .with_max(4.5),
        );
    }
    if input.current_density > 6.5 {
        alerts.push(
            ValidationAlert::critical(
                "CurrentDensity",
                "Current density exceeds 6.5 A/mm² - unsafe operating condition",
            )
            .with_value(input.current_density)
            .with_max(6.5),
        );
    }

    if input.efficiency < 0.90 {
        alerts.push(
            ValidationAlert::warning(
                "Efficiency",
                "Efficiency below 90% - design optimization needed",
            )
            .with_value(input.efficiency),
        );
    }
    if input.efficiency > 1.05 {
        alerts.push(
            ValidationAlert::critical(
                "Efficiency",
                "Efficiency above 105% - physically impossible",
            )
            .with_value(input.efficiency),
        );
    }

    if input.power_factor < 0.8 {
        alerts.push(
            ValidationAlert::warning(
                "PowerFactor",
                "Power factor below 0.8 - consider power factor correction",
            )
            .with_value(input.power_factor),
        );
    }

    let aspect_ratio = input.length / input.diameter;
    if aspect_ratio > 3.0 {
        alerts.push(
            ValidationAlert::warning(
                "AspectRatio",
                "Length/diameter ratio above 3.0 - mechanical stability concerns",
            )
            .with_value(aspect_ratio)
            .with_range(0.5, 3.0),
        );
    }
    if aspect_ratio < 0.5 {
        alerts.push(
            ValidationAlert::warning(
                "AspectRatio",
                "Length/diameter ratio below 0.5 - inefficient magnetic circuit",
            )
            .with_value(aspect_ratio)
            .with_range(0.5, 3.0),
        );
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Severity;
    use crate::quantities::PowerUnit;

    fn test_input() -> RatedInput {
        RatedInput {
            name: "WEG-100CV".to_string(),
            power: Power::new(100.0, PowerUnit::Cv).unwrap(),
            voltage: Voltage::new(380.0).unwrap(),
            frequency: 60.0,
            poles: 4,
            efficiency: 0.95,
            power_factor: 0.85,
            current_density: 4.0,
            diameter: 200.0,
            length: 300.0,
            air_gap_length: 1.0,
        }
    }

    #[test]
    fn test_synchronous_speed_and_torque() {
        let result = calculate(&test_input()).unwrap();
        assert_eq!(result.synchronous_speed, 1800.0);

        // T = P·60 / (2π·n) = 73550·60 / (2π·1800)
        let expected = 73550.0 * 60.0 / (2.0 * PI * 1800.0);
        assert!((result.rated_torque - expected).abs() < 1e-9);
    }

    #[test]
    fn test_flux_scaling() {
        let result = calculate(&test_input()).unwrap();
        // 0.001 · √73.55 · (50/60) · (4/4)
        let expected = 0.001 * 73.55_f64.sqrt() * (50.0 / 60.0);
        assert!((result.flux_per_pole - expected).abs() < 1e-12);
    }

    #[test]
    fn test_induction_ratios() {
        let result = calculate(&test_input()).unwrap();
        let gap = result.air_gap_induction.value();
        // Tooth area is 0.7 of the gap area, so induction scales by 1/0.7
        assert!((result.tooth_induction.value() - gap / 0.7).abs() < 1e-12);
        // Yoke: 0.3 of the gap area, flux split in two
        assert!((result.yoke_induction.value() - gap / 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_induced_voltage_matches_line_voltage() {
        // Turns are derived from the EMF equation, so feeding them back in
        // reproduces the line voltage.
        let result = calculate(&test_input()).unwrap();
        assert!((result.induced_voltage - 380.0).abs() < 1e-9);
    }

    #[test]
    fn test_healthy_design_has_no_alerts() {
        let result = calculate(&test_input()).unwrap();
        assert!(result.alerts.is_empty(), "unexpected: {:?}", result.alerts);
    }

    #[test]
    fn test_current_density_tiers() {
        let mut input = test_input();
        input.current_density = 5.0;
        let result = calculate(&input).unwrap();
        assert!(result
            .alerts
            .iter()
            .any(|a| a.parameter == "CurrentDensity" && a.severity == Severity::Warning));
        assert!(!result
            .alerts
            .iter()
            .any(|a| a.parameter == "CurrentDensity" && a.severity == Severity::Critical));

        // Above 6.5 both tiers fire
        input.current_density = 7.0;
        let result = calculate(&input).unwrap();
        let density_alerts: Vec<_> = result
            .alerts
            .iter()
            .filter(|a| a.parameter == "CurrentDensity")
            .collect();
        assert_eq!(density_alerts.len(), 2);
        assert!(density_alerts.iter().any(|a| a.severity == Severity::Critical));
    }

    #[test]
    fn test_low_efficiency_and_power_factor_warn() {
        let mut input = test_input();
        input.efficiency = 0.85;
        input.power_factor = 0.7;
        let result = calculate(&input).unwrap();
        assert!(result.alerts.iter().any(|a| a.parameter == "Efficiency"));
        assert!(result.alerts.iter().any(|a| a.parameter == "PowerFactor"));
    }

    #[test]
    fn test_aspect_ratio_bounds() {
        let mut input = test_input();
        input.length = 700.0; // 3.5 × diameter
        let result = calculate(&input).unwrap();
        assert!(result.alerts.iter().any(|a| a.parameter == "AspectRatio"));

        input.length = 80.0; // 0.4 × diameter
        let result = calculate(&input).unwrap();
        assert!(result.alerts.iter().any(|a| a.parameter == "AspectRatio"));
    }

    #[test]
    fn test_validation_order_is_deterministic() {
        // Both name and frequency invalid: name wins (first in order)
        let mut input = test_input();
        input.name = "  ".to_string();
        input.frequency = 0.0;
        assert_eq!(calculate(&input).unwrap_err().subject(), "name");
    }

    #[test]
    fn test_determinism_bit_identical() {
        let a = calculate(&test_input()).unwrap();
        let b = calculate(&test_input()).unwrap();
        assert_eq!(a.flux_per_pole.to_bits(), b.flux_per_pole.to_bits());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: RatedInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("air_gap_induction"));
        let roundtrip: RatedResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
        // Full-precision floats must survive the trip bit-for-bit
        assert_eq!(
            result.air_gap_area.to_bits(),
            roundtrip.air_gap_area.to_bits()
        );
    }
}
