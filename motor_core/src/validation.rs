//! # Request Validation Rule Set
//!
//! The outer validation gate applied by the calling layer before a
//! calculation is attempted. Independent of the engine's own internal
//! checks, and deliberately stricter: a hard-bound violation here
//! short-circuits the whole calculation with [`EngineError::InvalidParameter`],
//! while the engine's internal checks only annotate results with alerts.
//!
//! Two-tier policy by example: the outer gate requires efficiency in
//! [0.90, 1.05] for the rated shape, while the engine internally tolerates
//! [0.80, 1.05] with a warning. The two bounds are intentionally kept as
//! separate checks.
//!
//! The current-density recommendation is the one soft rule at this layer:
//! values in (4.5, 6.5] pass with a returned Warning alert; above 6.5 is a
//! hard rejection.

use crate::alerts::ValidationAlert;
use crate::calculations::{DesignInput, MotorInput, RatedInput};
use crate::errors::{EngineError, EngineResult};

/// Hard-bound check helper: value must lie in (0, max].
fn require_in_exclusive_zero(
    field: &str,
    value: f64,
    max: f64,
    reason: &str,
) -> EngineResult<()> {
    if value <= 0.0 || value > max {
        return Err(EngineError::invalid_parameter(
            field,
            value.to_string(),
            reason,
        ));
    }
    Ok(())
}

/// Validate a rated-shape request against the hard engineering bounds.
///
/// Returns the intake warnings (currently only the current-density
/// recommendation) on success; fails with [`EngineError::InvalidParameter`]
/// on the first hard violation, in field order.
pub fn validate_rated(input: &RatedInput) -> EngineResult<Vec<ValidationAlert>> {
    if input.name.trim().is_empty() {
        return Err(EngineError::invalid_parameter(
            "name",
            &input.name,
            "Motor name is required",
        ));
    }
    if input.name.len() > 100 {
        return Err(EngineError::invalid_parameter(
            "name",
            input.name.len().to_string(),
            "Motor name cannot exceed 100 characters",
        ));
    }
    require_in_exclusive_zero(
        "power",
        input.power.value(),
        10000.0,
        "Power rating must be in (0, 10000]",
    )?;
    require_in_exclusive_zero(
        "voltage",
        input.voltage.value(),
        50000.0,
        "Voltage must be in (0, 50000] V",
    )?;
    require_in_exclusive_zero(
        "frequency",
        input.frequency,
        400.0,
        "Frequency must be in (0, 400] Hz",
    )?;
    if input.poles == 0 || input.poles % 2 != 0 || input.poles > 100 {
        return Err(EngineError::invalid_parameter(
            "poles",
            input.poles.to_string(),
            "Poles must be a positive even number not exceeding 100",
        ));
    }
    if !(0.90..=1.05).contains(&input.efficiency) {
        return Err(EngineError::invalid_parameter(
            "efficiency",
            input.efficiency.to_string(),
            "Efficiency must be between 90% and 105%",
        ));
    }
    if !(0.1..=1.0).contains(&input.power_factor) {
        return Err(EngineError::invalid_parameter(
            "power_factor",
            input.power_factor.to_string(),
            "Power factor must be between 0.1 and 1.0",
        ));
    }
    require_in_exclusive_zero(
        "current_density",
        input.current_density,
        6.5,
        "Current density must be in (0, 6.5] A/mm²",
    )?;
    require_in_exclusive_zero(
        "diameter",
        input.diameter,
        5000.0,
        "Diameter must be in (0, 5000] mm",
    )?;
    require_in_exclusive_zero(
        "length",
        input.length,
        10000.0,
        "Length must be in (0, 10000] mm",
    )?;
    require_in_exclusive_zero(
        "air_gap_length",
        input.air_gap_length,
        50.0,
        "Air gap length must be in (0, 50] mm",
    )?;

    let mut warnings = Vec::new();
    if input.current_density > 4.5 {
        warnings.push(
            ValidationAlert::warning(
                "CurrentDensity",
                "Current density above 4.5 A/mm² is not recommended",
            )
            .with_value(input.current_density)
            .with_max(4.5),
        );
    }
    Ok(warnings)
}

/// Validate a design-shape (core data) request against the hard bounds.
pub fn validate_design(input: &DesignInput) -> EngineResult<Vec<ValidationAlert>> {
    if input.model.trim().is_empty() {
        return Err(EngineError::invalid_parameter(
            "model",
            &input.model,
            "Motor model is required",
        ));
    }
    if input.model.len() > 100 {
        return Err(EngineError::invalid_parameter(
            "model",
            input.model.len().to_string(),
            "Motor model cannot exceed 100 characters",
        ));
    }
    require_in_exclusive_zero(
        "power_hp",
        input.power_hp,
        10000.0,
        "Power must be in (0, 10000] HP",
    )?;
    require_in_exclusive_zero(
        "power_factor",
        input.power_factor,
        1.0,
        "Power factor must be in (0, 1]",
    )?;
    require_in_exclusive_zero("rpm", input.rpm, 36000.0, "Speed must be in (0, 36000] RPM")?;
    if input.poles == 0 || input.poles % 2 != 0 || input.poles > 100 {
        return Err(EngineError::invalid_parameter(
            "poles",
            input.poles.to_string(),
            "Poles must be a positive even number not exceeding 100",
        ));
    }
    require_in_exclusive_zero(
        "efficiency",
        input.efficiency,
        1.1,
        "Efficiency must be in (0, 1.1]",
    )?;
    require_in_exclusive_zero(
        "frequency",
        input.frequency,
        400.0,
        "Frequency must be in (0, 400] Hz",
    )?;
    require_in_exclusive_zero(
        "voltage_delta",
        input.voltage_delta,
        50000.0,
        "Delta voltage must be in (0, 50000] V",
    )?;
    require_in_exclusive_zero(
        "voltage_star",
        input.voltage_star,
        50000.0,
        "Star voltage must be in (0, 50000] V",
    )?;
    require_in_exclusive_zero(
        "current_delta",
        input.current_delta,
        10000.0,
        "Delta current must be in (0, 10000] A",
    )?;
    require_in_exclusive_zero(
        "current_star",
        input.current_star,
        10000.0,
        "Star current must be in (0, 10000] A",
    )?;
    require_in_exclusive_zero(
        "slot_depth",
        input.core.slot_depth,
        1.0,
        "Slot depth must be in (0, 1] m",
    )?;
    require_in_exclusive_zero(
        "crown_height",
        input.core.crown_height,
        1.0,
        "Crown height must be in (0, 1] m",
    )?;
    require_in_exclusive_zero(
        "stator_tooth_width",
        input.core.stator_tooth_width,
        0.5,
        "Tooth width must be in (0, 0.5] m",
    )?;
    if input.core.number_of_slots == 0 || input.core.number_of_slots > 1000 {
        return Err(EngineError::invalid_parameter(
            "number_of_slots",
            input.core.number_of_slots.to_string(),
            "Number of slots must be in (0, 1000]",
        ));
    }
    require_in_exclusive_zero(
        "stack_length",
        input.core.stack_length,
        5.0,
        "Stack length must be in (0, 5] m",
    )?;
    require_in_exclusive_zero(
        "internal_diameter",
        input.core.internal_diameter,
        10.0,
        "Internal diameter must be in (0, 10] m",
    )?;

    Ok(Vec::new())
}

/// Validate either request shape.
pub fn validate(input: &MotorInput) -> EngineResult<Vec<ValidationAlert>> {
    match input {
        MotorInput::Rated(r) => validate_rated(r),
        MotorInput::Design(d) => validate_design(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alerts::Severity;
    use crate::calculations::CoreGeometry;
    use crate::quantities::{Power, PowerUnit, Voltage};

    fn rated_input() -> RatedInput {
        RatedInput {
            name: "V-1".to_string(),
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

    fn design_input() -> DesignInput {
        DesignInput {
            model: "D-1".to_string(),
            power_hp: 10.0,
            power_factor: 0.85,
            rpm: 1800.0,
            poles: 4,
            efficiency: 0.9,
            frequency: 60.0,
            voltage_delta: 380.0,
            voltage_star: 220.0,
            current_delta: 15.0,
            current_star: 26.0,
            core: CoreGeometry {
                slot_depth: 0.02,
                crown_height: 0.015,
                stator_tooth_width: 0.008,
                number_of_slots: 36,
                stack_length: 0.12,
                internal_diameter: 0.08,
            },
        }
    }

    #[test]
    fn test_valid_requests_pass_cleanly() {
        assert!(validate_rated(&rated_input()).unwrap().is_empty());
        assert!(validate_design(&design_input()).unwrap().is_empty());
    }

    #[test]
    fn test_current_density_two_tier() {
        // 5.0 passes the 6.5 hard bound but collects the 4.5 recommendation
        let mut input = rated_input();
        input.current_density = 5.0;
        let warnings = validate_rated(&input).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].severity, Severity::Warning);
        assert_eq!(warnings[0].recommended_max, Some(4.5));

        // 7.0 is rejected outright
        input.current_density = 7.0;
        let err = validate_rated(&input).unwrap_err();
        assert_eq!(err.subject(), "current_density");
    }

    #[test]
    fn test_outer_efficiency_gate_stricter_than_engine() {
        // 0.85 is fine for the engine (soft floor 0.80) but the outer gate
        // rejects anything below 0.90.
        let mut input = rated_input();
        input.efficiency = 0.85;
        assert!(validate_rated(&input).is_err());

        input.efficiency = 1.2;
        let err = validate_rated(&input).unwrap_err();
        assert_eq!(err.subject(), "efficiency");
    }

    #[test]
    fn test_hard_bounds_rated() {
        let mut input = rated_input();
        input.voltage = Voltage::new(60000.0).unwrap();
        assert_eq!(validate_rated(&input).unwrap_err().subject(), "voltage");

        let mut input = rated_input();
        input.frequency = 500.0;
        assert_eq!(validate_rated(&input).unwrap_err().subject(), "frequency");

        let mut input = rated_input();
        input.poles = 7;
        assert_eq!(validate_rated(&input).unwrap_err().subject(), "poles");

        let mut input = rated_input();
        input.air_gap_length = 80.0;
        assert_eq!(
            validate_rated(&input).unwrap_err().subject(),
            "air_gap_length"
        );
    }

    #[test]
    fn test_hard_bounds_design() {
        let mut input = design_input();
        input.rpm = 40000.0;
        assert_eq!(validate_design(&input).unwrap_err().subject(), "rpm");

        let mut input = design_input();
        input.core.number_of_slots = 1200;
        assert_eq!(
            validate_design(&input).unwrap_err().subject(),
            "number_of_slots"
        );

        let mut input = design_input();
        input.core.stack_length = 6.0;
        assert_eq!(
            validate_design(&input).unwrap_err().subject(),
            "stack_length"
        );

        // The design gate tolerates efficiency up to 1.1
        let mut input = design_input();
        input.efficiency = 1.08;
        assert!(validate_design(&input).is_ok());
        input.efficiency = 1.2;
        assert!(validate_design(&input).is_err());
    }

    #[test]
    fn test_first_violation_in_field_order_wins() {
        let mut input = design_input();
        input.power_hp = 0.0;
        input.frequency = 0.0;
        assert_eq!(validate_design(&input).unwrap_err().subject(), "power_hp");
    }

    #[test]
    fn test_name_bounds() {
        let mut input = rated_input();
        input.name = "x".repeat(101);
        assert_eq!(validate_rated(&input).unwrap_err().subject(), "name");

        let mut input = design_input();
        input.model = String::new();
        assert_eq!(validate_design(&input).unwrap_err().subject(), "model");
    }
}
