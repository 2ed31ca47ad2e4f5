//! # Core-Data Design Calculation
//!
//! The full staged electromagnetic pipeline for a three-phase induction
//! motor, working from winding core data (slot geometry, stack dimensions,
//! star/delta ratings). Derives fluxes, inductions, winding factors, turns
//! per phase, resistance, wire sizing, specific power and harmonic content,
//! accumulating severity-tagged alerts along the way.
//!
//! ## Assumptions
//!
//! - Three-phase star connection for the per-phase voltage (V / √3)
//! - Full-pitch winding (pitch factor fixed at 1.0)
//! - Copper conductors at 20 °C (ρ = 1.68e-8 Ω·m)
//! - Wire sized for a conservative 4.5 A/mm² current density
//!
//! The flux, turns and winding factor are mutually dependent; the pipeline
//! breaks the cycle with a seed estimate (100 turns, kw = 0.9) and applies
//! exactly one fixed-point refinement once the real winding factor and an
//! integral turns count are known. Soft limit violations never abort the
//! pipeline - they append [`ValidationAlert`] entries in stage order.
//!
//! ## Example
//!
//! ```rust
//! use motor_core::calculations::design::{calculate, CoreGeometry, DesignInput};
//!
//! let input = DesignInput {
//!     model: "Test4P".to_string(),
//!     power_hp: 10.0,
//!     power_factor: 0.85,
//!     rpm: 1800.0,
//!     poles: 4,
//!     efficiency: 0.9,
//!     frequency: 60.0,
//!     voltage_delta: 380.0,
//!     voltage_star: 220.0,
//!     current_delta: 15.0,
//!     current_star: 26.0,
//!     core: CoreGeometry {
//!         slot_depth: 0.02,
//!         crown_height: 0.015,
//!         stator_tooth_width: 0.008,
//!         number_of_slots: 36,
//!         stack_length: 0.12,
//!         internal_diameter: 0.08,
//!     },
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert!(result.winding_factor > 0.85 && result.winding_factor <= 1.0);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::alerts::ValidationAlert;
use crate::awg::nearest_gauge;
use crate::errors::{EngineError, EngineResult};

/// Copper resistivity at 20 °C, Ω·m
pub const COPPER_RESISTIVITY: f64 = 1.68e-8;

/// Fixed wire-sizing current density, A/mm².
/// Conservative for continuous duty; independent of any input field.
pub const WIRE_SIZING_CURRENT_DENSITY: f64 = 4.5;

/// Seed turns-per-phase estimate used before refinement
const SEED_TURNS_PER_PHASE: f64 = 100.0;

/// Seed winding factor used before refinement
const SEED_WINDING_FACTOR: f64 = 0.9;

/// Stator core geometry, all lengths in meters.
///
/// ## JSON Example
///
/// ```json
/// {
///   "slot_depth": 0.02,
///   "crown_height": 0.015,
///   "stator_tooth_width": 0.008,
///   "number_of_slots": 36,
///   "stack_length": 0.12,
///   "internal_diameter": 0.08
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoreGeometry {
    /// Slot depth (h), m
    pub slot_depth: f64,

    /// Crown (yoke) height (hc), m
    pub crown_height: f64,

    /// Stator tooth width (bd), m
    pub stator_tooth_width: f64,

    /// Number of stator slots (N)
    pub number_of_slots: u32,

    /// Stack length (L), m
    pub stack_length: f64,

    /// Internal diameter (D), m
    pub internal_diameter: f64,
}

/// Input parameters for the core-data design calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignInput {
    /// Motor model designation (e.g., "W22-132M")
    pub model: String,

    /// Rated power in mechanical horsepower
    pub power_hp: f64,

    /// Power factor, fraction
    pub power_factor: f64,

    /// Rated speed, RPM
    pub rpm: f64,

    /// Number of poles (even)
    pub poles: u32,

    /// Efficiency, fraction
    pub efficiency: f64,

    /// Line frequency, Hz
    pub frequency: f64,

    /// Delta line voltage, V
    pub voltage_delta: f64,

    /// Star line voltage, V
    pub voltage_star: f64,

    /// Delta line current, A
    pub current_delta: f64,

    /// Star line current, A
    pub current_star: f64,

    /// Stator core geometry
    pub core: CoreGeometry,
}

impl DesignInput {
    /// Validate structural bounds.
    ///
    /// Fields are checked in a fixed order (model, power, voltage, frequency,
    /// poles, efficiency, power factor, speed, currents, geometry) so error
    /// ordering is deterministic. The first violation fails with
    /// [`EngineError::InvalidParameter`]; every quantity that later appears
    /// in a denominator is rejected here rather than producing NaN/infinity.
    pub fn validate(&self) -> EngineResult<()> {
        if self.model.trim().is_empty() {
            return Err(EngineError::invalid_parameter(
                "model",
                &self.model,
                "Model name is required",
            ));
        }
        if self.model.len() > 100 {
            return Err(EngineError::invalid_parameter(
                "model",
                self.model.len().to_string(),
                "Model name cannot exceed 100 characters",
            ));
        }
        if self.power_hp <= 0.0 || self.power_hp > 10000.0 {
            return Err(EngineError::invalid_parameter(
                "power_hp",
                self.power_hp.to_string(),
                "Power must be in (0, 10000] HP",
            ));
        }
        if self.voltage_delta <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "voltage_delta",
                self.voltage_delta.to_string(),
                "Delta voltage must be positive",
            ));
        }
        if self.voltage_star <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "voltage_star",
                self.voltage_star.to_string(),
                "Star voltage must be positive",
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
        if self.rpm <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "rpm",
                self.rpm.to_string(),
                "Speed must be positive",
            ));
        }
        if self.current_delta <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "current_delta",
                self.current_delta.to_string(),
                "Delta current must be positive",
            ));
        }
        if self.current_star <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "current_star",
                self.current_star.to_string(),
                "Star current must be positive",
            ));
        }
        self.core.validate()
    }
}

impl CoreGeometry {
    /// Validate that every dimension is strictly positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.slot_depth <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "slot_depth",
                self.slot_depth.to_string(),
                "Slot depth must be positive",
            ));
        }
        if self.crown_height <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "crown_height",
                self.crown_height.to_string(),
                "Crown height must be positive",
            ));
        }
        if self.stator_tooth_width <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "stator_tooth_width",
                self.stator_tooth_width.to_string(),
                "Tooth width must be positive",
            ));
        }
        if self.number_of_slots == 0 {
            return Err(EngineError::invalid_parameter(
                "number_of_slots",
                self.number_of_slots.to_string(),
                "Number of slots must be positive",
            ));
        }
        if self.stack_length <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "stack_length",
                self.stack_length.to_string(),
                "Stack length must be positive",
            ));
        }
        if self.internal_diameter <= 0.0 {
            return Err(EngineError::invalid_parameter(
                "internal_diameter",
                self.internal_diameter.to_string(),
                "Internal diameter must be positive",
            ));
        }
        Ok(())
    }
}

/// Winding-factor magnitudes for the fundamental and the five dominant odd
/// harmonic orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct HarmonicSpectrum {
    /// Fundamental (equals the overall winding factor)
    pub fundamental: f64,
    pub fifth: f64,
    pub seventh: f64,
    pub eleventh: f64,
    pub thirteenth: f64,
    pub seventeenth: f64,
}

impl HarmonicSpectrum {
    /// Total harmonic distortion: Euclidean norm of the five harmonic
    /// magnitudes (the fundamental excluded).
    pub fn total_distortion(&self) -> f64 {
        (self.fifth.powi(2)
            + self.seventh.powi(2)
            + self.eleventh.powi(2)
            + self.thirteenth.powi(2)
            + self.seventeenth.powi(2))
        .sqrt()
    }
}

/// Results from the core-data design calculation.
///
/// All magnetic quantities in SI units (Wb, T, m²); wire section in mm².
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    // === Magnetic flux ===
    /// Total flux, Wb (flux per pole times pole count, post-refinement)
    pub total_flux: f64,

    /// Flux per pole, Wb (after the single fixed-point refinement)
    pub flux_per_pole: f64,

    // === Magnetic inductions ===
    /// Air-gap flux density, T
    pub air_gap_induction: f64,

    /// Stator tooth flux density, T
    pub stator_tooth_induction: f64,

    /// Stator crown (yoke) flux density, T
    pub stator_crown_induction: f64,

    // === Winding factors ===
    /// Pitch factor (1.0 - full pitch assumed)
    pub pitch_factor: f64,

    /// Distribution factor Kd
    pub distribution_factor: f64,

    /// Overall winding factor, pitch × distribution
    pub winding_factor: f64,

    // === Geometry ===
    /// Air-gap area per pole, m²
    pub air_gap_area: f64,

    // === Winding ===
    /// Turns per phase, rounded to a whole number of turns
    pub turns_per_phase: f64,

    /// Resistance per phase, Ω (at the final wire section)
    pub resistance_per_phase: f64,

    /// Joule losses, W (three-phase)
    pub joule_losses: f64,

    /// Conductor cross-section, mm²
    pub wire_section: f64,

    /// Current density used for wire sizing, A/mm²
    pub current_density: f64,

    /// Nearest standard wire gauge for the computed section
    pub awg_size: String,

    // === Output quality ===
    /// Specific power, W per unit volume (D²·L)
    pub specific_power: f64,

    /// Harmonic winding-factor spectrum
    pub harmonics: HarmonicSpectrum,

    /// Alerts accumulated in pipeline-stage order
    pub alerts: Vec<ValidationAlert>,
}

/// Run the staged design pipeline.
///
/// Pure function: identical input yields bit-identical output. Structural
/// violations (empty model, odd poles, non-positive denominators) fail with
/// [`EngineError`] before any arithmetic; every other limit violation is a
/// [`ValidationAlert`] on a successful result.
pub fn calculate(input: &DesignInput) -> EngineResult<DesignResult> {
    input.validate()?;

    let mut alerts = Vec::new();
    let core = &input.core;

    // === Stage 1: input screening (soft checks, never abort) ===
    if input.power_hp <= 0.0 {
        alerts.push(ValidationAlert::critical(
            "PowerHP",
            "Power must be greater than zero",
        ));
    }
    if input.efficiency < 0.8 || input.efficiency > 1.05 {
        alerts.push(
            ValidationAlert::warning("Efficiency", "Efficiency outside typical range (80-105%)")
                .with_value(input.efficiency * 100.0)
                .with_range(80.0, 105.0),
        );
    }
    if input.power_factor < 0.1 || input.power_factor > 1.0 {
        alerts.push(ValidationAlert::critical(
            "PowerFactor",
            "Power factor must be between 0.1 and 1.0",
        ));
    }

    // === Stage 2: flux estimation (seed) ===
    // Φ = (E · 60) / (4.44 · f · N · kw), with seed turns and winding factor.
    // The seed breaks the flux/turns/kw dependency cycle; stage 5 refines it.
    let voltage_per_phase = input.voltage_star / 3.0_f64.sqrt();
    let mut flux_per_pole = (voltage_per_phase * 60.0)
        / (4.44 * input.frequency * SEED_TURNS_PER_PHASE * SEED_WINDING_FACTOR);

    // === Stage 3: inductions ===
    let air_gap_area =
        (PI * core.internal_diameter * core.stack_length) / f64::from(input.poles);
    let air_gap_induction = flux_per_pole / air_gap_area;

    let stator_tooth_induction =
        flux_per_pole / (core.stator_tooth_width * core.stack_length);

    // Factor 2: yoke flux splits into two return paths
    let stator_crown_induction =
        flux_per_pole / (2.0 * core.crown_height * core.stack_length);

    if stator_tooth_induction > 1.8 {
        alerts.push(
            ValidationAlert::critical(
                "StatorToothInduction",
                "Magnetic saturation in the stator teeth",
            )
            .with_value(stator_tooth_induction)
            .with_max(1.8),
        );
    }
    if stator_crown_induction > 1.6 {
        alerts.push(
            ValidationAlert::critical(
                "StatorCrownInduction",
                "Magnetic saturation in the stator crown",
            )
            .with_value(stator_crown_induction)
            .with_max(1.6),
        );
    }

    // === Stage 4: winding factors ===
    let slots_per_pole_per_phase =
        f64::from(core.number_of_slots) / (f64::from(input.poles) * 3.0);

    // Full-pitch assumption
    let pitch_factor = 1.0;

    // Kd = sin(q·α/2) / (q·sin(α/2)), α = slot angle × pole pairs
    let slot_angle = (2.0 * PI) / f64::from(core.number_of_slots);
    let alpha = slot_angle * f64::from(input.poles) / 2.0;
    let distribution_factor = if slots_per_pole_per_phase > 1.0 {
        (slots_per_pole_per_phase * alpha / 2.0).sin()
            / (slots_per_pole_per_phase * (alpha / 2.0).sin())
    } else {
        1.0
    };
    let winding_factor = pitch_factor * distribution_factor;

    // === Stage 5: turns-per-phase refinement ===
    // One fixed-point pass: integral turns, then recompute the flux.
    let turns_raw =
        voltage_per_phase / (4.44 * input.frequency * flux_per_pole * winding_factor);
    let turns_per_phase = turns_raw.round().max(1.0);
    flux_per_pole =
        voltage_per_phase / (4.44 * input.frequency * turns_per_phase * winding_factor);
    let total_flux = flux_per_pole * f64::from(input.poles);

    // === Stage 6: resistance & losses (1 mm² placeholder section) ===
    let average_turn_length =
        2.0 * (core.stack_length + PI * core.internal_diameter / f64::from(input.poles));
    let total_length = turns_per_phase * average_turn_length;
    let placeholder_resistance = (COPPER_RESISTIVITY * total_length) / 1e-6;
    let joule_losses = 3.0 * input.current_star.powi(2) * placeholder_resistance;

    // === Stage 7: wire sizing ===
    let current_density = WIRE_SIZING_CURRENT_DENSITY;
    let wire_section = input.current_star / current_density;
    let resistance_per_phase = (COPPER_RESISTIVITY * total_length) / (wire_section * 1e-6);
    let awg_size = nearest_gauge(wire_section).to_string();

    if current_density > 6.0 {
        alerts.push(
            ValidationAlert::warning(
                "CurrentDensity",
                "High current density - excessive heating expected",
            )
            .with_value(current_density)
            .with_max(6.0),
        );
    }

    // === Stage 8: specific power ===
    let power_watts = input.power_hp * 736.0;
    let volume = core.internal_diameter.powi(2) * core.stack_length;
    let specific_power = power_watts / volume;

    if !(100_000.0..=500_000.0).contains(&specific_power) {
        alerts.push(
            ValidationAlert::info("SpecificPower", "Specific power outside typical range")
                .with_value(specific_power / 1000.0)
                .with_range(100.0, 500.0),
        );
    }

    // === Stage 9: harmonics ===
    let harmonics = HarmonicSpectrum {
        fundamental: winding_factor,
        fifth: harmonic_factor(5, slots_per_pole_per_phase, slot_angle),
        seventh: harmonic_factor(7, slots_per_pole_per_phase, slot_angle),
        eleventh: harmonic_factor(11, slots_per_pole_per_phase, slot_angle),
        thirteenth: harmonic_factor(13, slots_per_pole_per_phase, slot_angle),
        seventeenth: harmonic_factor(17, slots_per_pole_per_phase, slot_angle),
    };

    // === Stage 10: final validation pass ===
    if specific_power < 50_000.0 {
        alerts.push(ValidationAlert::warning(
            "SpecificPower",
            "Motor may be oversized",
        ));
    }
    if specific_power > 600_000.0 {
        alerts.push(ValidationAlert::warning(
            "SpecificPower",
            "Motor may be undersized",
        ));
    }

    let total_distortion = harmonics.total_distortion();
    if total_distortion > 0.1 {
        alerts.push(
            ValidationAlert::warning("Harmonics", "High harmonic distortion")
                .with_value(total_distortion * 100.0)
                .with_max(10.0),
        );
    }

    Ok(DesignResult {
        total_flux,
        flux_per_pole,
        air_gap_induction,
        stator_tooth_induction,
        stator_crown_induction,
        pitch_factor,
        distribution_factor,
        winding_factor,
        air_gap_area,
        turns_per_phase,
        resistance_per_phase,
        joule_losses,
        wire_section,
        current_density,
        awg_size,
        specific_power,
        harmonics,
        alerts,
    })
}

/// Harmonic winding-factor magnitude for one odd order.
///
/// Distribution term sin(q·αh/2) / (q·sin(αh/2)) with αh = slot angle × h/2,
/// pitch term cos((h−1)·π / 2h).
fn harmonic_factor(order: u32, slots_per_pole_per_phase: f64, slot_angle: f64) -> f64 {
    let h = f64::from(order);
    let alpha = slot_angle * h / 2.0;
    let distribution = (slots_per_pole_per_phase * alpha / 2.0).sin()
        / (slots_per_pole_per_phase * (alpha / 2.0).sin());
    let pitch = ((h - 1.0) * PI / (2.0 * h)).cos();
    (distribution * pitch).abs()
}
