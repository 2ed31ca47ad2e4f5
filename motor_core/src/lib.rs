//! # motor_core - Induction Motor Design Engine
//!
//! `motor_core` computes electromagnetic design parameters for three-phase
//! induction motors from a small set of electrical and geometric inputs, and
//! flags values that violate engineering safety and performance limits.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Deterministic**: Identical input produces bit-identical output
//!
//! ## Quick Start
//!
//! ```rust
//! use motor_core::calculations::design::{calculate, CoreGeometry, DesignInput};
//!
//! let input = DesignInput {
//!     model: "W22-132M".to_string(),
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
//! println!("Winding factor: {:.4}", result.winding_factor);
//! println!("Turns per phase: {}", result.turns_per_phase);
//! println!("Wire gauge: {}", result.awg_size);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The two calculation variants (design pipeline,
//!   rated approximation)
//! - [`motor`] - Motor entity with identity metadata
//! - [`validation`] - Outer hard-bound request validation
//! - [`quantities`] - Validated physical quantity types
//! - [`alerts`] - Severity-tagged engineering alerts
//! - [`awg`] - Wire-gauge nearest-match lookup
//! - [`errors`] - Structured error types

pub mod alerts;
pub mod awg;
pub mod calculations;
pub mod errors;
pub mod motor;
pub mod quantities;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use alerts::{Severity, ValidationAlert};
pub use calculations::{MotorInput, MotorOutcome};
pub use errors::{EngineError, EngineResult};
pub use motor::Motor;
