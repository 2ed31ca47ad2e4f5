//! # Motor Entity
//!
//! Identity wrapper around a validated calculation request. A `Motor` is
//! created once from validated input and never mutated in place; running a
//! calculation produces a fresh result record, never a change to the
//! specification.
//!
//! ## Example
//!
//! ```rust
//! use motor_core::calculations::{MotorInput, RatedInput};
//! use motor_core::motor::Motor;
//! use motor_core::quantities::{Power, PowerUnit, Voltage};
//!
//! let input = MotorInput::Rated(RatedInput {
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
//! });
//!
//! let (motor, warnings) = Motor::new(input).unwrap();
//! assert!(warnings.is_empty());
//! let outcome = motor.calculate().unwrap();
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::alerts::ValidationAlert;
use crate::calculations::{MotorInput, MotorOutcome};
use crate::errors::EngineResult;
use crate::validation;

/// A motor under design: identity metadata plus the immutable input shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Motor {
    /// Unique identifier, assigned at creation
    pub id: Uuid,

    /// Creation timestamp (UTC)
    pub created: DateTime<Utc>,

    /// The calculation request, one of the two historical shapes
    pub input: MotorInput,
}

impl Motor {
    /// Create a motor from a calculation request.
    ///
    /// Applies the outer hard-bound rule set first; a hard violation fails
    /// with [`EngineError`](crate::errors::EngineError) before an entity
    /// exists. Returns the entity together with any intake warnings.
    pub fn new(input: MotorInput) -> EngineResult<(Self, Vec<ValidationAlert>)> {
        let warnings = validation::validate(&input)?;
        let motor = Motor {
            id: Uuid::new_v4(),
            created: Utc::now(),
            input,
        };
        Ok((motor, warnings))
    }

    /// The user-facing name or model
    pub fn label(&self) -> &str {
        self.input.label()
    }

    /// Run the calculation variant matching the stored input shape.
    pub fn calculate(&self) -> EngineResult<MotorOutcome> {
        self.input.calculate()
    }
}
