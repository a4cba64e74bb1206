use serde::{Deserialize, Serialize};

use super::mode::{Measurement, SolveMode};
use crate::error::SolveError;

/// Sparse set of user-entered measurements.
///
/// Sides are lengths in the display unit, angles are degrees. A slot holds
/// `None` when the field was never entered, and `NaN` when the user typed
/// something that is not a number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet {
    values: [Option<f64>; 6],
}

impl MeasurementSet {
    /// Creates an empty measurement set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the canonical valid measurement set for `mode`.
    #[must_use]
    pub fn defaults_for(mode: SolveMode) -> Self {
        let mut set = Self::new();
        for (m, v) in mode.defaults() {
            set.set(m, v);
        }
        set
    }

    /// Returns the stored value for `m`.
    #[must_use]
    pub fn get(&self, m: Measurement) -> Option<f64> {
        self.values[m.index()]
    }

    /// Stores a numeric value for `m`.
    pub fn set(&mut self, m: Measurement, value: f64) {
        self.values[m.index()] = Some(value);
    }

    /// Stores a raw text edit for `m`.
    ///
    /// Text that does not parse as a number is kept as `NaN` so the next
    /// solve reports the field instead of silently using a stale value.
    pub fn set_text(&mut self, m: Measurement, text: &str) {
        let value = text.trim().parse::<f64>().unwrap_or(f64::NAN);
        self.values[m.index()] = Some(value);
    }

    /// Clears the value for `m`.
    pub fn clear(&mut self, m: Measurement) {
        self.values[m.index()] = None;
    }

    /// Returns a copy with `m` set to `value`.
    #[must_use]
    pub fn with(mut self, m: Measurement, value: f64) -> Self {
        self.set(m, value);
        self
    }

    /// Extracts the typed solver input for `mode`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::MissingOrInvalidInput`] for the first required
    /// field that is absent or not a finite number, or is a non-positive side
    /// or ASA angle. The SAS included angle is range-checked by the solver.
    pub fn input_for(&self, mode: SolveMode) -> Result<SolveInput, SolveError> {
        for field in mode.fields() {
            let m = field.measurement;
            match self.get(m) {
                Some(v) if v.is_finite() => {
                    if v <= 0.0 && !(mode == SolveMode::Sas && m == Measurement::AngleC) {
                        return Err(SolveError::MissingOrInvalidInput { field: m.label() });
                    }
                }
                _ => return Err(SolveError::MissingOrInvalidInput { field: m.label() }),
            }
        }
        let v = |m: Measurement| self.get(m).unwrap_or_default();
        Ok(match mode {
            SolveMode::Sss => SolveInput::Sss {
                a: v(Measurement::SideA),
                b: v(Measurement::SideB),
                c: v(Measurement::SideC),
            },
            SolveMode::Sas => SolveInput::Sas {
                a: v(Measurement::SideA),
                b: v(Measurement::SideB),
                angle_c: v(Measurement::AngleC),
            },
            SolveMode::Asa => SolveInput::Asa {
                angle_a: v(Measurement::AngleA),
                angle_b: v(Measurement::AngleB),
                c: v(Measurement::SideC),
            },
        })
    }
}

/// Typed solver input, one variant per mode, each with exactly its
/// required fields. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SolveInput {
    Sss { a: f64, b: f64, c: f64 },
    Sas { a: f64, b: f64, angle_c: f64 },
    Asa { angle_a: f64, angle_b: f64, c: f64 },
}

impl SolveInput {
    /// The mode this input belongs to.
    #[must_use]
    pub fn mode(&self) -> SolveMode {
        match self {
            Self::Sss { .. } => SolveMode::Sss,
            Self::Sas { .. } => SolveMode::Sas,
            Self::Asa { .. } => SolveMode::Asa,
        }
    }
}
