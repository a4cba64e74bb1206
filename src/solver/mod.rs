mod asa;
pub mod laws;
mod measurement;
mod mode;
mod sas;
mod sss;
mod steps;
mod triangle;

pub use asa::solve_asa;
pub use measurement::{MeasurementSet, SolveInput};
pub use mode::{FieldSpec, Measurement, SolveMode};
pub use sas::solve_sas;
pub use sss::solve_sss;
pub use steps::DerivationStep;
pub use triangle::{SolvedTriangle, ANGLE_SUM_TOLERANCE};

use serde::Serialize;
use tracing::debug;

use crate::error::SolveError;

/// A solved triangle together with the working that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub triangle: SolvedTriangle,
    /// Ordered derivation steps for display.
    pub steps: Vec<DerivationStep>,
}

impl SolveInput {
    /// Runs the solver for this input's mode.
    ///
    /// # Errors
    ///
    /// Returns the mode-specific validation error, or
    /// [`SolveError::DegenerateTriangle`] if the result has no area.
    pub fn solve(&self) -> Result<Solution, SolveError> {
        match *self {
            Self::Sss { a, b, c } => solve_sss(a, b, c),
            Self::Sas { a, b, angle_c } => solve_sas(a, b, angle_c),
            Self::Asa {
                angle_a,
                angle_b,
                c,
            } => solve_asa(angle_a, angle_b, c),
        }
    }
}

/// Solves the triangle described by the fields of `measurements` that
/// `mode` reads. Fields belonging to other modes are ignored.
///
/// # Errors
///
/// Returns [`SolveError::MissingOrInvalidInput`] for an absent or
/// non-numeric field, otherwise any error of [`SolveInput::solve`].
pub fn solve(mode: SolveMode, measurements: &MeasurementSet) -> Result<Solution, SolveError> {
    let input = measurements.input_for(mode)?;
    debug!(mode = mode.name(), ?input, "solving triangle");
    let result = input.solve();
    match &result {
        Ok(sol) => debug!(
            sides = ?sol.triangle.sides(),
            area = sol.triangle.area(),
            "triangle solved"
        ),
        Err(err) => debug!(kind = ?err.kind(), %err, "triangle rejected"),
    }
    result
}
