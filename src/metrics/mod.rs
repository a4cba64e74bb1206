mod classify;
mod comparison;

pub use classify::{
    classify_angles, classify_sides, AngleType, SideType, RIGHT_ANGLE_TOLERANCE_DEG,
    SIDE_EQUALITY_TOLERANCE,
};
pub use comparison::{real_world_comparison, GENERIC_LABEL};

use serde::Serialize;

use crate::solver::SolvedTriangle;
use crate::units::LengthUnit;

/// Everything shown alongside a solved triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DerivedMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub semiperimeter: f64,
    /// Altitude from vertex `C` onto side `c`.
    pub altitude_c: f64,
    pub inradius: f64,
    pub circumradius: f64,
    pub side_type: SideType,
    pub angle_type: AngleType,
    pub comparison: &'static str,
}

impl DerivedMetrics {
    /// Computes all metrics for `t`. The unit only selects the comparison label.
    #[must_use]
    pub fn compute(t: &SolvedTriangle, unit: LengthUnit) -> Self {
        let [a, b, c] = t.sides();
        let area = t.area();
        let perimeter = a + b + c;
        let semiperimeter = perimeter / 2.0;
        Self {
            area,
            perimeter,
            semiperimeter,
            altitude_c: 2.0 * area / c,
            inradius: inradius(t),
            circumradius: circumradius(t),
            side_type: classify_sides(t.sides()),
            angle_type: classify_angles(t.angles_deg()),
            comparison: real_world_comparison(area, unit),
        }
    }
}

/// `r = area / s`.
#[must_use]
pub fn inradius(t: &SolvedTriangle) -> f64 {
    let [a, b, c] = t.sides();
    t.area() / ((a + b + c) / 2.0)
}

/// `R = abc / (4·area)`. This is the only circumradius formula in the
/// crate; the diagram draws with the same value.
#[must_use]
pub fn circumradius(t: &SolvedTriangle) -> f64 {
    let [a, b, c] = t.sides();
    a * b * c / (4.0 * t.area())
}
