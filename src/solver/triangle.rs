use std::f64::consts::PI;

use serde::Serialize;

use crate::error::SolveError;
use crate::math::angle::to_deg;

/// Largest deviation of `A + B + C` from `π`, in radians, accepted from a
/// solve.
pub const ANGLE_SUM_TOLERANCE: f64 = 1e-6;

/// A fully determined triangle.
///
/// Side `a` is opposite vertex `A`, and so on. Angles are radians.
/// Only the solver constructs values of this type, so every instance has
/// positive finite sides, angles in `(0, π)` summing to `π`, and a positive
/// finite area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolvedTriangle {
    a: f64,
    b: f64,
    c: f64,
    angle_a: f64,
    angle_b: f64,
    angle_c: f64,
    area: f64,
}

impl SolvedTriangle {
    /// Validates a freshly computed triangle.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegenerateTriangle`] if the area is not a finite
    /// positive number, or if rounding pushed any side or angle out of range.
    pub(crate) fn new(sides: [f64; 3], angles: [f64; 3], area: f64) -> Result<Self, SolveError> {
        let angle_sum = angles.iter().sum::<f64>();
        let degenerate = !(area.is_finite() && area > 0.0)
            || sides.iter().any(|s| !(s.is_finite() && *s > 0.0))
            || angles.iter().any(|t| !(t.is_finite() && *t > 0.0 && *t < PI))
            || (angle_sum - PI).abs() > ANGLE_SUM_TOLERANCE;
        if degenerate {
            return Err(SolveError::DegenerateTriangle { area });
        }
        let [a, b, c] = sides;
        let [angle_a, angle_b, angle_c] = angles;
        Ok(Self {
            a,
            b,
            c,
            angle_a,
            angle_b,
            angle_c,
            area,
        })
    }

    /// Side opposite vertex `A`.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Side opposite vertex `B`.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Side opposite vertex `C`.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Angle at vertex `A` in radians.
    #[must_use]
    pub fn angle_a(&self) -> f64 {
        self.angle_a
    }

    /// Angle at vertex `B` in radians.
    #[must_use]
    pub fn angle_b(&self) -> f64 {
        self.angle_b
    }

    /// Angle at vertex `C` in radians.
    #[must_use]
    pub fn angle_c(&self) -> f64 {
        self.angle_c
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Sides as `[a, b, c]`.
    #[must_use]
    pub fn sides(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// Angles as `[A, B, C]` in radians.
    #[must_use]
    pub fn angles(&self) -> [f64; 3] {
        [self.angle_a, self.angle_b, self.angle_c]
    }

    /// Angles as `[A, B, C]` in degrees.
    #[must_use]
    pub fn angles_deg(&self) -> [f64; 3] {
        self.angles().map(to_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveErrorKind;
    use std::f64::consts::FRAC_PI_3;

    #[test]
    fn accepts_valid_triangle() {
        let t = SolvedTriangle::new([1.0; 3], [FRAC_PI_3; 3], 3.0_f64.sqrt() / 4.0);
        assert!(t.is_ok_and(|t| (t.angles_deg()[0] - 60.0).abs() < 1e-9));
    }

    #[test]
    fn rejects_zero_area() {
        let t = SolvedTriangle::new([1.0, 2.0, 3.0], [0.0, 0.0, PI], 0.0);
        assert!(t.is_err_and(|e| e.kind() == SolveErrorKind::DegenerateTriangle));
    }

    #[test]
    fn rejects_nan_area() {
        let t = SolvedTriangle::new([1.0; 3], [FRAC_PI_3; 3], f64::NAN);
        assert!(t.is_err());
    }

    #[test]
    fn rejects_angles_that_do_not_close() {
        let angles = [FRAC_PI_3, FRAC_PI_3, FRAC_PI_3 + 10.0 * ANGLE_SUM_TOLERANCE];
        let t = SolvedTriangle::new([1.0; 3], angles, 0.4);
        assert!(t.is_err_and(|e| e.kind() == SolveErrorKind::DegenerateTriangle));
    }

    #[test]
    fn rejects_nan_angle_even_with_positive_area() {
        let t = SolvedTriangle::new([1.0; 3], [FRAC_PI_3, f64::NAN, FRAC_PI_3], 0.4);
        assert!(t.is_err());
    }
}
