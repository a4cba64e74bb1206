use std::f64::consts::PI;

use super::laws::side_from_sines;
use super::steps::StepLog;
use super::triangle::SolvedTriangle;
use super::Solution;
use crate::error::SolveError;
use crate::math::angle::{to_deg, to_rad};

/// Solves a triangle from angles `A`, `B` in degrees and the included side `c`.
///
/// # Errors
///
/// Returns [`SolveError::InvalidAngleSum`] if `A + B ≥ 180`, or
/// [`SolveError::DegenerateTriangle`] if the computed area is not positive.
pub fn solve_asa(angle_a_deg: f64, angle_b_deg: f64, c: f64) -> Result<Solution, SolveError> {
    let sum = angle_a_deg + angle_b_deg;
    if sum >= 180.0 {
        return Err(SolveError::InvalidAngleSum { sum });
    }
    let angle_a = to_rad(angle_a_deg);
    let angle_b = to_rad(angle_b_deg);
    let angle_c = PI - angle_a - angle_b;

    let a = side_from_sines(angle_a, c, angle_c);
    let b = side_from_sines(angle_b, c, angle_c);
    let area = 0.5 * b * c * angle_a.sin();

    let mut log = StepLog::default();
    log.push(
        "Find Angle C",
        "C = 180° − A − B",
        format!("180° − {angle_a_deg}° − {angle_b_deg}°"),
        format!("{:.1}°", to_deg(angle_c)),
    );
    log.push(
        "Law of Sines",
        "a/sin(A) = c/sin(C)",
        format!("a = {c}·sin({angle_a_deg}°)/sin({:.1}°)", to_deg(angle_c)),
        format!("{a:.2}"),
    );
    log.push(
        "Law of Sines",
        "b/sin(B) = c/sin(C)",
        format!("b = {c}·sin({angle_b_deg}°)/sin({:.1}°)", to_deg(angle_c)),
        format!("{b:.2}"),
    );
    log.push(
        "ASA Area",
        "Area = 0.5 × b × c × sin A",
        format!("0.5 × {b:.2} × {c} × sin({angle_a_deg}°)"),
        format!("{area:.2}"),
    );

    let triangle = SolvedTriangle::new([a, b, c], [angle_a, angle_b, angle_c], area)?;
    Ok(Solution {
        triangle,
        steps: log.finish(),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::SolveErrorKind;
    use approx::assert_abs_diff_eq;

    #[test]
    fn isosceles_right_triangle() {
        let t = solve_asa(45.0, 45.0, 10.0).unwrap().triangle;
        let leg = 10.0 * std::f64::consts::FRAC_1_SQRT_2;
        assert_abs_diff_eq!(t.a(), leg, epsilon = 1e-9);
        assert_abs_diff_eq!(t.b(), leg, epsilon = 1e-9);
        assert_abs_diff_eq!(t.area(), 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(to_deg(t.angle_c()), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_sum_of_180_rejected() {
        let err = solve_asa(90.0, 90.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), SolveErrorKind::InvalidAngleSum);
        assert!(solve_asa(120.0, 70.0, 1.0).is_err());
    }

    #[test]
    fn nearly_180_solves() {
        let t = solve_asa(89.999, 89.999, 1.0).unwrap().triangle;
        assert!(t.area() > 0.0);
        assert!(t.angle_c() > 0.0);
    }

    #[test]
    fn steps_find_angle_c_first() {
        let sol = solve_asa(45.0, 45.0, 10.0).unwrap();
        assert_eq!(sol.steps[0].to_string(), "1. Find Angle C: 180° − 45° − 45° = 90.0°");
        assert_eq!(sol.steps[1].result, "7.07");
    }
}
