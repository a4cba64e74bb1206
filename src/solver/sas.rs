use std::f64::consts::PI;

use super::laws::{angle_from_sides, side_from_sas};
use super::steps::StepLog;
use super::triangle::SolvedTriangle;
use super::Solution;
use crate::error::SolveError;
use crate::math::angle::{to_deg, to_rad};

/// Solves a triangle from sides `a`, `b` and the included angle `C` in degrees.
///
/// # Errors
///
/// Returns [`SolveError::InvalidAngleRange`] unless `0 < angle_c < 180`, or
/// [`SolveError::DegenerateTriangle`] if the computed area is not positive.
pub fn solve_sas(a: f64, b: f64, angle_c_deg: f64) -> Result<Solution, SolveError> {
    if !(angle_c_deg > 0.0 && angle_c_deg < 180.0) {
        return Err(SolveError::InvalidAngleRange { angle: angle_c_deg });
    }
    let angle_c = to_rad(angle_c_deg);

    let c = side_from_sas(a, b, angle_c);
    let angle_a = angle_from_sides(a, b, c);
    let angle_b = PI - angle_a - angle_c;
    let area = 0.5 * a * b * angle_c.sin();

    let mut log = StepLog::default();
    log.push(
        "Law of Cosines",
        "c = √(a² + b² − 2ab·cos C)",
        format!("c = √({a}² + {b}² − 2·{a}·{b}·cos {angle_c_deg}°)"),
        format!("{c:.2}"),
    );
    log.push(
        "Law of Cosines (A)",
        "A = acos((b² + c² − a²) / 2bc)",
        format!("A = acos(({b}² + {c:.2}² − {a}²) / (2·{b}·{c:.2}))"),
        format!("{:.2}°", to_deg(angle_a)),
    );
    log.push(
        "Angle Sum (B)",
        "B = 180° − A − C",
        format!("B = 180° − {:.2}° − {angle_c_deg}°", to_deg(angle_a)),
        format!("{:.2}°", to_deg(angle_b)),
    );
    log.push(
        "SAS Area",
        "Area = 0.5 × a × b × sin C",
        format!("0.5 × {a} × {b} × sin({angle_c_deg}°)"),
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
    fn right_angle_gives_hypotenuse() {
        let t = solve_sas(3.0, 4.0, 90.0).unwrap().triangle;
        assert_abs_diff_eq!(t.c(), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t.area(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn default_values() {
        let t = solve_sas(5.0, 7.0, 45.0).unwrap().triangle;
        // c² = 25 + 49 − 70·cos45°
        let expected_c = (74.0 - 70.0 * std::f64::consts::FRAC_1_SQRT_2).sqrt();
        assert_abs_diff_eq!(t.c(), expected_c, epsilon = 1e-12);
        let sum: f64 = t.angles().iter().sum();
        assert_abs_diff_eq!(sum, PI, epsilon = 1e-12);
    }

    #[test]
    fn straight_angle_rejected() {
        let err = solve_sas(1.0, 1.0, 180.0).unwrap_err();
        assert_eq!(err.kind(), SolveErrorKind::InvalidAngleRange);
    }

    #[test]
    fn zero_and_negative_angle_rejected() {
        assert!(solve_sas(1.0, 1.0, 0.0).is_err_and(|e| e.kind() == SolveErrorKind::InvalidAngleRange));
        assert!(solve_sas(1.0, 1.0, -3.0).is_err());
        assert!(solve_sas(1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn nearly_straight_angle_solves() {
        let t = solve_sas(1.0, 1.0, 179.999).unwrap().triangle;
        assert!(t.area() > 0.0);
        assert!(t.angle_b() > 0.0);
    }

    #[test]
    fn steps_end_with_area() {
        let sol = solve_sas(5.0, 7.0, 45.0).unwrap();
        let last = sol.steps.last().unwrap();
        assert_eq!(last.title, "SAS Area");
        assert_eq!(last.substituted, "0.5 × 5 × 7 × sin(45°)");
        assert_eq!(last.result, "12.37");
    }
}
