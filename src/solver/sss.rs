use std::f64::consts::PI;

use super::laws::{angle_from_sides, heron};
use super::steps::StepLog;
use super::triangle::SolvedTriangle;
use super::Solution;
use crate::error::SolveError;
use crate::math::angle::to_deg;

/// Solves a triangle from its three sides.
///
/// `C` is taken as `π − A − B` rather than a third `acos`, which keeps the
/// angle sum exact up to a single rounding.
///
/// # Errors
///
/// Returns [`SolveError::TriangleInequalityViolation`] if any side is at
/// least the sum of the other two, or [`SolveError::DegenerateTriangle`] if
/// the computed area is not positive.
pub fn solve_sss(a: f64, b: f64, c: f64) -> Result<Solution, SolveError> {
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(SolveError::TriangleInequalityViolation { a, b, c });
    }

    let angle_a = angle_from_sides(a, b, c);
    let angle_b = angle_from_sides(b, a, c);
    let angle_c = PI - angle_a - angle_b;

    let s = (a + b + c) / 2.0;
    let area = heron(a, b, c);

    let mut log = StepLog::default();
    log.push(
        "Law of Cosines (A)",
        "A = acos((b² + c² − a²) / 2bc)",
        format!("A = acos(({b}² + {c}² − {a}²) / (2·{b}·{c}))"),
        format!("{:.2}°", to_deg(angle_a)),
    );
    log.push(
        "Law of Cosines (B)",
        "B = acos((a² + c² − b²) / 2ac)",
        format!("B = acos(({a}² + {c}² − {b}²) / (2·{a}·{c}))"),
        format!("{:.2}°", to_deg(angle_b)),
    );
    log.push(
        "Angle Sum (C)",
        "C = 180° − A − B",
        format!("C = 180° − {:.2}° − {:.2}°", to_deg(angle_a), to_deg(angle_b)),
        format!("{:.2}°", to_deg(angle_c)),
    );
    log.push(
        "Find Semi-perimeter",
        "s = (a + b + c) / 2",
        format!("s = ({a}+{b}+{c})/2"),
        format!("{s}"),
    );
    log.push(
        "Heron's Formula",
        "Area = √[s(s−a)(s−b)(s−c)]",
        format!("Area = √[{s}({s}-{a})({s}-{b})({s}-{c})]"),
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
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn right_triangle_3_4_5() {
        let sol = solve_sss(3.0, 4.0, 5.0).unwrap();
        let t = sol.triangle;
        assert_abs_diff_eq!(t.angle_c(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(t.area(), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn equilateral() {
        let t = solve_sss(5.0, 5.0, 5.0).unwrap().triangle;
        for deg in t.angles_deg() {
            assert_abs_diff_eq!(deg, 60.0, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(t.area(), 10.825_317_547_305_483, epsilon = 1e-9);
    }

    #[test]
    fn angle_sum_is_pi() {
        let t = solve_sss(7.0, 8.0, 9.5).unwrap().triangle;
        let sum: f64 = t.angles().iter().sum();
        assert_abs_diff_eq!(sum, PI, epsilon = 1e-12);
    }

    #[test]
    fn flat_triangle_violates_inequality() {
        let err = solve_sss(1.0, 2.0, 3.0).unwrap_err();
        assert_eq!(err.kind(), SolveErrorKind::TriangleInequalityViolation);
    }

    #[test]
    fn each_side_is_checked() {
        assert!(solve_sss(10.0, 2.0, 3.0).is_err());
        assert!(solve_sss(2.0, 10.0, 3.0).is_err());
        assert!(solve_sss(2.0, 3.0, 10.0).is_err());
    }

    #[test]
    fn nearly_flat_triangle_solves() {
        let t = solve_sss(1.0, 2.0, 2.999).unwrap().triangle;
        assert!(t.area() > 0.0 && t.area() < 0.1, "area={}", t.area());
    }

    #[test]
    fn steps_show_semiperimeter_and_heron() {
        let sol = solve_sss(3.0, 4.0, 5.0).unwrap();
        let text: Vec<String> = sol.steps.iter().map(ToString::to_string).collect();
        assert_eq!(text[3], "4. Find Semi-perimeter: s = (3+4+5)/2 = 6");
        assert_eq!(text[4], "5. Heron's Formula: Area = √[6(6-3)(6-4)(6-5)] = 6.00");
        assert_eq!(sol.steps[2].result, "90.00°");
    }
}
