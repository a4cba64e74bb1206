use std::fmt;

use serde::Serialize;

/// Absolute tolerance, in input units, under which two sides count as equal.
pub const SIDE_EQUALITY_TOLERANCE: f64 = 0.01;

/// Tolerance, in degrees, under which the largest angle counts as right.
pub const RIGHT_ANGLE_TOLERANCE_DEG: f64 = 0.1;

/// Classification by side equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SideType {
    Equilateral,
    Isosceles,
    Scalene,
}

/// Classification by the largest angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AngleType {
    Right,
    Obtuse,
    Acute,
}

impl fmt::Display for SideType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Equilateral => "Equilateral",
            Self::Isosceles => "Isosceles",
            Self::Scalene => "Scalene",
        })
    }
}

impl fmt::Display for AngleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Right => "Right",
            Self::Obtuse => "Obtuse",
            Self::Acute => "Acute",
        })
    }
}

/// Classifies sides `[a, b, c]`.
///
/// Equilateral requires `a≈b` and `b≈c` (not `a≈c`), so with a tolerance
/// near the side spread the relation is not transitive.
#[must_use]
pub fn classify_sides(sides: [f64; 3]) -> SideType {
    let [a, b, c] = sides;
    let eq = |x: f64, y: f64| (x - y).abs() < SIDE_EQUALITY_TOLERANCE;
    if eq(a, b) && eq(b, c) {
        SideType::Equilateral
    } else if eq(a, b) || eq(b, c) || eq(a, c) {
        SideType::Isosceles
    } else {
        SideType::Scalene
    }
}

/// Classifies by the largest of `angles_deg`.
///
/// The right-angle tolerance is checked before the obtuse threshold, so an
/// angle of 90.05° is Right.
#[must_use]
pub fn classify_angles(angles_deg: [f64; 3]) -> AngleType {
    let max = angles_deg.into_iter().fold(f64::NEG_INFINITY, f64::max);
    if (max - 90.0).abs() < RIGHT_ANGLE_TOLERANCE_DEG {
        AngleType::Right
    } else if max > 90.0 {
        AngleType::Obtuse
    } else {
        AngleType::Acute
    }
}
