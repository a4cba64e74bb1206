use super::{Point2, Vector2, TOLERANCE};

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Midpoint of the segment `a`–`b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Arithmetic mean of three points.
#[must_use]
pub fn centroid(p: &[Point2; 3]) -> Point2 {
    Point2::from((p[0].coords + p[1].coords + p[2].coords) / 3.0)
}

/// Unit vector pointing from `from` towards `to`, or `None` if the points coincide.
#[must_use]
pub fn direction(from: &Point2, to: &Point2) -> Option<Vector2> {
    let d = to - from;
    let len = d.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(d / len)
}
