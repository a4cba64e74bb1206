use crate::math::Point2;

/// Foot of the altitude from `C` onto the base line `AB` (the x axis).
#[must_use]
pub fn altitude_foot(vertices: &[Point2; 3]) -> Point2 {
    Point2::new(vertices[2].x, 0.0)
}

/// Incenter: vertices weighted by their opposite side lengths.
///
/// `sides` come from a solved triangle, so the perimeter is positive at any
/// scale.
#[must_use]
pub fn incenter(vertices: &[Point2; 3], sides: [f64; 3]) -> Point2 {
    let [a, b, c] = sides;
    let sum = vertices[0].coords * a + vertices[1].coords * b + vertices[2].coords * c;
    Point2::from(sum / (a + b + c))
}

/// Circumcenter via the determinant formula.
///
/// Returns `None` when the vertices are nearly collinear, i.e. when the
/// determinant is below `epsilon` relative to the squared longest edge.
#[must_use]
pub fn circumcenter(vertices: &[Point2; 3], epsilon: f64) -> Option<Point2> {
    let [p1, p2, p3] = vertices;
    let d = 2.0 * (p1.x * (p2.y - p3.y) + p2.x * (p3.y - p1.y) + p3.x * (p1.y - p2.y));

    let longest = [(p1, p2), (p2, p3), (p3, p1)]
        .iter()
        .map(|(u, v)| (*u - *v).norm_squared())
        .fold(0.0, f64::max);
    if longest < f64::MIN_POSITIVE || d.abs() / longest < epsilon {
        return None;
    }

    let n1 = p1.coords.norm_squared();
    let n2 = p2.coords.norm_squared();
    let n3 = p3.coords.norm_squared();
    let ux = (n1 * (p2.y - p3.y) + n2 * (p3.y - p1.y) + n3 * (p1.y - p2.y)) / d;
    let uy = (n1 * (p3.x - p2.x) + n2 * (p1.x - p3.x) + n3 * (p2.x - p1.x)) / d;
    Some(Point2::new(ux, uy))
}
