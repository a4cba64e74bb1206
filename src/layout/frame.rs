use crate::math::Point2;
use crate::solver::SolvedTriangle;

/// Places the vertices `[A, B, C]` in the abstract drawing frame.
///
/// `A` sits at the origin, `B` at `(c, 0)` on the positive x axis, and `C`
/// above the axis at `(b·cos A, b·sin A)`. The y axis points up.
#[must_use]
pub fn place_vertices(t: &SolvedTriangle) -> [Point2; 3] {
    let (sin_a, cos_a) = t.angle_a().sin_cos();
    [
        Point2::origin(),
        Point2::new(t.c(), 0.0),
        Point2::new(t.b() * cos_a, t.b() * sin_a),
    ]
}
