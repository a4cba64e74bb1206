use serde::Serialize;

use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Computes the bounding box of a triangle's vertices.
    #[must_use]
    pub fn of_triangle(points: &[Point2; 3]) -> Self {
        let [first, rest @ ..] = points;
        rest.iter().fold(
            Self {
                min: *first,
                max: *first,
            },
            |bb, p| Self {
                min: Point2::new(bb.min.x.min(p.x), bb.min.y.min(p.y)),
                max: Point2::new(bb.max.x.max(p.x), bb.max.y.max(p.y)),
            },
        )
    }

    /// Extent along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn bbox_of_obtuse_triangle_extends_left_of_origin() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(-1.0, 1.5),
        ];
        let bb = Aabb2::of_triangle(&pts);
        assert!((bb.min.x + 1.0).abs() < TOLERANCE);
        assert!((bb.width() - 3.0).abs() < TOLERANCE);
        assert!((bb.height() - 1.5).abs() < TOLERANCE);
    }

    #[test]
    fn bbox_of_coincident_vertices_is_a_point() {
        let bb = Aabb2::of_triangle(&[Point2::new(2.0, -1.0); 3]);
        assert_eq!(bb.min, bb.max);
        assert!(bb.width().abs() < TOLERANCE && bb.height().abs() < TOLERANCE);
    }
}
