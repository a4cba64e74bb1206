pub mod constructions;
mod frame;
mod labels;
mod transform;

pub use frame::place_vertices;
pub use labels::{
    side_labels, vertex_labels, MonospaceEstimate, SideLabel, TextMeasure, VertexLabel,
};
pub use transform::FitTransform;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::LayoutError;
use crate::math::point_2d::centroid;
use crate::math::bbox_2d::Aabb2;
use crate::math::Point2;
use crate::metrics::{circumradius, inradius};
use crate::solver::SolvedTriangle;

/// Drawing constants. All lengths are CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Empty margin kept on every side of the triangle.
    pub padding: f64,
    /// Distance from a vertex to its letter.
    pub vertex_label_offset: f64,
    pub vertex_font_px: f64,
    pub pill_height: f64,
    /// Horizontal padding added to the measured text width.
    pub pill_padding: f64,
    pub pill_corner_radius: f64,
    pub pill_font_px: f64,
    pub centroid_marker_radius: f64,
    /// Circumcircles are skipped when the vertex determinant, relative to
    /// the squared longest edge, falls below this.
    pub collinear_epsilon: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            padding: 60.0,
            vertex_label_offset: 24.0,
            vertex_font_px: 14.0,
            pill_height: 20.0,
            pill_padding: 12.0,
            pill_corner_radius: 6.0,
            pill_font_px: 12.0,
            centroid_marker_radius: 5.0,
            collinear_epsilon: 1e-5,
        }
    }
}

/// Drawing surface size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub pixel_ratio: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            pixel_ratio: 1.0,
        }
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, ratio: f64) -> Self {
        self.pixel_ratio = ratio;
        self
    }

    /// Physical size of the backing surface the renderer should allocate.
    #[must_use]
    pub fn backing_size(&self) -> (f64, f64) {
        (self.width * self.pixel_ratio, self.height * self.pixel_ratio)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(600.0, 400.0)
    }
}

/// Which auxiliary constructions to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayToggles {
    pub altitude: bool,
    pub centroid: bool,
    pub incircle: bool,
    pub circumcircle: bool,
}

impl OverlayToggles {
    /// Every overlay enabled.
    #[must_use]
    pub fn all() -> Self {
        Self {
            altitude: true,
            centroid: true,
            incircle: true,
            circumcircle: true,
        }
    }
}

/// A screen-space line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point2,
    pub to: Point2,
}

/// A screen-space circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CircleShape {
    pub center: Point2,
    pub radius: f64,
}

/// Everything the renderer needs to paint one frame, in screen space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagramGeometry {
    pub viewport: Viewport,
    /// Abstract-to-screen scale factor.
    pub scale: f64,
    /// Screen positions of `[A, B, C]`.
    pub vertices: [Point2; 3],
    /// From `C` down to the base line.
    pub altitude: Option<Segment>,
    pub centroid: Option<CircleShape>,
    pub incircle: Option<CircleShape>,
    pub circumcircle: Option<CircleShape>,
    /// Side pills in draw order `c`, `b`, `a`.
    pub side_labels: [SideLabel; 3],
    pub vertex_labels: [VertexLabel; 3],
}

/// Lays out a solved triangle for a viewport.
///
/// Stateless: every call recomputes the full geometry.
pub struct DiagramLayout<'a> {
    triangle: &'a SolvedTriangle,
    viewport: Viewport,
    overlays: OverlayToggles,
}

impl<'a> DiagramLayout<'a> {
    /// Creates a new `DiagramLayout` operation.
    #[must_use]
    pub fn new(triangle: &'a SolvedTriangle, viewport: Viewport, overlays: OverlayToggles) -> Self {
        Self {
            triangle,
            viewport,
            overlays,
        }
    }

    /// Executes the layout.
    ///
    /// # Errors
    ///
    /// Returns a [`LayoutError`] if the viewport cannot hold the padded
    /// triangle.
    pub fn execute(
        &self,
        params: &LayoutParams,
        measure: &dyn TextMeasure,
    ) -> Result<DiagramGeometry, LayoutError> {
        let t = self.triangle;
        let abs = place_vertices(t);
        let bbox = Aabb2::of_triangle(&abs);
        let tf = FitTransform::fit(
            &bbox,
            self.viewport.width,
            self.viewport.height,
            params.padding,
        )?;
        debug!(
            scale = tf.scale(),
            width = self.viewport.width,
            height = self.viewport.height,
            "diagram fitted"
        );

        let screen = abs.map(|p| tf.apply(&p));

        let altitude = self.overlays.altitude.then(|| Segment {
            from: screen[2],
            to: tf.apply(&constructions::altitude_foot(&abs)),
        });

        let centroid_marker = self.overlays.centroid.then(|| CircleShape {
            center: tf.apply(&centroid(&abs)),
            radius: params.centroid_marker_radius,
        });

        let incircle = self.overlays.incircle.then(|| CircleShape {
            center: tf.apply(&constructions::incenter(&abs, t.sides())),
            radius: tf.length(inradius(t)),
        });

        let circumcircle = if self.overlays.circumcircle {
            let center = constructions::circumcenter(&abs, params.collinear_epsilon);
            if center.is_none() {
                trace!("vertices nearly collinear, circumcircle skipped");
            }
            center.map(|c| CircleShape {
                center: tf.apply(&c),
                radius: tf.length(circumradius(t)),
            })
        } else {
            None
        };

        Ok(DiagramGeometry {
            viewport: self.viewport,
            scale: tf.scale(),
            vertices: screen,
            altitude,
            centroid: centroid_marker,
            incircle,
            circumcircle,
            side_labels: side_labels(&screen, t.sides(), params, measure),
            vertex_labels: vertex_labels(&screen, params),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::point_2d::distance;
    use crate::solver::{solve_asa, solve_sas, solve_sss};
    use approx::assert_abs_diff_eq;

    fn layout(t: &SolvedTriangle, vp: Viewport, overlays: OverlayToggles) -> DiagramGeometry {
        DiagramLayout::new(t, vp, overlays)
            .execute(&LayoutParams::default(), &MonospaceEstimate::default())
            .unwrap()
    }

    #[test]
    fn vertices_stay_inside_padding() {
        let params = LayoutParams::default();
        for t in [
            solve_sss(3.0, 4.0, 5.0).unwrap().triangle,
            solve_asa(150.0, 10.0, 2.0).unwrap().triangle,
            solve_sas(1.0, 40.0, 20.0).unwrap().triangle,
        ] {
            let vp = Viewport::new(640.0, 360.0);
            let g = layout(&t, vp, OverlayToggles::default());
            for v in g.vertices {
                assert!(v.x >= params.padding - 1e-9 && v.x <= vp.width - params.padding + 1e-9);
                assert!(v.y >= params.padding - 1e-9 && v.y <= vp.height - params.padding + 1e-9);
            }
        }
    }

    #[test]
    fn shape_is_preserved() {
        let t = solve_sss(4.0, 6.0, 7.0).unwrap().triangle;
        let g = layout(&t, Viewport::new(900.0, 300.0), OverlayToggles::default());
        let [a, b, c] = g.vertices;
        assert_abs_diff_eq!(distance(&b, &c) / g.scale, t.a(), epsilon = 1e-9);
        assert_abs_diff_eq!(distance(&a, &c) / g.scale, t.b(), epsilon = 1e-9);
        assert_abs_diff_eq!(distance(&a, &b) / g.scale, t.c(), epsilon = 1e-9);
    }

    #[test]
    fn base_is_horizontal_and_apex_above() {
        let t = solve_sss(3.0, 4.0, 5.0).unwrap().triangle;
        let g = layout(&t, Viewport::default(), OverlayToggles::default());
        let [a, b, c] = g.vertices;
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-9);
        assert!(c.y < a.y, "screen y grows downward");
    }

    #[test]
    fn overlays_follow_toggles() {
        let t = solve_sss(3.0, 4.0, 5.0).unwrap().triangle;
        let none = layout(&t, Viewport::default(), OverlayToggles::default());
        assert!(none.altitude.is_none() && none.centroid.is_none());
        assert!(none.incircle.is_none() && none.circumcircle.is_none());

        let only_in = OverlayToggles {
            incircle: true,
            ..OverlayToggles::default()
        };
        let g = layout(&t, Viewport::default(), only_in);
        assert!(g.incircle.is_some());
        assert!(g.altitude.is_none() && g.centroid.is_none() && g.circumcircle.is_none());
    }

    #[test]
    fn altitude_is_vertical_with_length_h_c() {
        let t = solve_sss(5.0, 6.0, 7.0).unwrap().triangle;
        let g = layout(&t, Viewport::default(), OverlayToggles::all());
        let alt = g.altitude.unwrap();
        assert_abs_diff_eq!(alt.from.x, alt.to.x, epsilon = 1e-9);
        let h_c = 2.0 * t.area() / t.c();
        assert_abs_diff_eq!(distance(&alt.from, &alt.to) / g.scale, h_c, epsilon = 1e-9);
    }

    #[test]
    fn circles_use_canonical_radii() {
        let t = solve_sss(3.0, 4.0, 5.0).unwrap().triangle;
        let g = layout(&t, Viewport::default(), OverlayToggles::all());
        assert_abs_diff_eq!(g.incircle.unwrap().radius, g.scale * 1.0, epsilon = 1e-9);
        let cc = g.circumcircle.unwrap();
        assert_abs_diff_eq!(cc.radius, g.scale * 2.5, epsilon = 1e-9);
        for v in g.vertices {
            assert_abs_diff_eq!(distance(&cc.center, &v), cc.radius, epsilon = 1e-6);
        }
    }

    #[test]
    fn equilateral_centers_coincide() {
        let t = solve_sss(5.0, 5.0, 5.0).unwrap().triangle;
        let g = layout(&t, Viewport::new(500.0, 500.0), OverlayToggles::all());
        let c = g.centroid.unwrap().center;
        assert!(distance(&c, &g.incircle.unwrap().center) < 1e-9);
        assert!(distance(&c, &g.circumcircle.unwrap().center) < 1e-9);
    }

    #[test]
    fn tiny_triangle_fills_the_viewport() {
        let params = LayoutParams::default();
        let t = solve_sss(1e-11, 1e-11, 1e-11).unwrap().triangle;
        let vp = Viewport::default();
        let g = layout(&t, vp, OverlayToggles::all());
        for v in g.vertices {
            assert!(v.x >= params.padding - 1e-6 && v.x <= vp.width - params.padding + 1e-6);
            assert!(v.y >= params.padding - 1e-6 && v.y <= vp.height - params.padding + 1e-6);
        }
        let [a, b, _] = g.vertices;
        assert_abs_diff_eq!(distance(&a, &b), g.scale * 1e-11, epsilon = 1e-6);
        let inc = g.incircle.unwrap();
        assert!(distance(&inc.center, &g.centroid.unwrap().center) < 1e-6);
        assert!(inc.radius > 1.0);
        assert!(g.circumcircle.is_some());
    }

    #[test]
    fn tiny_viewport_is_an_error() {
        let t = solve_sss(3.0, 4.0, 5.0).unwrap().triangle;
        let r = DiagramLayout::new(&t, Viewport::new(100.0, 100.0), OverlayToggles::default())
            .execute(&LayoutParams::default(), &MonospaceEstimate::default());
        assert!(matches!(r, Err(LayoutError::NoDrawableArea { .. })));
    }

    #[test]
    fn backing_size_scales_with_pixel_ratio() {
        let vp = Viewport::new(300.0, 200.0).with_pixel_ratio(2.0);
        let (w, h) = vp.backing_size();
        assert_abs_diff_eq!(w, 600.0);
        assert_abs_diff_eq!(h, 400.0);
    }
}
