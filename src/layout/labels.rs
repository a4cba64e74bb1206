use serde::Serialize;

use super::LayoutParams;
use crate::format::compact2;
use crate::math::point_2d::{centroid, direction, midpoint};
use crate::math::Point2;

/// Measures rendered text so pills can be sized to fit.
///
/// Implemented by the rendering collaborator against its real font metrics.
pub trait TextMeasure {
    /// Width in pixels of `text` at a font size of `font_px`.
    fn text_width(&self, text: &str, font_px: f64) -> f64;
}

/// Headless estimate: every character is `em_ratio` of the font size wide.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceEstimate {
    pub em_ratio: f64,
}

impl Default for MonospaceEstimate {
    fn default() -> Self {
        Self { em_ratio: 0.6 }
    }
}

impl TextMeasure for MonospaceEstimate {
    #[allow(clippy::cast_precision_loss)]
    fn text_width(&self, text: &str, font_px: f64) -> f64 {
        text.chars().count() as f64 * font_px * self.em_ratio
    }
}

/// A rounded-rectangle side-length label centered on an edge midpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideLabel {
    /// Which side (`'a'`, `'b'` or `'c'`).
    pub side: char,
    pub text: String,
    pub center: Point2,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub font_px: f64,
}

/// A vertex letter pushed outward from the triangle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexLabel {
    pub text: char,
    pub position: Point2,
    pub font_px: f64,
}

/// Builds the side pills in draw order `c`, `b`, `a` from screen-space
/// vertices `[A, B, C]`.
#[must_use]
pub fn side_labels(
    screen: &[Point2; 3],
    sides: [f64; 3],
    params: &LayoutParams,
    measure: &dyn TextMeasure,
) -> [SideLabel; 3] {
    let [pa, pb, pc] = screen;
    let [a, b, c] = sides;
    let pill = |side: char, from: &Point2, to: &Point2, value: f64| {
        let text = compact2(value);
        let width = measure.text_width(&text, params.pill_font_px) + params.pill_padding;
        SideLabel {
            side,
            text,
            center: midpoint(from, to),
            width,
            height: params.pill_height,
            corner_radius: params.pill_corner_radius,
            font_px: params.pill_font_px,
        }
    };
    [
        pill('c', pa, pb, c),
        pill('b', pa, pc, b),
        pill('a', pb, pc, a),
    ]
}

/// Places `A`, `B`, `C` at a fixed distance beyond each vertex along the
/// ray from the screen-space centroid.
#[must_use]
pub fn vertex_labels(screen: &[Point2; 3], params: &LayoutParams) -> [VertexLabel; 3] {
    let center = centroid(screen);
    let place = |p: &Point2, text: char| VertexLabel {
        text,
        position: direction(&center, p).map_or(*p, |d| p + d * params.vertex_label_offset),
        font_px: params.vertex_font_px,
    };
    [
        place(&screen[0], 'A'),
        place(&screen[1], 'B'),
        place(&screen[2], 'C'),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::point_2d::distance;
    use approx::assert_abs_diff_eq;

    fn screen() -> [Point2; 3] {
        [
            Point2::new(100.0, 300.0),
            Point2::new(300.0, 300.0),
            Point2::new(200.0, 100.0),
        ]
    }

    #[test]
    fn pills_sit_on_midpoints_in_draw_order() {
        let params = LayoutParams::default();
        let labels = side_labels(&screen(), [5.0, 4.5, 3.0], &params, &MonospaceEstimate::default());
        let order: Vec<char> = labels.iter().map(|l| l.side).collect();
        assert_eq!(order, ['c', 'b', 'a']);
        assert_abs_diff_eq!(labels[0].center.x, 200.0);
        assert_abs_diff_eq!(labels[0].center.y, 300.0);
        assert_eq!(labels[0].text, "3");
        assert_eq!(labels[1].text, "4.5");
    }

    #[test]
    fn pill_width_fits_text() {
        let params = LayoutParams::default();
        let labels = side_labels(&screen(), [1234.567, 1.0, 1.0], &params, &MonospaceEstimate::default());
        let a = &labels[2];
        assert_eq!(a.text, "1,234.57");
        // 8 chars × 12px × 0.6 + 12
        assert_abs_diff_eq!(a.width, 69.6, epsilon = 1e-9);
        assert_abs_diff_eq!(a.height, 20.0);
    }

    #[test]
    fn vertex_letters_pushed_outward() {
        let params = LayoutParams::default();
        let s = screen();
        let center = centroid(&s);
        for (label, p) in vertex_labels(&s, &params).iter().zip(&s) {
            assert_abs_diff_eq!(distance(&label.position, p), 24.0, epsilon = 1e-9);
            assert!(distance(&label.position, &center) > distance(p, &center));
        }
    }
}
