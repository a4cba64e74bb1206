use crate::layout::{DiagramGeometry, SideLabel};
use crate::math::Point2;

/// What a primitive depicts. The painter maps roles to its theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    TriangleFill,
    Outline,
    Altitude,
    Centroid,
    Incircle,
    Circumcircle,
    Pill,
    PillText,
    VertexText,
}

/// Drawing primitives the host surface provides.
pub trait Painter {
    fn fill_polygon(&mut self, points: &[Point2], role: Role);
    fn stroke_polygon(&mut self, points: &[Point2], role: Role);
    fn stroke_segment(&mut self, from: Point2, to: Point2, dashed: bool, role: Role);
    fn fill_circle(&mut self, center: Point2, radius: f64, role: Role);
    fn stroke_circle(&mut self, center: Point2, radius: f64, role: Role);
    fn fill_pill(&mut self, label: &SideLabel, role: Role);
    /// Draws `text` centered on `at`.
    fn fill_text(&mut self, text: &str, at: Point2, font_px: f64, role: Role);
}

/// Paints a diagram back to front: fill, enabled overlays, outline, side
/// pills, vertex letters.
pub fn paint(diagram: &DiagramGeometry, painter: &mut dyn Painter) {
    let v = &diagram.vertices;
    painter.fill_polygon(v, Role::TriangleFill);

    if let Some(alt) = diagram.altitude {
        painter.stroke_segment(alt.from, alt.to, true, Role::Altitude);
    }
    if let Some(c) = diagram.centroid {
        painter.fill_circle(c.center, c.radius, Role::Centroid);
    }
    if let Some(c) = diagram.incircle {
        painter.stroke_circle(c.center, c.radius, Role::Incircle);
    }
    if let Some(c) = diagram.circumcircle {
        painter.stroke_circle(c.center, c.radius, Role::Circumcircle);
    }

    painter.stroke_polygon(v, Role::Outline);

    for label in &diagram.side_labels {
        painter.fill_pill(label, Role::Pill);
        painter.fill_text(&label.text, label.center, label.font_px, Role::PillText);
    }
    let mut buf = [0u8; 4];
    for label in &diagram.vertex_labels {
        painter.fill_text(
            label.text.encode_utf8(&mut buf),
            label.position,
            label.font_px,
            Role::VertexText,
        );
    }
}
