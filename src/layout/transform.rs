use serde::Serialize;

use crate::error::LayoutError;
use crate::math::bbox_2d::Aabb2;
use crate::math::{Point2, Vector2};

/// Uniform scale, translation, and vertical flip from the abstract frame
/// (y up) to screen space (y down).
///
/// `screen.x = x·scale + offset.x`, `screen.y = height − (y·scale + offset.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FitTransform {
    scale: f64,
    offset: Vector2,
    height: f64,
}

impl FitTransform {
    /// Fits `bbox` inside a `width`×`height` surface with `padding` on every
    /// side, centered, using the largest scale that fits both axes.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidViewport`] for non-positive or
    /// non-finite dimensions, [`LayoutError::NoDrawableArea`] if the padding
    /// consumes the surface, and [`LayoutError::Degenerate`] for a box with
    /// no extent or one too small to scale up in `f64`.
    pub fn fit(bbox: &Aabb2, width: f64, height: f64, padding: f64) -> Result<Self, LayoutError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(LayoutError::InvalidViewport { width, height });
        }
        let avail_w = width - 2.0 * padding;
        let avail_h = height - 2.0 * padding;
        if avail_w <= 0.0 || avail_h <= 0.0 {
            return Err(LayoutError::NoDrawableArea {
                padding,
                width,
                height,
            });
        }
        let (bw, bh) = (bbox.width(), bbox.height());
        if !(bw.is_finite() && bh.is_finite() && (bw > 0.0 || bh > 0.0)) {
            return Err(LayoutError::Degenerate("bounding box has no extent".into()));
        }

        let scale = (avail_w / bw).min(avail_h / bh);
        if !scale.is_finite() {
            return Err(LayoutError::Degenerate(format!(
                "bounding box {bw}x{bh} cannot be scaled"
            )));
        }
        let offset = Vector2::new(
            (width - bw * scale) / 2.0 - bbox.min.x * scale,
            (height - bh * scale) / 2.0 - bbox.min.y * scale,
        );
        Ok(Self {
            scale,
            offset,
            height,
        })
    }

    /// Maps an abstract point to screen space.
    #[must_use]
    pub fn apply(&self, p: &Point2) -> Point2 {
        Point2::new(
            p.x * self.scale + self.offset.x,
            self.height - (p.y * self.scale + self.offset.y),
        )
    }

    /// Maps an abstract length (e.g. a radius) to screen pixels.
    #[must_use]
    pub fn length(&self, len: f64) -> f64 {
        len * self.scale
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }
}
