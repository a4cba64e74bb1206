/// Angle opposite side `opposite`, from the law of cosines.
///
/// The cosine is clamped to `[-1, 1]` so that rounding on near-degenerate
/// inputs yields `0` or `π` instead of `NaN`; the degenerate-triangle check
/// rejects those afterwards.
#[must_use]
pub fn angle_from_sides(opposite: f64, adj1: f64, adj2: f64) -> f64 {
    let cos = (adj1 * adj1 + adj2 * adj2 - opposite * opposite) / (2.0 * adj1 * adj2);
    cos.clamp(-1.0, 1.0).acos()
}

/// Side opposite `included`, from the law of cosines.
#[must_use]
pub fn side_from_sas(adj1: f64, adj2: f64, included: f64) -> f64 {
    (adj1 * adj1 + adj2 * adj2 - 2.0 * adj1 * adj2 * included.cos())
        .max(0.0)
        .sqrt()
}

/// Side opposite `angle`, from the law of sines referenced to a known
/// side/angle pair.
#[must_use]
pub fn side_from_sines(angle: f64, ref_side: f64, ref_angle: f64) -> f64 {
    ref_side * angle.sin() / ref_angle.sin()
}

/// Heron's formula. Returns `NaN` when the sides cannot form a triangle.
#[must_use]
pub fn heron(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    (s * (s - a) * (s - b) * (s - c)).sqrt()
}
