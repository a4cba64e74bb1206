/// Converts degrees to radians.
#[must_use]
pub fn to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Converts radians to degrees.
#[must_use]
pub fn to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}
