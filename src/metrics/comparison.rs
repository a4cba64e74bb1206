use crate::units::LengthUnit;

/// Label used for every unit without a comparison table.
pub const GENERIC_LABEL: &str = "Geometric Shape";

/// Upper area bounds (exclusive, square meters) and their labels.
const METRIC_BUCKETS: [(f64, &str); 5] = [
    (1.0, "Coffee Table"),
    (4.0, "King Size Bed"),
    (15.0, "Small Bedroom"),
    (30.0, "Living Room"),
    (200.0, "Tennis Court"),
];

const METRIC_OVERFLOW: &str = "Small Field";

/// Maps an area to an everyday object of similar size.
///
/// Only meters carry a table; any other unit yields [`GENERIC_LABEL`].
#[must_use]
pub fn real_world_comparison(area: f64, unit: LengthUnit) -> &'static str {
    if unit != LengthUnit::Meters {
        return GENERIC_LABEL;
    }
    METRIC_BUCKETS
        .iter()
        .find(|(bound, _)| area < *bound)
        .map_or(METRIC_OVERFLOW, |&(_, label)| label)
}
