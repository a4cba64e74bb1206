use serde::{Deserialize, Serialize};

/// Display unit for lengths. Solver arithmetic is unit-agnostic; the unit
/// only relabels output and selects the real-world comparison table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[default]
    Meters,
    Centimeters,
    Feet,
    Inches,
}

impl LengthUnit {
    /// All units in selector order.
    pub const ALL: [Self; 4] = [Self::Meters, Self::Centimeters, Self::Feet, Self::Inches];

    /// Selector label.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Meters => "Meters",
            Self::Centimeters => "Centimeters",
            Self::Feet => "Feet",
            Self::Inches => "Inches",
        }
    }

    /// Length suffix.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Centimeters => "cm",
            Self::Feet => "ft",
            Self::Inches => "in",
        }
    }

    /// Area suffix.
    #[must_use]
    pub fn area_symbol(self) -> &'static str {
        match self {
            Self::Meters => "m²",
            Self::Centimeters => "cm²",
            Self::Feet => "ft²",
            Self::Inches => "in²",
        }
    }

    /// Parses a length suffix as produced by [`LengthUnit::symbol`].
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.symbol() == symbol)
    }
}
