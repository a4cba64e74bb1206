use serde::{Deserialize, Serialize};

/// One of the six measurements a triangle can be specified with.
///
/// Side `a` is opposite vertex `A`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Measurement {
    SideA,
    SideB,
    SideC,
    AngleA,
    AngleB,
    AngleC,
}

impl Measurement {
    /// All measurements in storage order.
    pub const ALL: [Self; 6] = [
        Self::SideA,
        Self::SideB,
        Self::SideC,
        Self::AngleA,
        Self::AngleB,
        Self::AngleC,
    ];

    /// Storage slot of this measurement.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::SideA => 0,
            Self::SideB => 1,
            Self::SideC => 2,
            Self::AngleA => 3,
            Self::AngleB => 4,
            Self::AngleC => 5,
        }
    }

    /// Whether this measurement is an angle (entered in degrees).
    #[must_use]
    pub fn is_angle(self) -> bool {
        matches!(self, Self::AngleA | Self::AngleB | Self::AngleC)
    }

    /// Input field identifier.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::SideA => "a",
            Self::SideB => "b",
            Self::SideC => "c",
            Self::AngleA => "angleA",
            Self::AngleB => "angleB",
            Self::AngleC => "angleC",
        }
    }

    /// Human-readable field label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SideA => "Side a",
            Self::SideB => "Side b",
            Self::SideC => "Side c",
            Self::AngleA => "Angle α (A)",
            Self::AngleB => "Angle β (B)",
            Self::AngleC => "Angle γ (C)",
        }
    }
}

/// Description of one input field for the active mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldSpec {
    pub measurement: Measurement,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub min: f64,
    pub step: f64,
    /// Upper bound enforced by the input widget, if any.
    pub max: Option<f64>,
}

impl FieldSpec {
    const fn side(measurement: Measurement) -> Self {
        Self {
            measurement,
            label: measurement.label(),
            placeholder: "Length",
            min: 0.1,
            step: 0.1,
            max: None,
        }
    }

    const fn angle(measurement: Measurement) -> Self {
        Self {
            measurement,
            label: measurement.label(),
            placeholder: "Degrees",
            min: 0.1,
            step: 0.1,
            max: Some(179.0),
        }
    }
}

const SSS_FIELDS: [FieldSpec; 3] = [
    FieldSpec::side(Measurement::SideA),
    FieldSpec::side(Measurement::SideB),
    FieldSpec::side(Measurement::SideC),
];

const SAS_FIELDS: [FieldSpec; 3] = [
    FieldSpec::side(Measurement::SideA),
    FieldSpec::angle(Measurement::AngleC),
    FieldSpec::side(Measurement::SideB),
];

const ASA_FIELDS: [FieldSpec; 3] = [
    FieldSpec::angle(Measurement::AngleA),
    FieldSpec::side(Measurement::SideC),
    FieldSpec::angle(Measurement::AngleB),
];

/// Which congruence form the user is entering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveMode {
    /// Three sides.
    #[default]
    Sss,
    /// Two sides and the included angle `C`.
    Sas,
    /// Two angles and the included side `c`.
    Asa,
}

impl SolveMode {
    /// All modes in tab order.
    pub const ALL: [Self; 3] = [Self::Sss, Self::Sas, Self::Asa];

    /// Short tab name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sss => "SSS",
            Self::Sas => "SAS",
            Self::Asa => "ASA",
        }
    }

    /// Heading shown above the input fields.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Sss => "Enter 3 Sides",
            Self::Sas => "Side-Angle-Side",
            Self::Asa => "Angle-Side-Angle",
        }
    }

    /// The three input fields this mode reads, in display order.
    #[must_use]
    pub fn fields(self) -> &'static [FieldSpec; 3] {
        match self {
            Self::Sss => &SSS_FIELDS,
            Self::Sas => &SAS_FIELDS,
            Self::Asa => &ASA_FIELDS,
        }
    }

    /// Whether `m` is one of this mode's inputs.
    #[must_use]
    pub fn uses(self, m: Measurement) -> bool {
        self.fields().iter().any(|f| f.measurement == m)
    }

    /// Canonical valid values loaded when switching to this mode.
    #[must_use]
    pub fn defaults(self) -> [(Measurement, f64); 3] {
        match self {
            Self::Sss => [
                (Measurement::SideA, 3.0),
                (Measurement::SideB, 4.0),
                (Measurement::SideC, 5.0),
            ],
            Self::Sas => [
                (Measurement::SideA, 5.0),
                (Measurement::SideB, 7.0),
                (Measurement::AngleC, 45.0),
            ],
            Self::Asa => [
                (Measurement::AngleA, 45.0),
                (Measurement::SideC, 10.0),
                (Measurement::AngleB, 45.0),
            ],
        }
    }
}
