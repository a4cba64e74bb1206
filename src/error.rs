use serde::Serialize;
use thiserror::Error;

/// Reasons a measurement set cannot be solved into a triangle.
///
/// Every variant is recoverable by editing the inputs. The `Display`
/// output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Impossible Triangle (Triangle Inequality): sides {a}, {b}, {c}")]
    TriangleInequalityViolation { a: f64, b: f64, c: f64 },

    #[error("Angle must be between 0 and 180 (got {angle}°)")]
    InvalidAngleRange { angle: f64 },

    #[error("Sum of angles A and B must be < 180 (got {sum}°)")]
    InvalidAngleSum { sum: f64 },

    #[error("Invalid Dimensions: area {area} is not a positive number")]
    DegenerateTriangle { area: f64 },

    #[error("{field} must be a positive number")]
    MissingOrInvalidInput { field: &'static str },
}

/// Structured tag for a [`SolveError`], for callers that branch on the
/// failure kind rather than display the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolveErrorKind {
    TriangleInequalityViolation,
    InvalidAngleRange,
    InvalidAngleSum,
    DegenerateTriangle,
    MissingOrInvalidInput,
}

impl SolveError {
    /// Returns the kind tag of this error.
    #[must_use]
    pub fn kind(&self) -> SolveErrorKind {
        match self {
            Self::TriangleInequalityViolation { .. } => SolveErrorKind::TriangleInequalityViolation,
            Self::InvalidAngleRange { .. } => SolveErrorKind::InvalidAngleRange,
            Self::InvalidAngleSum { .. } => SolveErrorKind::InvalidAngleSum,
            Self::DegenerateTriangle { .. } => SolveErrorKind::DegenerateTriangle,
            Self::MissingOrInvalidInput { .. } => SolveErrorKind::MissingOrInvalidInput,
        }
    }
}

/// Errors raised while fitting a triangle into a drawing surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("viewport {width}x{height} must have positive finite dimensions")]
    InvalidViewport { width: f64, height: f64 },

    #[error("padding {padding} leaves no drawable area in a {width}x{height} viewport")]
    NoDrawableArea { padding: f64, width: f64, height: f64 },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}
