pub mod app;
pub mod error;
pub mod format;
pub mod layout;
pub mod math;
pub mod metrics;
pub mod render;
pub mod solver;
pub mod units;

pub use app::{recompute, AppState, Snapshot};
pub use error::{LayoutError, SolveError, SolveErrorKind};
pub use solver::{solve, MeasurementSet, SolveMode, SolvedTriangle};
