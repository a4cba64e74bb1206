use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LayoutError, SolveError};
use crate::format::{fixed2, PLACEHOLDER};
use crate::layout::{DiagramGeometry, DiagramLayout, LayoutParams, OverlayToggles, TextMeasure, Viewport};
use crate::metrics::DerivedMetrics;
use crate::solver::{solve, Measurement, MeasurementSet, Solution, SolveMode};
use crate::units::LengthUnit;

/// Everything the user controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub mode: SolveMode,
    pub measurements: MeasurementSet,
    pub unit: LengthUnit,
    pub overlays: OverlayToggles,
    pub viewport: Viewport,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: SolveMode::Sss,
            measurements: MeasurementSet::defaults_for(SolveMode::Sss),
            unit: LengthUnit::Meters,
            overlays: OverlayToggles::default(),
            viewport: Viewport::default(),
        }
    }
}

impl AppState {
    /// Switches mode and resets the measurements to that mode's defaults.
    #[must_use]
    pub fn with_mode(mut self, mode: SolveMode) -> Self {
        self.mode = mode;
        self.measurements = MeasurementSet::defaults_for(mode);
        self
    }

    /// Applies a raw text edit to one field.
    #[must_use]
    pub fn with_edit(mut self, field: Measurement, text: &str) -> Self {
        self.measurements.set_text(field, text);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: LengthUnit) -> Self {
        self.unit = unit;
        self
    }

    #[must_use]
    pub fn with_overlays(mut self, overlays: OverlayToggles) -> Self {
        self.overlays = overlays;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

/// Display-ready text for the stats panel. Blank fields hold
/// [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayStats {
    pub area: String,
    pub perimeter: String,
    pub altitude: String,
    pub semiperimeter: String,
    pub inradius: String,
    pub circumradius: String,
    pub side_type: String,
    pub angle_type: String,
    pub comparison: String,
    pub length_unit: &'static str,
    pub area_unit: &'static str,
    pub steps: Vec<String>,
    /// Message for the error box, if the solve failed.
    pub error: Option<String>,
}

impl DisplayStats {
    fn blank(unit: LengthUnit, error: &SolveError) -> Self {
        let p = || PLACEHOLDER.to_owned();
        Self {
            area: p(),
            perimeter: p(),
            altitude: p(),
            semiperimeter: p(),
            inradius: p(),
            circumradius: p(),
            side_type: p(),
            angle_type: p(),
            comparison: p(),
            length_unit: unit.symbol(),
            area_unit: unit.area_symbol(),
            steps: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    fn filled(unit: LengthUnit, m: &DerivedMetrics, solution: &Solution) -> Self {
        Self {
            area: fixed2(m.area),
            perimeter: fixed2(m.perimeter),
            altitude: fixed2(m.altitude_c),
            semiperimeter: fixed2(m.semiperimeter),
            inradius: fixed2(m.inradius),
            circumradius: fixed2(m.circumradius),
            side_type: m.side_type.to_string(),
            angle_type: m.angle_type.to_string(),
            comparison: m.comparison.to_owned(),
            length_unit: unit.symbol(),
            area_unit: unit.area_symbol(),
            steps: solution.steps.iter().map(ToString::to_string).collect(),
            error: None,
        }
    }
}

/// One complete output frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub outcome: Result<Solution, SolveError>,
    pub metrics: Option<DerivedMetrics>,
    /// `None` when the solve failed or the viewport cannot hold a diagram.
    pub diagram: Option<DiagramGeometry>,
    /// Set when the layout step failed on a successful solve.
    pub layout_error: Option<LayoutError>,
    pub display: DisplayStats,
    /// Whether the UI should grey out the diagram.
    pub dimmed: bool,
}

/// Solves, measures, and lays out `state` from scratch.
#[must_use]
pub fn recompute(state: &AppState, params: &LayoutParams, measure: &dyn TextMeasure) -> Snapshot {
    let solution = match solve(state.mode, &state.measurements) {
        Ok(solution) => solution,
        Err(err) => {
            return Snapshot {
                display: DisplayStats::blank(state.unit, &err),
                outcome: Err(err),
                metrics: None,
                diagram: None,
                layout_error: None,
                dimmed: true,
            };
        }
    };

    let metrics = DerivedMetrics::compute(&solution.triangle, state.unit);
    let (diagram, layout_error) =
        match DiagramLayout::new(&solution.triangle, state.viewport, state.overlays)
            .execute(params, measure)
        {
            Ok(d) => (Some(d), None),
            Err(err) => {
                debug!(%err, "diagram layout skipped");
                (None, Some(err))
            }
        };

    Snapshot {
        display: DisplayStats::filled(state.unit, &metrics, &solution),
        outcome: Ok(solution),
        metrics: Some(metrics),
        diagram,
        layout_error,
        dimmed: false,
    }
}
