use std::sync::Arc;

use crate::core::{AxisScales, Dataset, SeriesGeometry};
use crate::extensions::BrushPlugin;
use crate::interaction::{BrushState, SelectedSet};

use super::BrushEngineConfig;

/// Internal engine state used by the public facade (`BrushEngine`).
pub(super) struct EngineCore {
    pub(super) config: BrushEngineConfig,
    pub(super) dataset: Option<Dataset>,
    pub(super) scales: Option<AxisScales>,
    /// Replaced wholesale on reload; handles already given out stay valid.
    pub(super) geometry: Arc<SeriesGeometry>,
    pub(super) state: BrushState,
    pub(super) selected: SelectedSet,
    pub(super) plugins: Vec<Box<dyn BrushPlugin>>,
}
