use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::{BrushState, BrushTuning, SelectionReleaseBehavior};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrushSnapshot {
    pub viewport: Viewport,
    pub tuning: BrushTuning,
    pub release_behavior: SelectionReleaseBehavior,
    pub categories: Vec<String>,
    pub axis_positions: Vec<f64>,
    pub series_count: usize,
    pub state: BrushState,
    pub selected: Vec<String>,
}
