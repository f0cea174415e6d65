use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::interaction::BrushMode;

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushContext {
    pub viewport: Viewport,
    pub series_count: usize,
    pub axis_count: usize,
    pub mode: BrushMode,
    pub anchor_axis: Option<usize>,
    pub selected_count: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BrushEvent {
    GeometryRebuilt { series_count: usize, axis_count: usize },
    SelectionStarted { axis_index: usize },
    SelectionChanged { selected_count: usize },
    SelectionEnded { retained_count: usize },
    Rendered,
}

/// Extension hook interface for bounded custom logic.
pub trait BrushPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: BrushEvent, context: BrushContext);
}
