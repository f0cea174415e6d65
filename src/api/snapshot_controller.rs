use crate::error::{BrushError, BrushResult};
use crate::render::Renderer;

use super::{BrushEngine, BrushSnapshot};

impl<R: Renderer> BrushEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> BrushSnapshot {
        BrushSnapshot {
            viewport: self.core.config.viewport,
            tuning: self.core.config.tuning,
            release_behavior: self.core.config.release_behavior,
            categories: self
                .core
                .dataset
                .as_ref()
                .map(|dataset| dataset.categories().to_vec())
                .unwrap_or_default(),
            axis_positions: self.core.geometry.axis_positions().to_vec(),
            series_count: self.core.geometry.series_count(),
            state: self.core.state,
            selected: self.core.selected.iter().cloned().collect(),
        }
    }

    /// Serializes the snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> BrushResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| BrushError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
