use serde::{Deserialize, Serialize};

use crate::error::{BrushError, BrushResult};

/// Geometric tuning of the wedge brush, in plot units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushTuning {
    /// Horizontal distance from an axis within which a press anchors to it.
    #[serde(default = "default_axis_catchment_px")]
    pub axis_catchment_px: f64,
    /// Full width of the selection line once the pointer reaches the next axis.
    #[serde(default = "default_min_selection_size")]
    pub min_selection_size: f64,
    /// Full width of the selection line at the anchor.
    #[serde(default = "default_max_selection_size")]
    pub max_selection_size: f64,
    /// Vertical distance between a series and the anchor for it to be tested.
    #[serde(default = "default_anchor_tolerance_px")]
    pub anchor_tolerance_px: f64,
}

impl Default for BrushTuning {
    fn default() -> Self {
        Self {
            axis_catchment_px: default_axis_catchment_px(),
            min_selection_size: default_min_selection_size(),
            max_selection_size: default_max_selection_size(),
            anchor_tolerance_px: default_anchor_tolerance_px(),
        }
    }
}

impl BrushTuning {
    pub fn validate(self) -> BrushResult<Self> {
        for (field, value) in [
            ("axis_catchment_px", self.axis_catchment_px),
            ("min_selection_size", self.min_selection_size),
            ("max_selection_size", self.max_selection_size),
            ("anchor_tolerance_px", self.anchor_tolerance_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BrushError::InvalidConfig(format!(
                    "brush tuning `{field}` must be finite and > 0"
                )));
            }
        }
        if self.min_selection_size > self.max_selection_size {
            return Err(BrushError::InvalidConfig(
                "brush tuning min_selection_size must be <= max_selection_size".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// What happens to the selected set when the pointer is released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionReleaseBehavior {
    /// Selection is a live preview and is cleared on release.
    #[default]
    Clear,
    /// The last computed selection is kept until the next gesture starts.
    Retain,
}

fn default_axis_catchment_px() -> f64 {
    20.0
}

fn default_min_selection_size() -> f64 {
    10.0
}

fn default_max_selection_size() -> f64 {
    40.0
}

fn default_anchor_tolerance_px() -> f64 {
    10.0
}
