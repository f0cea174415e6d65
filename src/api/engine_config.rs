use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{BrushError, BrushResult};
use crate::interaction::{BrushTuning, SelectionReleaseBehavior};
use crate::render::LineStyle;

use super::validation::validate_engine_config;

/// Per-layer stroke styles handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushRenderStyle {
    pub background: LineStyle,
    pub selection: LineStyle,
    pub wedge: LineStyle,
}

impl Default for BrushRenderStyle {
    fn default() -> Self {
        Self {
            background: LineStyle::background(),
            selection: LineStyle::highlight(),
            wedge: LineStyle::wedge(),
        }
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist/load brush setup without
/// inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrushEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub tuning: BrushTuning,
    #[serde(default)]
    pub release_behavior: SelectionReleaseBehavior,
    #[serde(default)]
    pub render_style: BrushRenderStyle,
}

impl BrushEngineConfig {
    /// Creates a config with default tuning for a plot of the given size.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            tuning: BrushTuning::default(),
            release_behavior: SelectionReleaseBehavior::default(),
            render_style: BrushRenderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: BrushTuning) -> Self {
        self.tuning = tuning;
        self
    }

    #[must_use]
    pub fn with_release_behavior(mut self, behavior: SelectionReleaseBehavior) -> Self {
        self.release_behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_render_style(mut self, style: BrushRenderStyle) -> Self {
        self.render_style = style;
        self
    }

    pub fn validate(self) -> BrushResult<Self> {
        validate_engine_config(self)
    }

    pub fn to_json_pretty(&self) -> BrushResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            BrushError::InvalidConfig(format!("failed to serialize engine config: {e}"))
        })
    }

    /// Parses and validates a config; missing optional sections take defaults.
    pub fn from_json_str(input: &str) -> BrushResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            BrushError::InvalidConfig(format!("failed to parse engine config: {e}"))
        })?;
        config.validate()
    }
}
