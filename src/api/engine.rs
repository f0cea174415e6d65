use std::sync::Arc;

use crate::core::{AxisScales, Dataset, SeriesGeometry, Viewport};
use crate::error::BrushResult;
use crate::interaction::{BrushMode, BrushState, BrushTuning, SelectedSet, SelectionWedge};
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::validation::validate_render_style;
use super::{BrushEngineConfig, BrushEvent, BrushRenderStyle};

/// Main orchestration facade consumed by host applications.
///
/// `BrushEngine` owns the cached series geometry, the gesture state and the
/// selected set, and forwards draw work to its renderer.
pub struct BrushEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> BrushEngine<R> {
    #[must_use]
    pub fn config(&self) -> BrushEngineConfig {
        self.core.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.core.config.viewport
    }

    #[must_use]
    pub fn tuning(&self) -> BrushTuning {
        self.core.config.tuning
    }

    pub fn set_tuning(&mut self, tuning: BrushTuning) -> BrushResult<()> {
        self.core.config.tuning = tuning.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn render_style(&self) -> BrushRenderStyle {
        self.core.config.render_style
    }

    pub fn set_render_style(&mut self, style: BrushRenderStyle) -> BrushResult<()> {
        self.core.config.render_style = validate_render_style(style)?;
        Ok(())
    }

    #[must_use]
    pub fn dataset(&self) -> Option<&Dataset> {
        self.core.dataset.as_ref()
    }

    #[must_use]
    pub fn axis_scales(&self) -> Option<&AxisScales> {
        self.core.scales.as_ref()
    }

    /// Current cached geometry. The handle stays valid across reloads.
    #[must_use]
    pub fn geometry(&self) -> Arc<SeriesGeometry> {
        Arc::clone(&self.core.geometry)
    }

    #[must_use]
    pub fn brush_state(&self) -> BrushState {
        self.core.state
    }

    #[must_use]
    pub fn mode(&self) -> BrushMode {
        self.core.state.mode()
    }

    #[must_use]
    pub fn wedge(&self) -> Option<SelectionWedge> {
        self.core.state.wedge()
    }

    #[must_use]
    pub fn selected(&self) -> &SelectedSet {
        &self.core.selected
    }

    #[must_use]
    pub fn is_selected(&self, series: &str) -> bool {
        self.core.selected.contains(series)
    }

    /// Builds the current frame and hands it to the renderer.
    pub fn render(&mut self) -> BrushResult<()> {
        let frame = self.build_render_frame();
        frame.submit(&mut self.renderer)?;
        self.emit_plugin_event(BrushEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
