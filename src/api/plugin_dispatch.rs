use crate::extensions::{BrushContext, BrushEvent};
use crate::render::Renderer;

use super::BrushEngine;

impl<R: Renderer> BrushEngine<R> {
    pub(super) fn plugin_context(&self) -> BrushContext {
        BrushContext {
            viewport: self.core.config.viewport,
            series_count: self.core.geometry.series_count(),
            axis_count: self.core.geometry.axis_count(),
            mode: self.core.state.mode(),
            anchor_axis: self
                .core
                .state
                .active()
                .map(|selection| selection.axis_index),
            selected_count: self.core.selected.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: BrushEvent) {
        let context = self.plugin_context();
        for plugin in &mut self.core.plugins {
            plugin.on_event(event, context);
        }
    }
}
