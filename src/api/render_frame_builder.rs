use crate::core::Segment;
use crate::render::{CanvasLayerKind, RenderFrame, Renderer};

use super::BrushEngine;

impl<R: Renderer> BrushEngine<R> {
    /// Builds the full brush scene: every series in the background, the
    /// selected series on top, and the wedge outline while a gesture is active.
    #[must_use]
    pub fn build_render_frame(&self) -> RenderFrame {
        let style = self.core.config.render_style;
        let geometry = &self.core.geometry;

        let background: Vec<Segment> = geometry.all_segments().copied().collect();
        let selection: Vec<Segment> = self
            .core
            .selected
            .iter()
            .filter_map(|name| geometry.series_segments(name))
            .flatten()
            .copied()
            .collect();

        let mut frame = RenderFrame::new(self.core.config.viewport)
            .with_layer(CanvasLayerKind::Background, style.background, background)
            .with_layer(CanvasLayerKind::Selection, style.selection, selection);
        if let Some(wedge) = self.core.state.wedge() {
            frame = frame.with_layer(CanvasLayerKind::Wedge, style.wedge, wedge.edges().to_vec());
        }
        frame
    }
}
