use indexmap::IndexMap;

use crate::core::Segment;
use crate::error::BrushResult;
use crate::render::{CanvasLayerKind, LineStyle, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// Remembers how many segments each layer received in its latest draw call.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub draw_calls: usize,
    pub last_segment_counts: IndexMap<CanvasLayerKind, usize>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_segment_count(&self, kind: CanvasLayerKind) -> usize {
        self.last_segment_counts.get(&kind).copied().unwrap_or(0)
    }
}

impl Renderer for NullRenderer {
    fn draw_segments(
        &mut self,
        layer: CanvasLayerKind,
        segments: &[Segment],
        style: LineStyle,
    ) -> BrushResult<()> {
        style.validate()?;
        self.draw_calls += 1;
        self.last_segment_counts.insert(layer, segments.len());
        Ok(())
    }
}
