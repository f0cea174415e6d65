use crate::core::{Segment, Viewport};
use crate::error::{BrushError, BrushResult};
use crate::render::{CanvasLayerKind, LineStyle, Renderer};

/// Segments of one layer drawn with a single style.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentLayer {
    pub kind: CanvasLayerKind,
    pub style: LineStyle,
    pub segments: Vec<Segment>,
}

/// Backend-agnostic scene for one brush draw pass.
///
/// Each submission replaces the previous frame on the host surface.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<SegmentLayer>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_layer(
        mut self,
        kind: CanvasLayerKind,
        style: LineStyle,
        segments: Vec<Segment>,
    ) -> Self {
        self.layers.push(SegmentLayer {
            kind,
            style,
            segments,
        });
        self
    }

    #[must_use]
    pub fn layer(&self, kind: CanvasLayerKind) -> Option<&SegmentLayer> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.segments.len()).sum()
    }

    pub fn validate(&self) -> BrushResult<()> {
        if !self.viewport.is_valid() {
            return Err(BrushError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for layer in &self.layers {
            layer.style.validate()?;
            if layer.segments.iter().any(|segment| !segment.is_finite()) {
                return Err(BrushError::InvalidData(format!(
                    "{:?} layer contains non-finite segment coordinates",
                    layer.kind
                )));
            }
        }

        Ok(())
    }

    /// Validates the frame and issues one `draw_segments` call per layer, in
    /// canonical layer order.
    pub fn submit<R: Renderer + ?Sized>(&self, renderer: &mut R) -> BrushResult<()> {
        self.validate()?;
        for kind in CanvasLayerKind::CANONICAL_ORDER {
            for layer in self.layers.iter().filter(|layer| layer.kind == kind) {
                renderer.draw_segments(layer.kind, &layer.segments, layer.style)?;
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(|layer| layer.segments.is_empty())
    }
}
