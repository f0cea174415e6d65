mod frame;
mod layer;
mod null_renderer;
mod primitives;

pub use frame::{RenderFrame, SegmentLayer};
pub use layer::CanvasLayerKind;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LineStyle};

use crate::core::Segment;
use crate::error::BrushResult;

/// Contract implemented by any rendering backend.
///
/// The engine only hands over segments in plot space plus a stroke style;
/// buffers, shaders and retained/immediate mode are the backend's concern.
pub trait Renderer {
    fn draw_segments(
        &mut self,
        layer: CanvasLayerKind,
        segments: &[Segment],
        style: LineStyle,
    ) -> BrushResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
