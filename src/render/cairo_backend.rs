use cairo::{Context, Format, ImageSurface, LineCap, Operator};

use crate::core::Segment;
use crate::error::{BrushError, BrushResult};
use crate::render::{CanvasLayerKind, Color, LineStyle, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub background_segments: usize,
    pub selection_segments: usize,
    pub wedge_segments: usize,
}

/// Offscreen Cairo image-surface backend.
///
/// A `Background` draw call overwrites the whole surface with the clear
/// color, so submitting a full `RenderFrame` replaces the previous picture.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> BrushResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(BrushError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgba(0.0, 0.0, 0.0, 0.0),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> ImageSurface {
        self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> BrushResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }
}

impl Renderer for CairoRenderer {
    fn draw_segments(
        &mut self,
        layer: CanvasLayerKind,
        segments: &[Segment],
        style: LineStyle,
    ) -> BrushResult<()> {
        style.validate()?;
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        if layer == CanvasLayerKind::Background {
            // Source, not Over: a translucent clear color must still replace pixels.
            context.set_operator(Operator::Source);
            apply_color(&context, self.clear_color);
            context
                .paint()
                .map_err(|err| map_backend_error("failed to clear surface", err))?;
            context.set_operator(Operator::Over);
            self.last_stats = CairoRenderStats::default();
        }

        apply_color(&context, style.color);
        context.set_line_width(style.stroke_width);
        context.set_line_cap(LineCap::Round);
        for segment in segments {
            context.move_to(segment.x1, segment.y1);
            context.line_to(segment.x2, segment.y2);
        }
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke segments", err))?;

        match layer {
            CanvasLayerKind::Background => self.last_stats.background_segments = segments.len(),
            CanvasLayerKind::Selection => self.last_stats.selection_segments = segments.len(),
            CanvasLayerKind::Wedge => self.last_stats.wedge_segments = segments.len(),
        }
        Ok(())
    }
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> BrushError {
    BrushError::InvalidData(format!("{prefix}: {err}"))
}
