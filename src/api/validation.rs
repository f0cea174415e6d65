use crate::error::{BrushError, BrushResult};

use super::{BrushEngineConfig, BrushRenderStyle};

pub(super) fn validate_engine_config(config: BrushEngineConfig) -> BrushResult<BrushEngineConfig> {
    if !config.viewport.is_valid() {
        return Err(BrushError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }
    config.tuning.validate()?;
    validate_render_style(config.render_style)?;
    Ok(config)
}

pub(super) fn validate_render_style(style: BrushRenderStyle) -> BrushResult<BrushRenderStyle> {
    style.background.validate()?;
    style.selection.validate()?;
    style.wedge.validate()?;
    Ok(style)
}
