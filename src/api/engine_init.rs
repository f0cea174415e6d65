use std::sync::Arc;

use crate::core::SeriesGeometry;
use crate::error::BrushResult;
use crate::interaction::{BrushState, SelectedSet};
use crate::render::Renderer;

use super::engine_core::EngineCore;
use super::{BrushEngine, BrushEngineConfig};

impl<R: Renderer> BrushEngine<R> {
    /// Creates an engine with no dataset; load one with `set_dataset`.
    pub fn new(renderer: R, config: BrushEngineConfig) -> BrushResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                dataset: None,
                scales: None,
                geometry: Arc::new(SeriesGeometry::default()),
                state: BrushState::Idle,
                selected: SelectedSet::new(),
                plugins: Vec::new(),
            },
        })
    }
}
