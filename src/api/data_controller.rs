use std::sync::Arc;

use tracing::debug;

use crate::core::{AxisScales, Dataset, SeriesGeometry, Viewport, build_paths};
use crate::error::{BrushError, BrushResult};
use crate::interaction::BrushState;
use crate::render::Renderer;

use super::{BrushEngine, BrushEvent};

impl<R: Renderer> BrushEngine<R> {
    /// Replaces the dataset and rebuilds all cached geometry.
    ///
    /// On error the previous dataset and geometry stay in place.
    pub fn set_dataset(&mut self, dataset: Dataset) -> BrushResult<()> {
        let (scales, geometry) = build_geometry(&dataset, self.core.config.viewport)?;
        debug!(
            series = dataset.len(),
            categories = dataset.categories().len(),
            "set dataset"
        );
        self.core.dataset = Some(dataset);
        self.install_geometry(scales, geometry);
        Ok(())
    }

    /// Drops the dataset; pointer events become no-ops until a new one loads.
    pub fn clear_dataset(&mut self) {
        self.core.dataset = None;
        self.core.scales = None;
        self.core.geometry = Arc::new(SeriesGeometry::default());
        self.reset_gesture();
    }

    /// Updates plot dimensions and rebuilds geometry for the loaded dataset.
    pub fn set_viewport(&mut self, viewport: Viewport) -> BrushResult<()> {
        if !viewport.is_valid() {
            return Err(BrushError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let rebuilt = match &self.core.dataset {
            Some(dataset) => Some(build_geometry(dataset, viewport)?),
            None => None,
        };
        self.core.config.viewport = viewport;
        if let Some((scales, geometry)) = rebuilt {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "rebuild geometry after resize"
            );
            self.install_geometry(scales, geometry);
        }
        Ok(())
    }

    fn install_geometry(&mut self, scales: AxisScales, geometry: SeriesGeometry) {
        self.core.scales = Some(scales);
        self.core.geometry = Arc::new(geometry);
        self.reset_gesture();
        self.emit_plugin_event(BrushEvent::GeometryRebuilt {
            series_count: self.core.geometry.series_count(),
            axis_count: self.core.geometry.axis_count(),
        });
    }

    /// Geometry changed under the gesture, so its anchor is meaningless now.
    fn reset_gesture(&mut self) {
        self.core.state = BrushState::Idle;
        self.core.selected.clear();
    }
}

fn build_geometry(
    dataset: &Dataset,
    viewport: Viewport,
) -> BrushResult<(AxisScales, SeriesGeometry)> {
    let scales = AxisScales::from_dataset(dataset, viewport)?;
    let geometry = build_paths(dataset, &scales)?;
    Ok((scales, geometry))
}
