use indexmap::IndexMap;
use tracing::debug;

use crate::core::dataset::Dataset;
use crate::core::scale::{BandScale, LinearScale};
use crate::core::types::Viewport;
use crate::error::{BrushError, BrushResult};

/// Builds the horizontal axis placement for `categories` across the plot width.
pub fn build_position_scale(categories: &[String], viewport: Viewport) -> BrushResult<BandScale> {
    validate_viewport(viewport)?;
    BandScale::new(categories, viewport.width_f64())
}

/// Builds the inverted value scale for one category: `min -> height`, `max -> 0`.
pub fn build_value_scale(
    category: &str,
    dataset: &Dataset,
    viewport: Viewport,
) -> BrushResult<LinearScale> {
    validate_viewport(viewport)?;
    let (min, max) = dataset.category_extent(category).ok_or_else(|| {
        BrushError::InvalidData(format!("unknown category `{category}`"))
    })?;
    LinearScale::new(min, max, viewport.height_f64(), 0.0)
}

/// Position scale plus one value scale per category, built once per dataset
/// and viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisScales {
    position: BandScale,
    values: IndexMap<String, LinearScale>,
}

impl AxisScales {
    pub fn from_dataset(dataset: &Dataset, viewport: Viewport) -> BrushResult<Self> {
        let position = build_position_scale(dataset.categories(), viewport)?;
        let mut values = IndexMap::with_capacity(dataset.categories().len());
        for category in dataset.categories() {
            let scale = build_value_scale(category, dataset, viewport)?;
            if scale.is_degenerate() {
                debug!(category = %category, "flat category mapped to axis midpoint");
            }
            values.insert(category.clone(), scale);
        }
        Ok(Self { position, values })
    }

    #[must_use]
    pub fn position(&self) -> &BandScale {
        &self.position
    }

    #[must_use]
    pub fn value_scale(&self, category: &str) -> Option<LinearScale> {
        self.values.get(category).copied()
    }

    #[must_use]
    pub fn value_scale_at(&self, index: usize) -> Option<LinearScale> {
        self.values.get_index(index).map(|(_, scale)| *scale)
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.position.len()
    }

    /// Axis x positions in axis order.
    #[must_use]
    pub fn axis_positions(&self) -> Vec<f64> {
        (0..self.axis_count())
            .map(|index| self.position.position_at(index))
            .collect()
    }
}

fn validate_viewport(viewport: Viewport) -> BrushResult<()> {
    if !viewport.is_valid() {
        return Err(BrushError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(())
}
