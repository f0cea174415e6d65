use indexmap::IndexMap;
use tracing::debug;

use crate::core::axis_scales::AxisScales;
use crate::core::dataset::Dataset;
use crate::core::types::{Point, Segment};
use crate::error::{BrushError, BrushResult};

/// Cached per-series geometry derived from a dataset and its axis scales.
///
/// Each series owns one point per axis and one segment per adjacent axis pair.
/// The structure is immutable once built; reloads build a new value and swap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesGeometry {
    plot_width: f64,
    axis_positions: Vec<f64>,
    paths: IndexMap<String, Vec<Point>>,
    segments: IndexMap<String, Vec<Segment>>,
}

/// Projects every record through the axis scales.
pub fn build_paths(dataset: &Dataset, scales: &AxisScales) -> BrushResult<SeriesGeometry> {
    let categories = dataset.categories();
    let mut axes = Vec::with_capacity(categories.len());
    for category in categories {
        let x = scales.position().position(category).ok_or_else(|| {
            BrushError::InvalidData(format!("category `{category}` has no axis position"))
        })?;
        let value_scale = scales.value_scale(category).ok_or_else(|| {
            BrushError::InvalidData(format!("category `{category}` has no value scale"))
        })?;
        axes.push((category.as_str(), x, value_scale));
    }

    let mut paths = IndexMap::with_capacity(dataset.len());
    let mut segments = IndexMap::with_capacity(dataset.len());
    for record in dataset.records() {
        let mut path = Vec::with_capacity(axes.len());
        for (category, x, value_scale) in &axes {
            let value =
                record
                    .value(category)
                    .ok_or_else(|| BrushError::MissingCategoryValue {
                        series: record.name.clone(),
                        category: (*category).to_owned(),
                    })?;
            path.push(Point::new(*x, value_scale.map(value)));
        }
        let record_segments: Vec<Segment> = path
            .windows(2)
            .map(|pair| Segment::between(pair[0], pair[1]))
            .collect();
        paths.insert(record.name.clone(), path);
        segments.insert(record.name.clone(), record_segments);
    }

    debug!(
        series = paths.len(),
        axes = axes.len(),
        "built series geometry"
    );

    Ok(SeriesGeometry {
        plot_width: scales.position().range_width(),
        axis_positions: axes.iter().map(|(_, x, _)| *x).collect(),
        paths,
        segments,
    })
}

impl SeriesGeometry {
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.plot_width
    }

    #[must_use]
    pub fn axis_count(&self) -> usize {
        self.axis_positions.len()
    }

    #[must_use]
    pub fn axis_positions(&self) -> &[f64] {
        &self.axis_positions
    }

    #[must_use]
    pub fn axis_x(&self, axis_index: usize) -> Option<f64> {
        self.axis_positions.get(axis_index).copied()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.paths.len()
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.paths.keys().map(String::as_str)
    }

    #[must_use]
    pub fn paths(&self) -> &IndexMap<String, Vec<Point>> {
        &self.paths
    }

    #[must_use]
    pub fn segments(&self) -> &IndexMap<String, Vec<Segment>> {
        &self.segments
    }

    #[must_use]
    pub fn path(&self, name: &str) -> Option<&[Point]> {
        self.paths.get(name).map(Vec::as_slice)
    }

    #[must_use]
    pub fn series_segments(&self, name: &str) -> Option<&[Segment]> {
        self.segments.get(name).map(Vec::as_slice)
    }

    /// Flattens every series' segments in series order, for background drawing.
    pub fn all_segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.values().flatten()
    }
}
