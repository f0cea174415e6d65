use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Point, Segment, SeriesGeometry, check_intersection};

/// Names of the series crossing the current wedge, in dataset order.
pub type SelectedSet = IndexSet<String>;

/// Inputs of one selection pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionQuery {
    pub anchor_axis: usize,
    pub anchor: Point,
    pub line: Segment,
    /// Maximum vertical distance between a series and the anchor at the
    /// anchored axis for the series to be tested at all.
    pub anchor_tolerance: f64,
}

/// Indices of the segments touching `axis_index` out of `segment_count`:
/// the one ending there and the one starting there.
#[must_use]
pub fn adjacent_segment_indices(axis_index: usize, segment_count: usize) -> SmallVec<[usize; 2]> {
    let mut indices = SmallVec::new();
    if axis_index > 0 && axis_index - 1 < segment_count {
        indices.push(axis_index - 1);
    }
    if axis_index < segment_count {
        indices.push(axis_index);
    }
    indices
}

/// Returns every series whose path crosses the selection line next to the
/// anchored axis.
#[must_use]
pub fn select_series(geometry: &SeriesGeometry, query: SelectionQuery) -> SelectedSet {
    select_series_inspected(geometry, query, |_, _| {})
}

/// Same as [`select_series`], reporting each `(series, segment index)` pair
/// that reaches the geometric test.
pub fn select_series_inspected<F>(
    geometry: &SeriesGeometry,
    query: SelectionQuery,
    mut inspect: F,
) -> SelectedSet
where
    F: FnMut(&str, usize),
{
    let mut selected = SelectedSet::new();
    let mut candidates = 0_usize;

    for (name, segments) in geometry.segments() {
        let Some(point) = geometry
            .path(name)
            .and_then(|path| path.get(query.anchor_axis))
        else {
            continue;
        };
        if (point.y - query.anchor.y).abs() >= query.anchor_tolerance {
            continue;
        }
        candidates += 1;

        let crosses = adjacent_segment_indices(query.anchor_axis, segments.len())
            .into_iter()
            .any(|index| {
                inspect(name.as_str(), index);
                check_intersection(query.line, segments[index]).is_intersecting()
            });
        if crosses {
            selected.insert(name.clone());
        }
    }

    trace!(
        axis = query.anchor_axis,
        candidates,
        selected = selected.len(),
        "selection pass"
    );
    selected
}
