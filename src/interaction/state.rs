use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::core::{Point, Segment, SeriesGeometry};
use crate::error::BrushResult;

use super::selector::{SelectedSet, SelectionQuery, select_series};
use super::tuning::BrushTuning;
use super::wedge::{SelectionWedge, compute_selection_line};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushMode {
    Idle,
    Selecting,
}

/// Horizontal range a drag may move through: the neighbouring axes, or the
/// plot edges for the outermost axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisBounds {
    pub previous: f64,
    pub next: f64,
}

impl AxisBounds {
    /// Bounds for the axis at `axis_index`.
    #[must_use]
    pub fn around(geometry: &SeriesGeometry, axis_index: usize) -> Self {
        let previous = axis_index
            .checked_sub(1)
            .and_then(|index| geometry.axis_x(index))
            .unwrap_or(0.0);
        let next = geometry
            .axis_x(axis_index + 1)
            .unwrap_or_else(|| geometry.plot_width());
        Self { previous, next }
    }

    /// Strict containment; the boundary axes themselves are excluded.
    #[must_use]
    pub fn contains(self, x: f64) -> bool {
        x > self.previous && x < self.next
    }
}

/// State of one in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveSelection {
    pub axis_index: usize,
    pub anchor: Point,
    pub bounds: AxisBounds,
    pub line: Segment,
}

impl ActiveSelection {
    #[must_use]
    pub fn wedge(self) -> SelectionWedge {
        SelectionWedge {
            anchor: self.anchor,
            line: self.line,
        }
    }

    #[must_use]
    pub fn query(self, tuning: BrushTuning) -> SelectionQuery {
        SelectionQuery {
            anchor_axis: self.axis_index,
            anchor: self.anchor,
            line: self.line,
            anchor_tolerance: tuning.anchor_tolerance_px,
        }
    }
}

/// Brush interaction state.
///
/// Transitions only happen through `on_pointer_down`, `on_pointer_move` and
/// `on_pointer_up`, which consume the current state and return the next one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum BrushState {
    #[default]
    Idle,
    Selecting(ActiveSelection),
}

/// Effect of a transition on the selected set.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionUpdate {
    /// The selected set is left as it was.
    Unchanged,
    /// The selected set is replaced by a fresh result.
    Replace(SelectedSet),
    /// The gesture ended; the owner applies its release behavior.
    Released,
}

/// Result of one pure state transition.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushStep {
    pub state: BrushState,
    pub update: SelectionUpdate,
}

impl BrushStep {
    fn unchanged(state: BrushState) -> Self {
        Self {
            state,
            update: SelectionUpdate::Unchanged,
        }
    }
}

/// Index of the axis nearest to `x` within `catchment`, if any.
#[must_use]
pub fn find_catchment_axis(geometry: &SeriesGeometry, x: f64, catchment: f64) -> Option<usize> {
    geometry
        .axis_positions()
        .iter()
        .enumerate()
        .map(|(index, axis_x)| (index, (axis_x - x).abs()))
        .filter(|(_, distance)| *distance < catchment)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(index, _)| index)
}

impl BrushState {
    #[must_use]
    pub fn mode(&self) -> BrushMode {
        match self {
            Self::Idle => BrushMode::Idle,
            Self::Selecting(_) => BrushMode::Selecting,
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&ActiveSelection> {
        match self {
            Self::Idle => None,
            Self::Selecting(selection) => Some(selection),
        }
    }

    #[must_use]
    pub fn wedge(&self) -> Option<SelectionWedge> {
        self.active().map(|selection| selection.wedge())
    }

    /// Starts a gesture when `pointer` lands within the catchment of an axis.
    ///
    /// A press away from every axis leaves the state untouched.
    #[must_use]
    pub fn on_pointer_down(
        self,
        pointer: Point,
        geometry: &SeriesGeometry,
        tuning: BrushTuning,
    ) -> BrushStep {
        if !pointer.is_finite() {
            return BrushStep::unchanged(self);
        }
        let Some(axis_index) = find_catchment_axis(geometry, pointer.x, tuning.axis_catchment_px)
        else {
            trace!(x = pointer.x, "pointer down outside axis catchment");
            return BrushStep::unchanged(self);
        };
        let Some(axis_x) = geometry.axis_x(axis_index) else {
            return BrushStep::unchanged(self);
        };

        let anchor = Point::new(axis_x, pointer.y);
        let bounds = AxisBounds::around(geometry, axis_index);
        let line = wedge_line(anchor, pointer, bounds, tuning).unwrap_or_else(|err| {
            warn!(error = %err, "starting with a zero-length selection line");
            Segment::between(pointer, pointer)
        });
        let selection = ActiveSelection {
            axis_index,
            anchor,
            bounds,
            line,
        };
        let selected = select_series(geometry, selection.query(tuning));
        trace!(
            axis = axis_index,
            anchor_y = anchor.y,
            selected = selected.len(),
            "selection started"
        );

        BrushStep {
            state: Self::Selecting(selection),
            update: SelectionUpdate::Replace(selected),
        }
    }

    /// Recomputes the wedge and selection while the pointer stays strictly
    /// between the neighbouring axes. Moves while idle or outside the bounds
    /// are ignored.
    #[must_use]
    pub fn on_pointer_move(
        self,
        pointer: Point,
        geometry: &SeriesGeometry,
        tuning: BrushTuning,
    ) -> BrushStep {
        let Self::Selecting(mut selection) = self else {
            return BrushStep::unchanged(self);
        };
        if !pointer.is_finite() || !selection.bounds.contains(pointer.x) {
            trace!(x = pointer.x, "pointer move outside selection bounds");
            return BrushStep::unchanged(self);
        }

        match wedge_line(selection.anchor, pointer, selection.bounds, tuning) {
            Ok(line) => selection.line = line,
            Err(err) => {
                warn!(error = %err, "holding previous selection wedge");
                return BrushStep::unchanged(self);
            }
        }

        let selected = select_series(geometry, selection.query(tuning));
        BrushStep {
            state: Self::Selecting(selection),
            update: SelectionUpdate::Replace(selected),
        }
    }

    /// Ends the gesture. Releasing while idle is a no-op.
    #[must_use]
    pub fn on_pointer_up(self) -> BrushStep {
        match self {
            Self::Idle => BrushStep::unchanged(self),
            Self::Selecting(selection) => {
                trace!(axis = selection.axis_index, "selection released");
                BrushStep {
                    state: Self::Idle,
                    update: SelectionUpdate::Released,
                }
            }
        }
    }
}

fn wedge_line(
    anchor: Point,
    pointer: Point,
    bounds: AxisBounds,
    tuning: BrushTuning,
) -> BrushResult<Segment> {
    compute_selection_line(
        anchor,
        pointer,
        bounds.previous,
        bounds.next,
        tuning.min_selection_size,
        tuning.max_selection_size,
    )
}
