mod selector;
mod state;
mod tuning;
mod wedge;

pub use selector::{
    SelectedSet, SelectionQuery, adjacent_segment_indices, select_series, select_series_inspected,
};
pub use state::{
    ActiveSelection, AxisBounds, BrushMode, BrushState, BrushStep, SelectionUpdate,
    find_catchment_axis,
};
pub use tuning::{BrushTuning, SelectionReleaseBehavior};
pub use wedge::{SelectionWedge, compute_selection_line, selection_progress, selection_size};
