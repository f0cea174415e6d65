pub mod axis_scales;
pub mod dataset;
pub mod intersection;
pub mod scale;
pub mod series_geometry;
pub mod types;

pub use axis_scales::{AxisScales, build_position_scale, build_value_scale};
pub use dataset::{Dataset, NAME_FIELD, Record};
pub use intersection::{SegmentIntersection, check_intersection};
pub use scale::{BandScale, LinearScale};
pub use series_geometry::{SeriesGeometry, build_paths};
pub use types::{Point, Segment, Viewport};
