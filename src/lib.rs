//! wedge-brush: angular brushing engine for parallel-coordinates plots.
//!
//! The crate maps dataset records onto evenly spaced axes, caches each
//! series' inter-axis segments, and turns pointer drags into a narrowing
//! selection wedge whose crossings decide which series are selected.
//! Drawing is delegated to a `Renderer` backend.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BrushEngine, BrushEngineConfig};
pub use error::{BrushError, BrushResult};
