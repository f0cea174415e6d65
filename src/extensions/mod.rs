//! Observer hooks for host-side extensions.
//!
//! Plugins see brush events and a read-only context; they never mutate the
//! engine's geometry or selection.

mod plugins;

pub use plugins::{BrushContext, BrushEvent, BrushPlugin};
