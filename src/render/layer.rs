use serde::{Deserialize, Serialize};

/// Drawing layers of one brush frame, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CanvasLayerKind {
    /// Every series, drawn once per geometry rebuild.
    Background,
    /// Series in the current selected set.
    Selection,
    /// Outline of the live selection wedge.
    Wedge,
}

impl CanvasLayerKind {
    pub const CANONICAL_ORDER: [Self; 3] = [Self::Background, Self::Selection, Self::Wedge];
}
