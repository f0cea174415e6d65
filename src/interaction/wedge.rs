use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Point, Segment};
use crate::error::{BrushError, BrushResult};

/// Live selection wedge: the triangle spanned by the anchor and the
/// selection line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionWedge {
    pub anchor: Point,
    pub line: Segment,
}

impl SelectionWedge {
    #[must_use]
    pub fn triangle(self) -> [Point; 3] {
        [self.anchor, self.line.start(), self.line.end()]
    }

    /// Outline of the triangle as three closed segments.
    #[must_use]
    pub fn edges(self) -> [Segment; 3] {
        let [anchor, left, right] = self.triangle();
        [
            Segment::between(anchor, left),
            Segment::between(left, right),
            Segment::between(right, anchor),
        ]
    }
}

/// Progress of `pointer_x` from the anchor toward the nearer boundary axis.
///
/// `0` at the anchor, `1` on the boundary. The value is not clamped. When the
/// nearer side has zero width (first axis, where the previous bound is the
/// anchor itself) the opposite side is used instead.
#[must_use]
pub fn selection_progress(
    anchor: Point,
    pointer_x: f64,
    prev_axis_x: f64,
    next_axis_x: f64,
) -> f64 {
    let prev_span = anchor.x - prev_axis_x;
    let next_span = next_axis_x - anchor.x;
    let toward_prev = (pointer_x - prev_axis_x).abs() < (pointer_x - next_axis_x).abs();

    if toward_prev && prev_span != 0.0 {
        (anchor.x - pointer_x) / prev_span
    } else if next_span != 0.0 {
        (pointer_x - anchor.x) / next_span
    } else if prev_span != 0.0 {
        (anchor.x - pointer_x) / prev_span
    } else {
        0.0
    }
}

/// Full selection-line width for a progress fraction, clamped to
/// `[min_size, max_size]`.
#[must_use]
pub fn selection_size(progress: f64, min_size: f64, max_size: f64) -> f64 {
    let t = progress.clamp(0.0, 1.0);
    max_size - t * (max_size - min_size)
}

/// Computes the selection line perpendicular to `anchor -> pointer`,
/// centred on the pointer.
///
/// Returns `BrushError::DegenerateVector` when the pointer sits exactly on the
/// anchor.
pub fn compute_selection_line(
    anchor: Point,
    pointer: Point,
    prev_axis_x: f64,
    next_axis_x: f64,
    min_size: f64,
    max_size: f64,
) -> BrushResult<Segment> {
    if !anchor.is_finite() || !pointer.is_finite() {
        return Err(BrushError::InvalidData(
            "wedge anchor and pointer must be finite".to_owned(),
        ));
    }

    let dx = pointer.x - anchor.x;
    let dy = pointer.y - anchor.y;
    let magnitude = dx.hypot(dy);
    if magnitude == 0.0 {
        return Err(BrushError::DegenerateVector);
    }
    let (nx, ny) = (dx / magnitude, dy / magnitude);
    let (px, py) = (ny, -nx);

    let progress = selection_progress(anchor, pointer.x, prev_axis_x, next_axis_x);
    if !(0.0..=1.0).contains(&progress) {
        trace!(progress, "clamping wedge progress outside the axis span");
    }
    let half = selection_size(progress, min_size, max_size) * 0.5;

    Ok(Segment::new(
        pointer.x - px * half,
        pointer.y - py * half,
        pointer.x + px * half,
        pointer.y + py * half,
    ))
}
