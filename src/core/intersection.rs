use serde::{Deserialize, Serialize};

use crate::core::types::{Point, Segment};

/// Classification of a segment-segment test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SegmentIntersection {
    /// Segments cross (or touch) at exactly one point.
    Intersecting(Point),
    /// Segments lie on the same infinite line and overlap.
    Collinear,
    /// Segments have the same direction but lie on different lines.
    Parallel,
    /// Supporting lines cross outside at least one of the segments, or the
    /// segments are collinear but disjoint.
    None,
}

impl SegmentIntersection {
    #[must_use]
    pub fn is_intersecting(self) -> bool {
        matches!(self, Self::Intersecting(_))
    }
}

/// Parametric intersection of segments `a` and `b`.
///
/// Endpoint contact counts as intersecting. Zero-length segments never
/// intersect: their denominator vanishes and they classify as collinear,
/// parallel or none.
#[must_use]
pub fn check_intersection(a: Segment, b: Segment) -> SegmentIntersection {
    let denom = (b.y2 - b.y1) * (a.x2 - a.x1) - (b.x2 - b.x1) * (a.y2 - a.y1);
    let nume_a = (b.x2 - b.x1) * (a.y1 - b.y1) - (b.y2 - b.y1) * (a.x1 - b.x1);
    let nume_b = (a.x2 - a.x1) * (a.y1 - b.y1) - (a.y2 - a.y1) * (a.x1 - b.x1);

    if denom == 0.0 {
        if nume_a == 0.0 && nume_b == 0.0 {
            if collinear_overlap(a, b) {
                return SegmentIntersection::Collinear;
            }
            return SegmentIntersection::None;
        }
        return SegmentIntersection::Parallel;
    }

    let u_a = nume_a / denom;
    let u_b = nume_b / denom;
    if (0.0..=1.0).contains(&u_a) && (0.0..=1.0).contains(&u_b) {
        return SegmentIntersection::Intersecting(Point::new(
            a.x1 + u_a * (a.x2 - a.x1),
            a.y1 + u_a * (a.y2 - a.y1),
        ));
    }

    SegmentIntersection::None
}

/// Interval overlap of two collinear segments, projected on their dominant axis.
fn collinear_overlap(a: Segment, b: Segment) -> bool {
    let span_x = (a.x2 - a.x1).abs().max((b.x2 - b.x1).abs());
    let span_y = (a.y2 - a.y1).abs().max((b.y2 - b.y1).abs());
    let (a_start, a_end, b_start, b_end) = if span_x >= span_y {
        (a.x1, a.x2, b.x1, b.x2)
    } else {
        (a.y1, a.y2, b.y1, b.y2)
    };
    a_start.min(a_end).max(b_start.min(b_end)) <= a_start.max(a_end).min(b_start.max(b_end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments_report_point() {
        let result = check_intersection(
            Segment::new(0.0, 0.0, 10.0, 10.0),
            Segment::new(0.0, 10.0, 10.0, 0.0),
        );
        assert_eq!(result, SegmentIntersection::Intersecting(Point::new(5.0, 5.0)));
    }

    #[test]
    fn shared_endpoint_counts_as_intersecting() {
        let result = check_intersection(
            Segment::new(0.0, 0.0, 5.0, 0.0),
            Segment::new(5.0, 0.0, 5.0, 5.0),
        );
        assert!(result.is_intersecting());
    }

    #[test]
    fn zero_length_segment_never_intersects() {
        let result = check_intersection(
            Segment::new(3.0, 3.0, 3.0, 3.0),
            Segment::new(0.0, 0.0, 10.0, 10.0),
        );
        assert!(!result.is_intersecting());
    }
}
