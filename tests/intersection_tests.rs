use wedge_brush::core::{Point, Segment, SegmentIntersection, check_intersection};

#[test]
fn perpendicular_crossing_is_intersecting() {
    let result = check_intersection(
        Segment::new(5.0, -5.0, 5.0, 5.0),
        Segment::new(0.0, 0.0, 10.0, 0.0),
    );
    assert_eq!(result, SegmentIntersection::Intersecting(Point::new(5.0, 0.0)));
}

#[test]
fn supporting_lines_crossing_outside_is_none() {
    let result = check_intersection(
        Segment::new(20.0, -5.0, 20.0, 5.0),
        Segment::new(0.0, 0.0, 10.0, 0.0),
    );
    assert_eq!(result, SegmentIntersection::None);
}

#[test]
fn parallel_segments_are_classified() {
    let result = check_intersection(
        Segment::new(0.0, 1.0, 10.0, 1.0),
        Segment::new(0.0, 0.0, 10.0, 0.0),
    );
    assert_eq!(result, SegmentIntersection::Parallel);
    assert!(!result.is_intersecting());
}

#[test]
fn collinear_segments_are_not_intersecting() {
    let overlapping = check_intersection(
        Segment::new(0.0, 0.0, 10.0, 0.0),
        Segment::new(5.0, 0.0, 15.0, 0.0),
    );
    assert_eq!(overlapping, SegmentIntersection::Collinear);
    assert!(!overlapping.is_intersecting());
}

#[test]
fn disjoint_collinear_segments_report_none() {
    let horizontal = check_intersection(
        Segment::new(0.0, 0.0, 10.0, 0.0),
        Segment::new(20.0, 0.0, 30.0, 0.0),
    );
    assert_eq!(horizontal, SegmentIntersection::None);

    let vertical = check_intersection(
        Segment::new(5.0, 0.0, 5.0, 4.0),
        Segment::new(5.0, 9.0, 5.0, 6.0),
    );
    assert_eq!(vertical, SegmentIntersection::None);

    let diagonal = check_intersection(
        Segment::new(0.0, 0.0, 4.0, 4.0),
        Segment::new(6.0, 6.0, 2.0, 2.0),
    );
    assert_eq!(diagonal, SegmentIntersection::Collinear);
}

#[test]
fn result_does_not_depend_on_argument_order() {
    let a = Segment::new(1.0, 7.0, 9.0, -3.0);
    let b = Segment::new(0.0, 0.0, 12.0, 4.0);
    assert_eq!(
        check_intersection(a, b).is_intersecting(),
        check_intersection(b, a).is_intersecting()
    );
}
