use approx::assert_relative_eq;
use wedge_brush::BrushError;
use wedge_brush::core::{Point, Segment};
use wedge_brush::interaction::{
    SelectionWedge, compute_selection_line, selection_progress, selection_size,
};

const MIN_SIZE: f64 = 10.0;
const MAX_SIZE: f64 = 40.0;

#[test]
fn horizontal_drag_produces_vertical_line_centred_on_pointer() {
    let line = compute_selection_line(
        Point::new(100.0, 100.0),
        Point::new(150.0, 100.0),
        0.0,
        200.0,
        MIN_SIZE,
        MAX_SIZE,
    )
    .expect("line");

    assert_relative_eq!(line.x1, 150.0);
    assert_relative_eq!(line.y1, 112.5);
    assert_relative_eq!(line.x2, 150.0);
    assert_relative_eq!(line.y2, 87.5);
    assert_relative_eq!(line.length(), 25.0);
    assert_relative_eq!(line.midpoint().x, 150.0);
}

#[test]
fn line_is_perpendicular_to_drag_direction() {
    let anchor = Point::new(300.0, 200.0);
    let pointer = Point::new(340.0, 170.0);
    let line =
        compute_selection_line(anchor, pointer, 150.0, 450.0, MIN_SIZE, MAX_SIZE).expect("line");

    let drag = (pointer.x - anchor.x, pointer.y - anchor.y);
    let across = (line.x2 - line.x1, line.y2 - line.y1);
    assert_relative_eq!(drag.0 * across.0 + drag.1 * across.1, 0.0, epsilon = 1e-9);
    assert_relative_eq!(line.midpoint().x, pointer.x, epsilon = 1e-9);
    assert_relative_eq!(line.midpoint().y, pointer.y, epsilon = 1e-9);
}

#[test]
fn wedge_is_widest_at_anchor_and_narrowest_at_neighbour() {
    let anchor = Point::new(100.0, 50.0);
    let near = compute_selection_line(anchor, Point::new(100.0, 60.0), 0.0, 200.0, 10.0, 40.0)
        .expect("near line");
    let far = compute_selection_line(anchor, Point::new(200.0, 60.0), 0.0, 200.0, 10.0, 40.0)
        .expect("far line");

    assert_relative_eq!(near.length(), MAX_SIZE, epsilon = 1e-9);
    assert_relative_eq!(far.length(), MIN_SIZE, epsilon = 1e-9);
}

#[test]
fn drag_toward_previous_axis_uses_previous_span() {
    let anchor = Point::new(200.0, 50.0);
    assert_relative_eq!(selection_progress(anchor, 150.0, 100.0, 300.0), 0.5);
    assert_relative_eq!(selection_progress(anchor, 250.0, 100.0, 300.0), 0.5);
}

#[test]
fn last_axis_measures_toward_plot_edge() {
    let anchor = Point::new(750.0, 50.0);
    assert_relative_eq!(selection_progress(anchor, 875.0, 500.0, 1000.0), 0.5);
}

#[test]
fn progress_is_unclamped_but_size_is_clamped() {
    let anchor = Point::new(100.0, 0.0);
    let beyond = selection_progress(anchor, 300.0, 0.0, 200.0);
    assert_relative_eq!(beyond, 2.0);
    assert_relative_eq!(selection_size(beyond, MIN_SIZE, MAX_SIZE), MIN_SIZE);
    assert_relative_eq!(selection_size(-1.0, MIN_SIZE, MAX_SIZE), MAX_SIZE);

    let line = compute_selection_line(anchor, Point::new(300.0, 0.0), 0.0, 200.0, 10.0, 40.0)
        .expect("line");
    assert_relative_eq!(line.length(), MIN_SIZE, epsilon = 1e-9);
}

#[test]
fn pointer_on_anchor_is_degenerate() {
    let anchor = Point::new(10.0, 10.0);
    let result = compute_selection_line(anchor, anchor, 0.0, 100.0, MIN_SIZE, MAX_SIZE);
    assert_eq!(result, Err(BrushError::DegenerateVector));
}

#[test]
fn non_finite_pointer_is_rejected() {
    let result = compute_selection_line(
        Point::new(0.0, 0.0),
        Point::new(f64::NAN, 1.0),
        0.0,
        100.0,
        MIN_SIZE,
        MAX_SIZE,
    );
    assert!(matches!(result, Err(BrushError::InvalidData(_))));
}

#[test]
fn wedge_triangle_closes_on_anchor() {
    let wedge = SelectionWedge {
        anchor: Point::new(0.0, 0.0),
        line: Segment::new(10.0, -2.0, 10.0, 2.0),
    };

    let [anchor, left, right] = wedge.triangle();
    assert_eq!(anchor, Point::new(0.0, 0.0));
    assert_eq!(left, Point::new(10.0, -2.0));
    assert_eq!(right, Point::new(10.0, 2.0));

    let edges = wedge.edges();
    assert_eq!(edges[0].start(), anchor);
    assert_eq!(edges[2].end(), anchor);
}
