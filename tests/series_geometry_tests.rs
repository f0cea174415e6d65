use wedge_brush::core::{
    AxisScales, Dataset, Point, Record, Segment, SeriesGeometry, Viewport, build_paths,
};

fn build(dataset: &Dataset, viewport: Viewport) -> SeriesGeometry {
    let scales = AxisScales::from_dataset(dataset, viewport).expect("scales");
    build_paths(dataset, &scales).expect("paths")
}

fn three_axis_dataset() -> Dataset {
    Dataset::new(vec![
        Record::new("s1")
            .with_value("A", 0.0)
            .with_value("B", 10.0)
            .with_value("C", 1.0),
        Record::new("s2")
            .with_value("A", 100.0)
            .with_value("B", 20.0)
            .with_value("C", 3.0),
    ])
    .expect("valid dataset")
}

#[test]
fn paths_hold_one_point_per_axis() {
    let geometry = build(&three_axis_dataset(), Viewport::new(900, 400));

    assert_eq!(geometry.axis_positions(), [0.0, 300.0, 600.0]);
    assert_eq!(geometry.plot_width(), 900.0);
    assert_eq!(
        geometry.path("s1").expect("s1 path"),
        [
            Point::new(0.0, 400.0),
            Point::new(300.0, 400.0),
            Point::new(600.0, 400.0)
        ]
    );
    assert_eq!(
        geometry.path("s2").expect("s2 path"),
        [
            Point::new(0.0, 0.0),
            Point::new(300.0, 0.0),
            Point::new(600.0, 0.0)
        ]
    );
}

#[test]
fn segments_connect_consecutive_axes() {
    let geometry = build(&three_axis_dataset(), Viewport::new(900, 400));
    let segments = geometry.series_segments("s1").expect("s1 segments");

    assert_eq!(
        segments,
        [
            Segment::new(0.0, 400.0, 300.0, 400.0),
            Segment::new(300.0, 400.0, 600.0, 400.0),
        ]
    );
    assert_eq!(geometry.all_segments().count(), 4);
}

#[test]
fn series_keep_dataset_order() {
    let geometry = build(&three_axis_dataset(), Viewport::new(900, 400));
    let names: Vec<&str> = geometry.series_names().collect();
    assert_eq!(names, ["s1", "s2"]);
    assert_eq!(geometry.series_count(), 2);
}

#[test]
fn single_category_yields_no_segments() {
    let dataset = Dataset::new(vec![
        Record::new("only").with_value("A", 1.0),
        Record::new("other").with_value("A", 2.0),
    ])
    .expect("valid dataset");
    let geometry = build(&dataset, Viewport::new(100, 100));

    assert_eq!(geometry.path("only").map(<[Point]>::len), Some(1));
    assert_eq!(geometry.series_segments("only").map(<[Segment]>::len), Some(0));
}

#[test]
fn resized_viewport_rescales_geometry() {
    let dataset = three_axis_dataset();
    let small = build(&dataset, Viewport::new(900, 400));
    let large = build(&dataset, Viewport::new(1800, 800));

    let small_point = small.path("s1").expect("path")[1];
    let large_point = large.path("s1").expect("path")[1];
    assert_eq!(large_point.x, small_point.x * 2.0);
    assert_eq!(large_point.y, small_point.y * 2.0);
}
