use proptest::prelude::*;
use wedge_brush::core::{
    AxisScales, Dataset, Point, Record, Segment, SeriesGeometry, Viewport, build_paths,
};
use wedge_brush::interaction::{SelectionQuery, select_series, select_series_inspected};

fn geometry_strategy() -> impl Strategy<Value = SeriesGeometry> {
    (2usize..7)
        .prop_flat_map(|categories| {
            prop::collection::vec(prop::collection::vec(0.0f64..100.0, categories), 1..40)
        })
        .prop_map(|rows| {
            let records = rows
                .into_iter()
                .enumerate()
                .map(|(row, values)| {
                    values
                        .into_iter()
                        .enumerate()
                        .fold(Record::new(format!("s{row}")), |record, (column, value)| {
                            record.with_value(format!("c{column}"), value)
                        })
                })
                .collect();
            let dataset = Dataset::new(records).expect("generated dataset is valid");
            let scales =
                AxisScales::from_dataset(&dataset, Viewport::new(1200, 600)).expect("scales");
            build_paths(&dataset, &scales).expect("paths")
        })
}

fn query_for(
    geometry: &SeriesGeometry,
    axis_pick: usize,
    y: f64,
    dx: f64,
    half: f64,
) -> SelectionQuery {
    let anchor_axis = axis_pick % geometry.axis_count();
    let axis_x = geometry.axis_x(anchor_axis).unwrap_or(0.0);
    SelectionQuery {
        anchor_axis,
        anchor: Point::new(axis_x, y),
        line: Segment::new(axis_x + dx, y - half, axis_x + dx, y + half),
        anchor_tolerance: 10.0,
    }
}

proptest! {
    #[test]
    fn selection_is_deterministic(
        geometry in geometry_strategy(),
        axis_pick in 0usize..16,
        y in 0.0f64..600.0,
        dx in -150.0f64..150.0,
        half in 0.0f64..40.0
    ) {
        let query = query_for(&geometry, axis_pick, y, dx, half);
        prop_assert_eq!(select_series(&geometry, query), select_series(&geometry, query));
    }

    #[test]
    fn only_segments_adjacent_to_anchor_are_tested(
        geometry in geometry_strategy(),
        axis_pick in 0usize..16,
        y in 0.0f64..600.0,
        dx in -150.0f64..150.0,
        half in 0.0f64..40.0
    ) {
        let query = query_for(&geometry, axis_pick, y, dx, half);
        let mut tested: Vec<(String, usize)> = Vec::new();
        let selected = select_series_inspected(&geometry, query, |name, index| {
            tested.push((name.to_owned(), index));
        });

        for (_, index) in &tested {
            prop_assert!(*index + 1 == query.anchor_axis || *index == query.anchor_axis);
        }
        for name in geometry.series_names() {
            let per_series = tested.iter().filter(|(tested_name, _)| tested_name == name).count();
            prop_assert!(per_series <= 2);
        }
        for name in &selected {
            prop_assert!(tested.iter().any(|(tested_name, _)| tested_name == name));
        }
    }
}
