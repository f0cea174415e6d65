use proptest::prelude::*;
use wedge_brush::core::{BandScale, LinearScale};

proptest! {
    #[test]
    fn inverted_value_scale_maps_extremes_to_plot_edges(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        height in 1.0f64..4096.0
    ) {
        let max = min + span;
        let scale = LinearScale::new(min, max, height, 0.0).expect("valid scale");

        prop_assert!((scale.map(min) - height).abs() <= 1e-9 * height.max(1.0));
        prop_assert!(scale.map(max).abs() <= 1e-9 * height.max(1.0));
    }

    #[test]
    fn value_scale_round_trip_property(
        min in -1_000_000.0f64..1_000_000.0,
        span in 0.001f64..1_000_000.0,
        value_factor in 0.0f64..1.0
    ) {
        let max = min + span;
        let value = min + value_factor * span;
        let scale = LinearScale::new(min, max, 1024.0, 0.0).expect("valid scale");

        let recovered = scale.invert(scale.map(value));
        prop_assert!((recovered - value).abs() <= 1e-6);
    }

    #[test]
    fn band_positions_are_evenly_spaced(count in 1usize..32, width in 1.0f64..4096.0) {
        let categories: Vec<String> = (0..count).map(|index| format!("c{index}")).collect();
        let scale = BandScale::new(&categories, width).expect("band scale");

        for index in 0..count {
            let expected = width * index as f64 / count as f64;
            prop_assert!((scale.position_at(index) - expected).abs() <= 1e-9 * width);
            prop_assert!(scale.position_at(index) < width);
        }
    }
}
