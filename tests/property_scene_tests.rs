use marker_chart_rs::api::layout_scene;
use marker_chart_rs::core::{
    DataPoint, GradientCase, LayoutConfig, build_gradient, map_bar, resolve,
};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = LayoutConfig> {
    (
        prop::option::of(1.0f64..2_000.0),
        0.1f64..4.0,
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(|(hard_max, scale, marker, target_heading, time)| {
            let config = LayoutConfig::default()
                .with_hard_max_width(hard_max)
                .with_width_scale_factor(scale)
                .with_marker(marker)
                .with_time_formatting(time);
            if target_heading {
                config.with_target_heading(Some("Target".to_owned()))
            } else {
                config
            }
        })
}

fn row_strategy() -> impl Strategy<Value = DataPoint> {
    (0.0f64..1_000.0, 0.0f64..1_000.0).prop_map(|(achieved, target)| {
        DataPoint::new("row", achieved, target, "#336699")
    })
}

proptest! {
    #[test]
    fn gradient_offsets_run_from_zero_to_hundred(
        row in row_strategy(),
        config in config_strategy()
    ) {
        let gradient = build_gradient(&row, &row.color, &config).expect("gradient");
        let stops = &gradient.stops;

        prop_assert_eq!(stops.first().expect("first").offset_percent, 0.0);
        prop_assert_eq!(stops.last().expect("last").offset_percent, 100.0);
        for pair in stops.windows(2) {
            prop_assert!(pair[0].offset_percent <= pair[1].offset_percent);
        }
    }

    #[test]
    fn gradient_case_matches_values(
        row in row_strategy(),
        config in config_strategy()
    ) {
        let gradient = build_gradient(&row, &row.color, &config).expect("gradient");
        let first = gradient.stops.first().expect("first");
        if row.achieved > row.target {
            prop_assert!(!first.transparent);
            prop_assert_eq!(&first.color, &row.color);
        } else {
            prop_assert_eq!(gradient.case, GradientCase::AtOrBelowTarget);
            if config.hard_max_width.is_none() {
                prop_assert!(gradient.is_solid());
            }
        }
    }

    #[test]
    fn bar_width_is_monotonic_in_row_extent(
        small in 0.0f64..500.0,
        extra in 0.0f64..500.0,
        width in 0.0f64..3_000.0,
        config in config_strategy()
    ) {
        let profile = resolve(width).expect("profile");
        let narrow_row = DataPoint::new("row", small, small * 0.5, "#000");
        let wide_row = DataPoint::new("row", small + extra, small * 0.5, "#000");

        let narrow = map_bar(&narrow_row, 0, &profile, &config).expect("narrow");
        let wide = map_bar(&wide_row, 0, &profile, &config).expect("wide");
        prop_assert!(narrow.width >= 0.0);
        prop_assert!(narrow.width <= wide.width);
    }

    #[test]
    fn resolver_is_total_and_coarser_when_narrower(
        a in 0.0f64..5_000.0,
        b in 0.0f64..5_000.0
    ) {
        let (narrow, wide) = if a <= b { (a, b) } else { (b, a) };
        let narrow_profile = resolve(narrow).expect("narrow");
        let wide_profile = resolve(wide).expect("wide");

        prop_assert!(narrow_profile.min_width <= wide_profile.min_width);
        prop_assert!(narrow_profile.min_width <= narrow);
        prop_assert!(narrow_profile.hard_max_divisor >= wide_profile.hard_max_divisor);
        prop_assert!(narrow_profile.data_divisor >= wide_profile.data_divisor);
    }

    #[test]
    fn marker_agrees_with_gradient_on_overshoot(
        target in 0.0f64..800.0,
        overshoot in 0.01f64..400.0,
        width in 0.0f64..3_000.0,
        config in config_strategy()
    ) {
        let config = config.with_marker(true);
        let rows = vec![DataPoint::new("row", target + overshoot, target, "#0af")];
        let scene = layout_scene(&rows, width, &config).expect("scene");
        let row = &scene.rows[0];
        let line = row.marker_line.expect("marker");

        match row.gradient.target_stop() {
            Some(stop) => {
                prop_assert_eq!(line.x1, row.geometry.x_at_percent(stop.offset_percent));
            }
            None => prop_assert_eq!(row.gradient.case, GradientCase::DegenerateGoalMet),
        }
    }

    #[test]
    fn layout_is_idempotent(
        rows in prop::collection::vec(row_strategy(), 0..12),
        width in 0.0f64..3_000.0,
        config in config_strategy()
    ) {
        let first = layout_scene(&rows, width, &config).expect("first");
        let second = layout_scene(&rows, width, &config).expect("second");
        prop_assert_eq!(&first, &second);
        first.validate().expect("valid scene");
    }
}
