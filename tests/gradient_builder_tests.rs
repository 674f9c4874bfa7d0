use approx::assert_relative_eq;
use marker_chart_rs::core::gradient::{NEUTRAL_GRAY, TRANSPARENT};
use marker_chart_rs::core::{DataPoint, GradientCase, LayoutConfig, build_gradient};

#[test]
fn overshoot_with_marker_draws_gray_band_past_target() {
    let row = DataPoint::new("cardio", 450.0, 300.0, "#111");
    let config = LayoutConfig::default()
        .with_width_scale_factor(1.0)
        .with_marker(true);
    let gradient = build_gradient(&row, &row.color, &config).expect("gradient");

    assert_eq!(gradient.case, GradientCase::Overshoot);
    let stops = &gradient.stops;
    assert_eq!(stops.len(), 6);

    assert_eq!(stops[0].requested_percent, 0.0);
    assert_eq!(stops[0].color, "#111");
    assert!(!stops[0].transparent);

    assert_relative_eq!(stops[1].requested_percent, 66.666_666, epsilon = 1e-4);
    assert_eq!(stops[1].color, "#111");

    assert_relative_eq!(stops[2].requested_percent, 66.166_666, epsilon = 1e-4);
    assert_eq!(stops[2].color, NEUTRAL_GRAY);

    assert_eq!(stops[3].requested_percent, 100.0);
    assert_eq!(stops[3].color, NEUTRAL_GRAY);

    assert_eq!(stops[4].requested_percent, 99.5);
    assert!(stops[4].transparent);

    assert_eq!(stops[5].requested_percent, 100.0);
    assert_eq!(stops[5].color, NEUTRAL_GRAY);
}

#[test]
fn seam_stops_never_move_effective_offsets_backwards() {
    let row = DataPoint::new("cardio", 450.0, 300.0, "#111");
    let config = LayoutConfig::default().with_marker(true);
    let gradient = build_gradient(&row, &row.color, &config).expect("gradient");

    let offsets: Vec<f64> = gradient.stops.iter().map(|s| s.offset_percent).collect();
    assert_eq!(offsets[0], 0.0);
    assert_eq!(offsets[1], offsets[2]);
    assert_eq!(offsets[3], 100.0);
    assert_eq!(offsets[4], 100.0);
    assert_eq!(offsets[5], 100.0);
}

#[test]
fn under_target_with_hard_max_cuts_at_achieved_fraction() {
    let row = DataPoint::new("steps", 200.0, 400.0, "#0af");
    let config = LayoutConfig::default().with_hard_max_width(Some(500.0));
    let gradient = build_gradient(&row, &row.color, &config).expect("gradient");

    assert_eq!(gradient.case, GradientCase::AtOrBelowTarget);
    let stops = &gradient.stops;
    assert_eq!(stops.len(), 4);
    assert_eq!(stops[0].offset_percent, 0.0);
    assert_eq!(stops[1].offset_percent, 40.0);
    assert_eq!(stops[1].color, "#0af");
    assert_eq!(stops[2].requested_percent, 39.5);
    assert_eq!(stops[2].offset_percent, 40.0);
    assert!(stops[2].transparent);
    assert_eq!(stops[3].offset_percent, 100.0);
    assert_eq!(stops[3].color, TRANSPARENT);
}

#[test]
fn empty_row_is_a_degenerate_full_fill() {
    let row = DataPoint::new("empty", 0.0, 0.0, "#0af");
    let gradient = build_gradient(&row, &row.color, &LayoutConfig::default()).expect("gradient");

    assert_eq!(gradient.case, GradientCase::AtOrBelowTarget);
    assert!(gradient.is_solid());
    assert_eq!(gradient.stops.len(), 2);
}

#[test]
fn under_target_without_hard_max_is_solid() {
    let row = DataPoint::new("steps", 10.0, 400.0, "#0af");
    let config = LayoutConfig::default().with_marker(true);
    let gradient = build_gradient(&row, "#123456", &config).expect("gradient");

    assert!(gradient.is_solid());
    assert!(gradient.stops.iter().all(|s| s.color == "#123456"));
}

#[test]
fn overshoot_with_hard_max_closes_transparent() {
    let row = DataPoint::new("steps", 300.0, 100.0, "#0af");
    let config = LayoutConfig::default()
        .with_hard_max_width(Some(400.0))
        .with_marker(true);
    let gradient = build_gradient(&row, &row.color, &config).expect("gradient");

    let requested: Vec<f64> = gradient.stops.iter().map(|s| s.requested_percent).collect();
    assert_eq!(requested, vec![0.0, 25.0, 24.5, 75.0, 74.5, 100.0]);
    let last = gradient.stops.last().expect("closing stop");
    assert!(last.transparent);
}

#[test]
fn negative_values_are_rejected_before_building() {
    let row = DataPoint::new("steps", -1.0, 100.0, "#0af");
    assert!(build_gradient(&row, &row.color, &LayoutConfig::default()).is_err());
}
