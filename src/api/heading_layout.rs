use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::{LayoutConfig, LayoutProfile};

use super::scene::{HeadingKind, HeadingScene, RowScene};

const X_AXIS_HEADING_WIDE_MIN_WIDTH: f64 = 1750.0;
const ACTUAL_HEADING_NUDGE_PX: f64 = 5.0;

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|text| !text.is_empty())
}

/// Baseline shared by the target and actual-value headings.
fn value_heading_y(profile: &LayoutProfile, has_x_axis_heading: bool) -> f64 {
    match (profile.inline_headings, has_x_axis_heading) {
        (true, true) => 37.0,
        (true, false) => 7.0,
        (false, true) => 60.0,
        (false, false) => 30.0,
    }
}

/// Places the chart-level headings that have text.
///
/// The actual-value heading tracks the rightmost achieved label so it sits
/// over the value column.
#[must_use]
pub fn layout_headings(
    rows: &[RowScene],
    profile: &LayoutProfile,
    config: &LayoutConfig,
    width: f64,
) -> IndexMap<HeadingKind, HeadingScene> {
    let has_x_axis_heading = config.has_x_axis_heading();
    let mut headings = IndexMap::new();

    if let Some(text) = non_empty(config.x_axis_heading.as_deref()) {
        let x = if profile.min_width >= X_AXIS_HEADING_WIDE_MIN_WIDTH {
            218.0
        } else {
            3.0
        };
        let y = if profile.inline_headings { 37.0 } else { 30.0 };
        headings.insert(
            HeadingKind::XAxis,
            HeadingScene {
                text: text.to_owned(),
                x,
                y,
            },
        );
    }

    if let Some(text) = non_empty(config.central_heading.as_deref()) {
        let y = match (profile.inline_headings, has_x_axis_heading) {
            (true, true) => 60.0,
            (true, false) => 30.0,
            (false, _) => 0.0,
        };
        headings.insert(
            HeadingKind::Central,
            HeadingScene {
                text: text.to_owned(),
                x: profile.central_heading_x,
                y,
            },
        );
    }

    let value_y = value_heading_y(profile, has_x_axis_heading);
    if config.show_target_heading {
        if let Some(text) = non_empty(config.target_heading_text.as_deref()) {
            headings.insert(
                HeadingKind::Target,
                HeadingScene {
                    text: text.to_owned(),
                    x: width - profile.target_heading_inset,
                    y: value_y,
                },
            );
        }
    }

    if let Some(text) = non_empty(config.actual_value_heading.as_deref()) {
        let column_x = rows
            .iter()
            .map(|row| OrderedFloat(row.achieved_label.x))
            .max()
            .map_or(profile.bar_offset_x, |x| x.into_inner());
        headings.insert(
            HeadingKind::ActualValue,
            HeadingScene {
                text: text.to_owned(),
                x: column_x - ACTUAL_HEADING_NUDGE_PX,
                y: value_y,
            },
        );
    }

    headings
}

#[cfg(test)]
mod tests {
    use super::layout_headings;
    use crate::api::scene::HeadingKind;
    use crate::core::{LayoutConfig, resolve};

    #[test]
    fn headings_without_text_are_skipped() {
        let profile = resolve(1800.0).expect("profile");
        let config = LayoutConfig::default()
            .with_central_heading("")
            .with_target_heading(None);
        assert!(layout_headings(&[], &profile, &config, 1800.0).is_empty());
    }

    #[test]
    fn wide_headings_share_the_top_row() {
        let profile = resolve(1800.0).expect("profile");
        let config = LayoutConfig::default()
            .with_x_axis_heading("Activity")
            .with_central_heading("Today")
            .with_target_heading(Some("Goal".to_owned()));
        let headings = layout_headings(&[], &profile, &config, 1800.0);

        let order: Vec<HeadingKind> = headings.keys().copied().collect();
        assert_eq!(
            order,
            vec![HeadingKind::XAxis, HeadingKind::Central, HeadingKind::Target]
        );
        assert_eq!(headings[&HeadingKind::XAxis].x, 218.0);
        assert_eq!(headings[&HeadingKind::Central].y, 60.0);
        assert_eq!(headings[&HeadingKind::Target].x, 1760.0);
        assert_eq!(headings[&HeadingKind::Target].y, 37.0);
    }

    #[test]
    fn narrow_headings_stack_above_rows() {
        let profile = resolve(400.0).expect("profile");
        let config = LayoutConfig::default()
            .with_central_heading("Today")
            .with_target_heading(Some("Goal".to_owned()));
        let headings = layout_headings(&[], &profile, &config, 400.0);

        assert_eq!(headings[&HeadingKind::Central].x, 35.0);
        assert_eq!(headings[&HeadingKind::Central].y, 0.0);
        assert_eq!(headings[&HeadingKind::Target].x, 370.0);
        assert_eq!(headings[&HeadingKind::Target].y, 30.0);
    }
}
