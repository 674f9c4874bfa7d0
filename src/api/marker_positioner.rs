use crate::core::{BarGeometry, DataPoint, Gradient, LayoutConfig, LayoutProfile, cutover_percent};

use super::label_format::label_text;
use super::scene::{LabelScene, MarkerLine, TextAnchor};

/// Gap between the bar's trailing edge and the achieved label.
pub const ACHIEVED_LABEL_GAP_PX: f64 = 10.0;
/// Gap between a category label and the bar origin.
pub const CATEGORY_LABEL_GAP_PX: f64 = 10.0;
/// Text baseline offset below the row centre.
pub const LABEL_BASELINE_OFFSET_PX: f64 = 5.0;
pub const TARGET_LABEL_COLOR: &str = "black";

#[derive(Debug, Clone, PartialEq)]
pub struct LabelPositions {
    pub category: LabelScene,
    pub achieved: LabelScene,
    pub target: Option<LabelScene>,
}

/// Vertical target marker for one bar, or `None` when markers are off.
///
/// The x coordinate comes from the gradient's target stop when the row
/// overshoots, so the line sits exactly on the color cutover.
#[must_use]
pub fn position_marker(
    row: &DataPoint,
    geometry: &BarGeometry,
    gradient: &Gradient,
    profile: &LayoutProfile,
    config: &LayoutConfig,
) -> Option<MarkerLine> {
    if !config.show_marker {
        return None;
    }

    let percent = gradient
        .target_stop()
        .map_or_else(|| cutover_percent(row, config), |stop| stop.offset_percent);
    let x = geometry.x_at_percent(percent);
    let center_y = geometry.center_y();
    let (above, below) = profile.marker_reach();
    Some(MarkerLine {
        x1: x,
        y1: center_y - above,
        x2: x,
        y2: center_y + below,
    })
}

/// Anchors for the category, achieved and target labels of one row.
#[must_use]
pub fn position_labels(
    row: &DataPoint,
    geometry: &BarGeometry,
    profile: &LayoutProfile,
    config: &LayoutConfig,
    width: f64,
) -> LabelPositions {
    let baseline = geometry.center_y() + LABEL_BASELINE_OFFSET_PX;

    let category = LabelScene {
        text: row.label.clone(),
        x: (geometry.x - CATEGORY_LABEL_GAP_PX).max(0.0),
        y: baseline,
        color: TARGET_LABEL_COLOR.to_owned(),
        anchor: TextAnchor::End,
    };
    let achieved = LabelScene {
        text: label_text(row.achieved, config.time_formatting),
        x: geometry.trailing_x() + ACHIEVED_LABEL_GAP_PX,
        y: baseline,
        color: row.color.clone(),
        anchor: TextAnchor::Start,
    };
    let target = config.show_target_heading.then(|| LabelScene {
        text: label_text(row.target, config.time_formatting),
        x: width - profile.target_label_inset,
        y: baseline,
        color: TARGET_LABEL_COLOR.to_owned(),
        anchor: TextAnchor::Start,
    });

    LabelPositions {
        category,
        achieved,
        target,
    }
}
