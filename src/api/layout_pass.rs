use tracing::debug;

use crate::core::primitives::ensure_drawing_width;
use crate::core::{DataPoint, LayoutConfig, build_gradient, map_bar, resolve_for_rows};
use crate::error::ChartResult;

use super::heading_layout::layout_headings;
use super::marker_positioner::{position_labels, position_marker};
use super::scene::{RowScene, SceneModel};

/// Runs one complete layout pass.
///
/// Inputs are validated up front and the finished scene is checked before it
/// is returned; the result depends only on `(rows, width, config)`.
pub fn layout_scene(
    rows: &[DataPoint],
    width: f64,
    config: &LayoutConfig,
) -> ChartResult<SceneModel> {
    let width = ensure_drawing_width(width)?;
    let config = config.clone().validate()?;
    for row in rows {
        row.validate()?;
    }

    let profile = resolve_for_rows(width, rows, config.long_value_threshold)?;
    let mut scene_rows = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let geometry = map_bar(row, index, &profile, &config)?;
        let gradient = build_gradient(row, &row.color, &config)?;
        let marker_line = position_marker(row, &geometry, &gradient, &profile, &config);
        let labels = position_labels(row, &geometry, &profile, &config, width);

        scene_rows.push(RowScene {
            label: row.label.clone(),
            geometry,
            gradient,
            outlined: config.hard_max_width.is_some(),
            marker_line,
            category_label: labels.category,
            achieved_label: labels.achieved,
            target_label: labels.target,
        });
    }

    let headings = layout_headings(&scene_rows, &profile, &config, width);
    debug!(
        width,
        profile = profile.name,
        rows = scene_rows.len(),
        headings = headings.len(),
        "layout pass complete"
    );

    let scene = SceneModel {
        width,
        profile: profile.name.to_owned(),
        rows: scene_rows,
        headings,
    };
    scene.validate()?;
    Ok(scene)
}
