use serde::{Deserialize, Serialize};

use crate::core::{DataPoint, LayoutConfig, LayoutProfile};
use crate::error::{ChartError, ChartResult};

/// Space above the first row.
pub const TOP_MARGIN_PX: f64 = 30.0;
/// Extra shift applied to every row when an x-axis heading is shown.
pub const X_AXIS_HEADING_SHIFT_PX: f64 = 30.0;

/// Rounded bar rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius_x: f64,
    pub corner_radius_y: f64,
}

impl BarGeometry {
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.y + self.height * 0.5
    }

    #[must_use]
    pub fn trailing_x(&self) -> f64 {
        self.x + self.width
    }

    /// Pixel x of a gradient offset expressed in percent of the bar width.
    #[must_use]
    pub fn x_at_percent(&self, percent: f64) -> f64 {
        self.x + self.width * (percent / 100.0)
    }
}

/// Vertical centre of the row band at `row_index`.
#[must_use]
pub fn row_center_y(row_index: usize, profile: &LayoutProfile, config: &LayoutConfig) -> f64 {
    let shift = if config.has_x_axis_heading() {
        X_AXIS_HEADING_SHIFT_PX
    } else {
        0.0
    };
    TOP_MARGIN_PX + shift + (row_index as f64 + 0.5) * profile.row_band_height()
}

/// Horizontal bar length before it is placed on the row.
#[must_use]
pub fn bar_width(row: &DataPoint, profile: &LayoutProfile, config: &LayoutConfig) -> f64 {
    match config.hard_max_width {
        Some(hard_max_width) => hard_max_width / profile.hard_max_divisor,
        None => row.extent() * config.width_scale_factor / profile.data_divisor,
    }
}

/// Computes the bar rectangle for one row.
///
/// Rows with neither an achieved nor a target value and no hard maximum
/// produce a zero-width bar. Widths that overflow to infinity are rejected.
pub fn map_bar(
    row: &DataPoint,
    row_index: usize,
    profile: &LayoutProfile,
    config: &LayoutConfig,
) -> ChartResult<BarGeometry> {
    row.validate()?;

    let height = profile.bar_height();
    let center_y = row_center_y(row_index, profile, config);
    let bar = BarGeometry {
        x: profile.bar_offset_x,
        y: center_y - height * 0.5,
        width: bar_width(row, profile, config).max(0.0),
        height,
        corner_radius_x: profile.corner_radius,
        corner_radius_y: profile.corner_radius,
    };
    if !bar.trailing_x().is_finite() {
        return Err(ChartError::InvalidInput(format!(
            "row `{}` bar width overflows",
            row.label
        )));
    }
    Ok(bar)
}
