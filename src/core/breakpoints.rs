use serde::Serialize;
use tracing::trace;

use crate::core::primitives::ensure_drawing_width;
use crate::core::types::DataPoint;
use crate::error::ChartResult;

/// Widest drawing width that still compacts rows carrying long values.
pub const LONG_VALUE_COMPACTION_MAX_WIDTH: f64 = 1080.0;

/// Layout constants active for one discrete range of drawing widths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LayoutProfile {
    pub name: &'static str,
    pub min_width: f64,
    pub bar_offset_x: f64,
    pub row_height_reduced: bool,
    pub corner_radius: f64,
    /// Divides `hard_max_width` into the bar width.
    pub hard_max_divisor: f64,
    /// Divides data-driven bar widths.
    pub data_divisor: f64,
    pub target_label_inset: f64,
    pub target_heading_inset: f64,
    pub central_heading_x: f64,
    /// Headings share the row above the bars instead of stacking over them.
    pub inline_headings: bool,
}

impl LayoutProfile {
    #[must_use]
    pub fn row_band_height(&self) -> f64 {
        if self.row_height_reduced { 30.0 } else { 60.0 }
    }

    #[must_use]
    pub fn bar_height(&self) -> f64 {
        if self.row_height_reduced { 15.0 } else { 30.0 }
    }

    /// Marker reach above and below the bar centre.
    #[must_use]
    pub fn marker_reach(&self) -> (f64, f64) {
        if self.row_height_reduced {
            (15.0, 21.0)
        } else {
            (21.0, 21.0)
        }
    }

    /// Copy of this profile with compressed rows.
    #[must_use]
    pub fn compacted(self) -> Self {
        Self {
            row_height_reduced: true,
            corner_radius: REDUCED_CORNER_RADIUS,
            ..self
        }
    }
}

const FULL_CORNER_RADIUS: f64 = 15.0;
const REDUCED_CORNER_RADIUS: f64 = 8.0;

#[allow(clippy::too_many_arguments)]
const fn profile(
    name: &'static str,
    min_width: f64,
    bar_offset_x: f64,
    row_height_reduced: bool,
    hard_max_divisor: f64,
    data_divisor: f64,
    target_label_inset: f64,
    target_heading_inset: f64,
    central_heading_x: f64,
) -> LayoutProfile {
    LayoutProfile {
        name,
        min_width,
        bar_offset_x,
        row_height_reduced,
        corner_radius: if row_height_reduced {
            REDUCED_CORNER_RADIUS
        } else {
            FULL_CORNER_RADIUS
        },
        hard_max_divisor,
        data_divisor,
        target_label_inset,
        target_heading_inset,
        central_heading_x,
        inline_headings: !row_height_reduced,
    }
}

/// Breakpoint table ordered from widest to narrowest. The last entry starts at
/// zero so every non-negative width resolves.
pub const PROFILES: [LayoutProfile; 10] = [
    profile("ultra", 2000.0, 450.0, false, 1.0, 1.0, 300.0, 300.0, 440.0),
    profile("wide", 1750.0, 450.0, false, 1.0, 1.0, 40.0, 40.0, 440.0),
    profile("large", 1561.0, 250.0, false, 1.0, 1.0, 40.0, 40.0, 240.0),
    profile("desktop", 1171.0, 250.0, false, 2.0, 1.0, 40.0, 40.0, 240.0),
    profile("laptop", 1001.0, 150.0, false, 2.0, 1.0, 40.0, 40.0, 140.0),
    profile("tablet", 768.0, 70.0, true, 2.0, 1.0, 40.0, 40.0, 140.0),
    profile("compact", 641.0, 70.0, true, 2.0, 1.0, 40.0, 40.0, 35.0),
    profile("phablet", 481.0, 70.0, true, 2.0, 4.0, 40.0, 40.0, 35.0),
    profile("phone", 360.0, 70.0, true, 4.0, 4.0, 15.0, 30.0, 35.0),
    profile("narrow", 0.0, 0.0, true, 4.0, 4.0, 15.0, 30.0, 0.0),
];

/// Smallest profile, used when no threshold matches.
pub const DEFAULT_PROFILE: LayoutProfile = PROFILES[PROFILES.len() - 1];

/// Maps a drawing width to its layout profile.
///
/// Total over `[0, +inf)`: widths below every threshold fall back to
/// [`DEFAULT_PROFILE`].
pub fn resolve(width: f64) -> ChartResult<LayoutProfile> {
    let width = ensure_drawing_width(width)?;
    debug_assert!(
        DEFAULT_PROFILE.min_width == 0.0,
        "breakpoint table must end with a zero-width profile"
    );

    let profile = PROFILES
        .iter()
        .find(|profile| profile.min_width <= width)
        .copied()
        .unwrap_or(DEFAULT_PROFILE);
    trace!(width, profile = profile.name, "resolved layout profile");
    Ok(profile)
}

/// Resolves a profile, compacting rows when any value exceeds `long_value_threshold`
/// and the width is at most [`LONG_VALUE_COMPACTION_MAX_WIDTH`].
pub fn resolve_for_rows(
    width: f64,
    rows: &[DataPoint],
    long_value_threshold: Option<f64>,
) -> ChartResult<LayoutProfile> {
    let profile = resolve(width)?;
    let Some(threshold) = long_value_threshold else {
        return Ok(profile);
    };

    let has_long_value = rows.iter().any(|row| row.achieved > threshold);
    if has_long_value && width <= LONG_VALUE_COMPACTION_MAX_WIDTH && !profile.row_height_reduced {
        trace!(width, profile = profile.name, "compacting rows for long values");
        return Ok(profile.compacted());
    }
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_PROFILE, PROFILES, resolve, resolve_for_rows};
    use crate::core::DataPoint;

    #[test]
    fn table_is_sorted_widest_first() {
        for pair in PROFILES.windows(2) {
            assert!(pair[0].min_width > pair[1].min_width);
        }
    }

    #[test]
    fn thresholds_are_inclusive() {
        assert_eq!(resolve(1750.0).expect("1750").name, "wide");
        assert_eq!(resolve(1749.9).expect("1749.9").name, "large");
        assert_eq!(resolve(1001.0).expect("1001").name, "laptop");
        assert_eq!(resolve(1000.0).expect("1000").name, "tablet");
        assert_eq!(resolve(360.0).expect("360").name, "phone");
    }

    #[test]
    fn zero_width_falls_back_to_default() {
        assert_eq!(resolve(0.0).expect("zero"), DEFAULT_PROFILE);
        assert!(resolve(-1.0).is_err());
    }

    #[test]
    fn long_values_compact_mid_width_rows() {
        let rows = vec![DataPoint::new("sleep", 480.0, 420.0, "#0af")];
        let plain = resolve_for_rows(1050.0, &rows, None).expect("plain");
        assert!(!plain.row_height_reduced);

        let compacted = resolve_for_rows(1050.0, &rows, Some(420.0)).expect("compacted");
        assert!(compacted.row_height_reduced);
        assert_eq!(compacted.corner_radius, 8.0);
        assert_eq!(compacted.bar_offset_x, plain.bar_offset_x);

        let wide = resolve_for_rows(1200.0, &rows, Some(420.0)).expect("wide");
        assert!(!wide.row_height_reduced);
    }
}
