use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::primitives::ratio_percent;
use crate::core::{DataPoint, LayoutConfig};
use crate::error::{ChartError, ChartResult};

/// Fill used for the overshoot band past the target.
pub const NEUTRAL_GRAY: &str = "rgb(218, 211, 211)";
pub const TRANSPARENT: &str = "transparent";
/// Distance between paired stops of different meaning, in percentage points.
pub const SEAM_PERCENT: f64 = 0.5;

/// One stop of a horizontal two-tone fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Effective offset: clamped to `[0, 100]` and never below the previous stop.
    pub offset_percent: f64,
    /// Offset as authored, before normalization. Seam stops sit 0.5 below
    /// their predecessor here.
    pub requested_percent: f64,
    pub color: String,
    pub transparent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GradientCase {
    /// Achieved value is above the target.
    Overshoot,
    /// Achieved value is at or below the target.
    AtOrBelowTarget,
    /// Overshoot with a zero target and no hard maximum: rendered as a full fill.
    DegenerateGoalMet,
}

pub type GradientStops = SmallVec<[GradientStop; 6]>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    pub case: GradientCase,
    pub stops: GradientStops,
}

impl Gradient {
    /// Stop that marks where the target falls inside an overshooting bar.
    #[must_use]
    pub fn target_stop(&self) -> Option<&GradientStop> {
        match self.case {
            GradientCase::Overshoot => self.stops.get(1),
            GradientCase::AtOrBelowTarget | GradientCase::DegenerateGoalMet => None,
        }
    }

    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.stops.iter().all(|stop| !stop.transparent)
            && self
                .stops
                .first()
                .is_some_and(|first| self.stops.iter().all(|stop| stop.color == first.color))
    }
}

/// Target position as a percentage of the bar, matching the gradient denominator.
#[must_use]
pub fn cutover_percent(row: &DataPoint, config: &LayoutConfig) -> f64 {
    let denominator = config.hard_max_width.unwrap_or_else(|| row.extent());
    ratio_percent(row.target, denominator).clamp(0.0, 100.0)
}

#[derive(Debug, Default)]
struct StopList {
    stops: GradientStops,
}

impl StopList {
    fn push(&mut self, requested_percent: f64, color: &str) -> ChartResult<()> {
        if !requested_percent.is_finite() {
            return Err(ChartError::InvalidInput(format!(
                "gradient stop offset overflows: {requested_percent}"
            )));
        }
        let floor = self.stops.last().map_or(0.0, |stop| stop.offset_percent);
        let offset_percent = requested_percent.clamp(0.0, 100.0).max(floor);
        self.stops.push(GradientStop {
            offset_percent,
            requested_percent,
            color: color.to_owned(),
            transparent: color == TRANSPARENT,
        });
        Ok(())
    }

    fn solid(color: &str) -> ChartResult<GradientStops> {
        let mut list = Self::default();
        list.push(0.0, color)?;
        list.push(100.0, color)?;
        Ok(list.stops)
    }
}

/// Builds the achieved-vs-target fill for one row.
///
/// Overshooting rows stay solid up to the target, then switch to a gray band
/// (with the marker) or transparency. Rows at or below target are cut off at
/// the achieved fraction of the hard maximum, or filled completely.
pub fn build_gradient(row: &DataPoint, color: &str, config: &LayoutConfig) -> ChartResult<Gradient> {
    row.validate()?;
    if color.trim().is_empty() {
        return Err(ChartError::InvalidInput(
            "gradient color must not be empty".to_owned(),
        ));
    }

    if row.exceeds_target() {
        if config.hard_max_width.is_none() && row.target == 0.0 {
            debug!(label = %row.label, "zero target without hard max, filling bar");
            return Ok(Gradient {
                case: GradientCase::DegenerateGoalMet,
                stops: StopList::solid(color)?,
            });
        }
        return Ok(Gradient {
            case: GradientCase::Overshoot,
            stops: overshoot_stops(row, color, config)?,
        });
    }

    let stops = match config.hard_max_width {
        Some(hard_max_width) if hard_max_width > row.achieved => {
            let achieved_percent = ratio_percent(row.achieved, hard_max_width);
            let mut list = StopList::default();
            list.push(0.0, color)?;
            list.push(achieved_percent, color)?;
            list.push(achieved_percent - SEAM_PERCENT, TRANSPARENT)?;
            list.push(100.0, TRANSPARENT)?;
            list.stops
        }
        _ => StopList::solid(color)?,
    };
    Ok(Gradient {
        case: GradientCase::AtOrBelowTarget,
        stops,
    })
}

fn overshoot_stops(
    row: &DataPoint,
    color: &str,
    config: &LayoutConfig,
) -> ChartResult<GradientStops> {
    let denominator = config.hard_max_width.unwrap_or(row.achieved);
    let target_percent = ratio_percent(row.target, denominator);
    let achieved_percent = ratio_percent(row.achieved, denominator);

    let mut list = StopList::default();
    list.push(0.0, color)?;
    list.push(target_percent, color)?;
    if config.show_marker {
        list.push(target_percent - SEAM_PERCENT, NEUTRAL_GRAY)?;
        list.push(achieved_percent, NEUTRAL_GRAY)?;
        list.push(achieved_percent - SEAM_PERCENT, TRANSPARENT)?;
    } else {
        list.push(target_percent - SEAM_PERCENT, TRANSPARENT)?;
    }
    let closing = if config.hard_max_width.is_some() {
        TRANSPARENT
    } else {
        NEUTRAL_GRAY
    };
    list.push(100.0, closing)?;
    Ok(list.stops)
}
