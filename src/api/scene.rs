use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BarGeometry, Gradient};
use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Horizontal anchoring of a label relative to its `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScene {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub color: String,
    pub anchor: TextAnchor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowScene {
    pub label: String,
    pub geometry: BarGeometry,
    pub gradient: Gradient,
    /// The bar outline spans the whole hard-max budget.
    pub outlined: bool,
    pub marker_line: Option<MarkerLine>,
    pub category_label: LabelScene,
    pub achieved_label: LabelScene,
    pub target_label: Option<LabelScene>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeadingKind {
    XAxis,
    Central,
    Target,
    ActualValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingScene {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Complete, renderer-agnostic output of one layout pass.
///
/// A new pass always builds a fresh model; nothing is patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneModel {
    pub width: f64,
    pub profile: String,
    pub rows: Vec<RowScene>,
    pub headings: IndexMap<HeadingKind, HeadingScene>,
}

impl SceneModel {
    /// Checks the geometric invariants every renderer relies on.
    pub fn validate(&self) -> ChartResult<()> {
        for row in &self.rows {
            let geometry = row.geometry;
            for (name, value) in [
                ("x", geometry.x),
                ("y", geometry.y),
                ("width", geometry.width),
                ("height", geometry.height),
                ("corner_radius_x", geometry.corner_radius_x),
                ("corner_radius_y", geometry.corner_radius_y),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ChartError::InvalidInput(format!(
                        "row `{}` bar {name} must be finite and >= 0",
                        row.label
                    )));
                }
            }

            let stops = &row.gradient.stops;
            let bounded = stops.first().is_some_and(|s| s.offset_percent == 0.0)
                && stops.last().is_some_and(|s| s.offset_percent == 100.0);
            let ordered = stops
                .windows(2)
                .all(|pair| pair[0].offset_percent <= pair[1].offset_percent);
            let finite = stops.iter().all(|s| s.requested_percent.is_finite());
            if !bounded || !ordered || !finite {
                return Err(ChartError::InvalidInput(format!(
                    "row `{}` gradient stops must be finite and run 0..=100 without going backwards",
                    row.label
                )));
            }

            if let Some(line) = row.marker_line {
                if ![line.x1, line.y1, line.x2, line.y2]
                    .iter()
                    .all(|value| value.is_finite())
                {
                    return Err(ChartError::InvalidInput(format!(
                        "row `{}` marker coordinates must be finite",
                        row.label
                    )));
                }
            }

            let labels = [
                Some(&row.category_label),
                Some(&row.achieved_label),
                row.target_label.as_ref(),
            ];
            for label in labels.into_iter().flatten() {
                if !label.x.is_finite() || !label.y.is_finite() {
                    return Err(ChartError::InvalidInput(format!(
                        "row `{}` label `{}` must sit at finite coordinates",
                        row.label, label.text
                    )));
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn heading(&self, kind: HeadingKind) -> Option<&HeadingScene> {
        self.headings.get(&kind)
    }

    /// Serializes the scene as pretty JSON for fixture-based regression checks.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::Serialization(format!("failed to serialize scene: {e}")))
    }
}
