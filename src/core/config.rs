use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Per-pass layout options.
///
/// Serializable so hosts can keep chart setup next to their dashboard
/// definitions. Missing fields take the documented defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Fixed width budget. When set, bars are fractions of this budget
    /// instead of being proportional to their values.
    #[serde(default)]
    pub hard_max_width: Option<f64>,
    #[serde(default = "default_width_scale_factor")]
    pub width_scale_factor: f64,
    #[serde(default)]
    pub show_marker: bool,
    #[serde(default)]
    pub show_target_heading: bool,
    #[serde(default)]
    pub time_formatting: bool,
    #[serde(default)]
    pub x_axis_heading: Option<String>,
    #[serde(default)]
    pub central_heading: Option<String>,
    #[serde(default)]
    pub target_heading_text: Option<String>,
    #[serde(default)]
    pub actual_value_heading: Option<String>,
    /// Achieved values above this compact rows on mid-sized widths.
    #[serde(default)]
    pub long_value_threshold: Option<f64>,
}

fn default_width_scale_factor() -> f64 {
    1.0
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hard_max_width: None,
            width_scale_factor: default_width_scale_factor(),
            show_marker: false,
            show_target_heading: false,
            time_formatting: false,
            x_axis_heading: None,
            central_heading: None,
            target_heading_text: None,
            actual_value_heading: None,
            long_value_threshold: None,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_hard_max_width(mut self, hard_max_width: Option<f64>) -> Self {
        self.hard_max_width = hard_max_width;
        self
    }

    #[must_use]
    pub fn with_width_scale_factor(mut self, factor: f64) -> Self {
        self.width_scale_factor = factor;
        self
    }

    #[must_use]
    pub fn with_marker(mut self, show_marker: bool) -> Self {
        self.show_marker = show_marker;
        self
    }

    #[must_use]
    pub fn with_target_heading(mut self, text: Option<String>) -> Self {
        self.show_target_heading = true;
        self.target_heading_text = text;
        self
    }

    #[must_use]
    pub fn with_time_formatting(mut self, time_formatting: bool) -> Self {
        self.time_formatting = time_formatting;
        self
    }

    #[must_use]
    pub fn with_x_axis_heading(mut self, text: impl Into<String>) -> Self {
        self.x_axis_heading = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_central_heading(mut self, text: impl Into<String>) -> Self {
        self.central_heading = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_actual_value_heading(mut self, text: impl Into<String>) -> Self {
        self.actual_value_heading = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_long_value_threshold(mut self, threshold: Option<f64>) -> Self {
        self.long_value_threshold = threshold;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if let Some(hard_max_width) = self.hard_max_width {
            if !hard_max_width.is_finite() || hard_max_width <= 0.0 {
                return Err(ChartError::InvalidConfig(
                    "hard_max_width must be finite and > 0".to_owned(),
                ));
            }
        }
        if !self.width_scale_factor.is_finite() || self.width_scale_factor <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "width_scale_factor must be finite and > 0".to_owned(),
            ));
        }
        if let Some(threshold) = self.long_value_threshold {
            if !threshold.is_finite() || threshold < 0.0 {
                return Err(ChartError::InvalidConfig(
                    "long_value_threshold must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(self)
    }

    /// True when an x-axis heading pushes the rows down.
    #[must_use]
    pub fn has_x_axis_heading(&self) -> bool {
        self.x_axis_heading
            .as_deref()
            .is_some_and(|text| !text.is_empty())
    }
}
