use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, ensure_non_negative};
use crate::error::{ChartError, ChartResult};

/// One achieved-vs-target row of a marker chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub achieved: f64,
    pub target: f64,
    pub color: String,
}

impl DataPoint {
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        achieved: f64,
        target: f64,
        color: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            achieved,
            target,
            color: color.into(),
        }
    }

    pub fn from_decimal(
        label: impl Into<String>,
        achieved: Decimal,
        target: Decimal,
        color: impl Into<String>,
    ) -> ChartResult<Self> {
        let point = Self::new(
            label,
            decimal_to_f64(achieved, "achieved")?,
            decimal_to_f64(target, "target")?,
            color,
        );
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> ChartResult<()> {
        ensure_non_negative(self.achieved, "achieved")?;
        ensure_non_negative(self.target, "target")?;
        if self.color.trim().is_empty() {
            return Err(ChartError::InvalidInput(format!(
                "row `{}` must have a fill color",
                self.label
            )));
        }
        Ok(())
    }

    /// Whether the row overshoots its goal.
    #[must_use]
    pub fn exceeds_target(&self) -> bool {
        self.achieved > self.target
    }

    #[must_use]
    pub fn extent(&self) -> f64 {
        self.achieved.max(self.target)
    }
}
