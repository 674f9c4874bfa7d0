use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Rejects negative, NaN and infinite values.
pub fn ensure_non_negative(value: f64, field_name: &str) -> ChartResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ChartError::InvalidInput(format!(
            "{field_name} must be finite and >= 0"
        )));
    }
    Ok(value)
}

pub fn ensure_drawing_width(width: f64) -> ChartResult<f64> {
    if !width.is_finite() || width < 0.0 {
        return Err(ChartError::InvalidWidth { width });
    }
    Ok(width)
}

/// Percentage of `value` over `denominator`; zero when the denominator is empty.
#[must_use]
pub fn ratio_percent(value: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        value / denominator * 100.0
    }
}
