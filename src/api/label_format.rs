use chrono::TimeDelta;

/// Plain numeric label text. Whole numbers print without a fraction.
#[must_use]
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// Formats a minute count as `"H h M m"`.
///
/// The value is rounded to whole minutes first, so 119.6 reads `"2 h 0 m"`.
/// Hours are omitted when zero; zero and negative values read `"0 m"`.
#[must_use]
pub fn format_minutes(minutes: f64) -> String {
    if !minutes.is_finite() || minutes <= 0.0 {
        return "0 m".to_owned();
    }

    let Some(duration) = TimeDelta::try_minutes(minutes.round() as i64) else {
        return format_value(minutes);
    };
    let hours = duration.num_hours();
    let remainder = duration.num_minutes() - hours * 60;
    if hours > 0 {
        format!("{hours} h {remainder} m")
    } else {
        format!("{remainder} m")
    }
}

#[must_use]
pub fn label_text(value: f64, time_formatting: bool) -> String {
    if time_formatting {
        format_minutes(value)
    } else {
        format_value(value)
    }
}
