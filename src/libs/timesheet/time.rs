//! Conversion between `H:MM` clock text and minutes-of-day.
//!
//! Every line parser goes through this codec. Hours may have any number of
//! digits because section targets (`=== Work (40:00) ===`) are durations, not
//! clock readings. Minutes take one or two digits. Values are not range
//! checked: `25:00` is simply 1500 minutes.

use thiserror::Error;

/// Error returned when a time value does not have the `H:MM` shape.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("invalid time `{0}`, expected H:MM")]
    Invalid(String),
    #[error("time `{0}` is too large")]
    Overflow(String),
}

/// Parses `H:MM` text into a number of minutes.
///
/// # Examples
///
/// ```rust
/// use tally::libs::timesheet::time::parse_time;
///
/// assert_eq!(parse_time("08:15").unwrap(), 495);
/// assert_eq!(parse_time("8:30").unwrap(), 510);
/// ```
pub fn parse_time(value: &str) -> Result<i32, TimeError> {
    let invalid = || TimeError::Invalid(value.to_string());

    let (hours, minutes) = value.split_once(':').ok_or_else(invalid)?;
    if !is_digits(hours) || !is_digits(minutes) || minutes.len() > 2 {
        return Err(invalid());
    }

    let hours: i32 = hours.parse().map_err(|_| TimeError::Overflow(value.to_string()))?;
    let minutes: i32 = minutes.parse().map_err(|_| invalid())?;

    hours
        .checked_mul(60)
        .and_then(|total| total.checked_add(minutes))
        .ok_or_else(|| TimeError::Overflow(value.to_string()))
}

/// Renders minutes as zero-padded `HH:MM`.
///
/// Inverse of [`parse_time`] for canonical input. Negative values keep their
/// sign (`-01:30`); use [`crate::libs::formatter::format_minutes`] for the
/// sign-dropping display form.
pub fn format_time(minutes: i32) -> String {
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.unsigned_abs();
    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}
