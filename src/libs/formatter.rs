//! Minute-value formatting for display.
//!
//! Parsed timesheets carry every time as an integer number of minutes. This
//! module turns them into the `HH:MM` strings used by tables and exports.
//!
//! ## Format Specifications
//!
//! - Hours are zero-padded to at least 2 digits
//! - Minutes are zero-padded to exactly 2 digits
//! - [`format_minutes`] drops the sign: a negative task duration is shown by
//!   its magnitude, the diagnostic list is where the anomaly is reported
//! - [`format_difference`] keeps the sign for target comparisons
//!
//! ## Examples
//!
//! ```rust
//! use tally::libs::formatter::{format_difference, format_minutes};
//!
//! assert_eq!(format_minutes(90), "01:30");
//! assert_eq!(format_minutes(-1320), "22:00");
//! assert_eq!(format_difference(-15), "-00:15");
//! ```

use crate::libs::task::Task;
use crate::libs::timesheet::time::format_time;
use serde::{Deserialize, Serialize};

/// A task with every field pre-rendered for tables and CSV rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedTask {
    pub line: usize,
    pub section: String,
    pub date: String,
    pub start: String,
    pub end: String,
    pub duration: String,
    pub category: String,
    pub description: String,
}

impl From<&Task> for FormattedTask {
    fn from(task: &Task) -> Self {
        FormattedTask {
            line: task.line,
            section: task.section.clone().unwrap_or_default(),
            date: task.date.clone().unwrap_or_default(),
            start: format_time(task.start_minute),
            end: format_time(task.end_minute),
            duration: format_minutes(task.total_minutes),
            category: task.path_label.clone().unwrap_or_default(),
            description: task.description.clone().unwrap_or_default(),
        }
    }
}

/// Renders a minute count as `HH:MM` using its absolute value.
pub fn format_minutes(minutes: i32) -> String {
    let minutes = minutes.unsigned_abs();
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Renders a signed difference, e.g. `+01:00` or `-00:15`.
pub fn format_difference(minutes: i32) -> String {
    let sign = if minutes < 0 { '-' } else { '+' };
    format!("{}{}", sign, format_minutes(minutes))
}

/// Renders an optional target, `-` when absent.
pub fn format_expected(minutes: Option<i32>) -> String {
    minutes.map(format_minutes).unwrap_or_else(|| "-".to_string())
}
