//! # Tally - Timesheet log parser
//!
//! Parses plain-text timesheet logs into sections, dates and tasks, and
//! reports the anomalies it finds along the way.
//!
//! ## Features
//!
//! - **Parsing**: Section headers with optional targets, date markers, task lines
//! - **Validation**: Negative durations, duplicate sections/dates, overlapping tasks
//! - **Reporting**: Section totals against their targets, per-date totals
//! - **Data Export**: Tasks and totals to CSV and JSON
//!
//! ## Usage
//!
//! ```rust
//! use tally::libs::timesheet::parse;
//!
//! let parsed = parse("=== Work (8:30) ===\n-- 2024-01-05\n09:00 - 17:30 [office] regular day\n").unwrap();
//! let work = parsed.document.sections.get("Work").unwrap();
//! assert_eq!(work.expected_minutes, Some(510));
//! assert_eq!(work.total_minutes(), 510);
//! ```

pub mod commands;
pub mod libs;
