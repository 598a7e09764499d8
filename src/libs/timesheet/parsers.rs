//! Extractors for the three record-bearing line kinds.
//!
//! Each parser either produces a typed record or a [`ParseError`] naming the
//! line; none of them panics on a failed match.

use super::diagnostic::ParseError;
use super::line::{Line, LineKind};
use super::time::parse_time;
use crate::libs::task::Task;
use chrono::{Duration, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_WITH_EXPECTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^===\s?(?P<name>.+)\s\((?P<expected>[0-9]+:[0-9]{1,2})\)\s?===$").unwrap());
static SECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"^===\s?(?P<name>.+)===$").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^--\s?(?P<date>[0-9]{2,4}-[0-9]{2}-[0-9]{2})").unwrap());
static TASK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<start>[0-9]{2}:[0-9]{2})\s?-\s?(?P<end>[0-9]{2}:[0-9]{2})\s?(?:->|\|)?\s?(?:\[(?P<path>.+)\])?\s?(?P<description>.+)?").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub name: String,
    pub expected_minutes: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Section(SectionHeader),
    /// A section header that failed to parse and was skipped in recover
    /// mode. Closes the current section.
    BrokenSection,
    Date(String),
    Task(Task),
}

/// A parsed record together with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub number: usize,
    pub record: Record,
}

/// Parses `=== <name> ===` or `=== <name> (<H>:<MM>) ===`.
///
/// A target that does not fit in minutes leaves the header to the plain
/// form, so it ends up in the name.
pub fn parse_section(line: &Line) -> Result<SectionHeader, ParseError> {
    let malformed = || ParseError::MalformedSectionHeader {
        line: line.number,
        content: line.content.to_string(),
    };

    let with_expected = SECTION_WITH_EXPECTED
        .captures(line.content)
        .and_then(|captures| Some((captures["name"].trim().to_string(), parse_time(&captures["expected"]).ok()?)));
    if let Some((name, expected)) = with_expected {
        return Ok(SectionHeader {
            name,
            expected_minutes: Some(expected),
        });
    }

    let captures = SECTION.captures(line.content).ok_or_else(malformed)?;
    Ok(SectionHeader {
        name: captures["name"].trim().to_string(),
        expected_minutes: None,
    })
}

/// Parses `-- <date>` into a canonical `YYYY-MM-DD` key.
pub fn parse_date(line: &Line) -> Result<String, ParseError> {
    let malformed = || ParseError::MalformedDateLine {
        line: line.number,
        content: line.content.to_string(),
    };

    let captures = DATE.captures(line.content).ok_or_else(malformed)?;
    normalize_date(&captures["date"]).ok_or_else(malformed)
}

/// Normalizes a loose `Y-MM-DD` date through the calendar.
///
/// A two-digit year is read as 20YY. Months and days outside their range
/// roll over: `2024-02-30` is `2024-03-01`, `2024-13-01` is `2025-01-01`
/// and `2024-00-10` is `2023-12-10`.
pub fn normalize_date(raw: &str) -> Option<String> {
    let mut parts = raw.splitn(3, '-');
    let year_text = parts.next()?;
    let year: i32 = year_text.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: i64 = parts.next()?.parse().ok()?;

    let year = if year_text.len() == 2 { 2000 + year } else { year };
    let first_of_year = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let first_of_month = match month {
        0 => first_of_year.checked_sub_months(Months::new(1))?,
        month => first_of_year.checked_add_months(Months::new(month - 1))?,
    };
    let date = first_of_month.checked_add_signed(Duration::days(day - 1))?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Parses `HH:MM - HH:MM [-> | |] [[category]] [description]`.
///
/// The task is returned unstamped; the assembler fills in section and date.
pub fn parse_task(line: &Line) -> Result<Task, ParseError> {
    let malformed = || ParseError::MalformedTaskLine {
        line: line.number,
        content: line.content.to_string(),
    };

    let captures = TASK.captures(line.content).ok_or_else(malformed)?;
    let start = parse_time(&captures["start"]).map_err(|_| malformed())?;
    let end = parse_time(&captures["end"]).map_err(|_| malformed())?;

    let path_label = captures.name("path").map(|m| m.as_str().to_string());
    let description = captures
        .name("description")
        .map(|m| m.as_str().trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Ok(Task::new(line.number, start, end, path_label, description))
}

/// Dispatches a classified line to its parser.
pub fn parse_line(line: &Line) -> Result<Record, ParseError> {
    match line.kind {
        LineKind::Section => parse_section(line).map(Record::Section),
        LineKind::DateMarker => parse_date(line).map(Record::Date),
        LineKind::Task => parse_task(line).map(Record::Task),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(kind: LineKind, content: &str) -> Line<'_> {
        Line { number: 1, content, kind }
    }

    #[test]
    fn test_section_with_expected_time() {
        let header = parse_section(&line(LineKind::Section, "=== Work (8:30) ===")).unwrap();
        assert_eq!(header.name, "Work");
        assert_eq!(header.expected_minutes, Some(510));
    }

    #[test]
    fn test_section_without_expected_time() {
        let header = parse_section(&line(LineKind::Section, "=== Break ===")).unwrap();
        assert_eq!(header.name, "Break");
        assert_eq!(header.expected_minutes, None);

        let header = parse_section(&line(LineKind::Section, "===Client X===")).unwrap();
        assert_eq!(header.name, "Client X");
    }

    #[test]
    fn test_oversized_target_falls_back_to_plain_header() {
        let header = parse_section(&line(LineKind::Section, "=== Week (99999999999:00) ===")).unwrap();
        assert_eq!(header.name, "Week (99999999999:00)");
        assert_eq!(header.expected_minutes, None);
    }

    #[test]
    fn test_non_ascii_digits_are_not_a_target() {
        let header = parse_section(&line(LineKind::Section, "=== Work (٨:٣٠) ===")).unwrap();
        assert_eq!(header.name, "Work (٨:٣٠)");
        assert_eq!(header.expected_minutes, None);
        assert!(parse_date(&line(LineKind::DateMarker, "-- ٢٠٢٤-01-05")).is_err());
        assert!(parse_task(&line(LineKind::Task, "٠٩:00 - 10:00 work")).is_err());
    }

    #[test]
    fn test_malformed_section() {
        let error = parse_section(&line(LineKind::Section, "=== Work")).unwrap_err();
        assert!(matches!(error, ParseError::MalformedSectionHeader { line: 1, .. }));
    }

    #[test]
    fn test_date_is_normalized() {
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2024-01-05")).unwrap(), "2024-01-05");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "--2024-01-05 friday")).unwrap(), "2024-01-05");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 24-01-05")).unwrap(), "2024-01-05");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 999-12-31")).unwrap(), "0999-12-31");
    }

    #[test]
    fn test_out_of_range_date_rolls_over() {
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2024-02-30")).unwrap(), "2024-03-01");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2023-02-29")).unwrap(), "2023-03-01");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2024-13-01")).unwrap(), "2025-01-01");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2024-00-10")).unwrap(), "2023-12-10");
        assert_eq!(parse_date(&line(LineKind::DateMarker, "-- 2024-03-00")).unwrap(), "2024-02-29");
    }

    #[test]
    fn test_malformed_date() {
        let error = parse_date(&line(LineKind::DateMarker, "-- yesterday")).unwrap_err();
        assert!(matches!(error, ParseError::MalformedDateLine { line: 1, .. }));
        assert!(parse_date(&line(LineKind::DateMarker, "-- 2024-1-5")).is_err());
    }

    #[test]
    fn test_task_with_category_and_description() {
        let task = parse_task(&line(LineKind::Task, "09:00 - 10:30 [proj] did work")).unwrap();
        assert_eq!(task.start_minute, 540);
        assert_eq!(task.end_minute, 630);
        assert_eq!(task.total_minutes, 90);
        assert_eq!(task.path_label.as_deref(), Some("proj"));
        assert_eq!(task.description.as_deref(), Some("did work"));
        assert_eq!(task.section, None);
        assert_eq!(task.date, None);
    }

    #[test]
    fn test_task_separators() {
        let task = parse_task(&line(LineKind::Task, "09:00-10:00 -> standup")).unwrap();
        assert_eq!(task.description.as_deref(), Some("standup"));
        assert_eq!(task.path_label, None);

        let task = parse_task(&line(LineKind::Task, "09:00 - 10:00 | [ops/infra] deploy")).unwrap();
        assert_eq!(task.path_label.as_deref(), Some("ops/infra"));
        assert_eq!(task.description.as_deref(), Some("deploy"));
    }

    #[test]
    fn test_task_without_optional_fields() {
        let task = parse_task(&line(LineKind::Task, "13:00 - 13:45")).unwrap();
        assert_eq!(task.total_minutes, 45);
        assert_eq!(task.path_label, None);
        assert_eq!(task.description, None);
    }

    #[test]
    fn test_task_across_midnight_is_negative() {
        match parse_line(&line(LineKind::Task, "23:00 - 01:00 night shift")).unwrap() {
            Record::Task(task) => assert_eq!(task.total_minutes, -1320),
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_malformed_task() {
        let error = parse_task(&line(LineKind::Task, "lunch with team")).unwrap_err();
        assert!(matches!(error, ParseError::MalformedTaskLine { .. }));
        assert!(parse_task(&line(LineKind::Task, "   ")).is_err());
    }
}
