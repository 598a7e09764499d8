//! Line classification.
//!
//! Blank lines, comments (`#`) and vacation markers (`~~~`) are dropped here
//! and never reach a parser. Everything else is tagged by prefix only; the
//! rest of the line is the parsers' business.

const SECTION_PREFIX: &str = "===";
const DATE_PREFIX: &str = "--";
const COMMENT_PREFIX: &str = "#";
const VACATION_PREFIX: &str = "~~~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Section,
    DateMarker,
    Task,
}

/// A physical line that survived filtering, with its 1-based line number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    pub number: usize,
    pub content: &'a str,
    pub kind: LineKind,
}

pub fn is_ignorable(content: &str) -> bool {
    content.is_empty() || content.starts_with(COMMENT_PREFIX) || content.starts_with(VACATION_PREFIX)
}

/// Tags a line by prefix, or returns `None` for lines that carry no record.
pub fn classify(content: &str) -> Option<LineKind> {
    if is_ignorable(content) {
        None
    } else if content.starts_with(SECTION_PREFIX) {
        Some(LineKind::Section)
    } else if content.starts_with(DATE_PREFIX) {
        Some(LineKind::DateMarker)
    } else {
        Some(LineKind::Task)
    }
}

/// Splits `text` into numbered lines and keeps only the classified ones.
pub fn classify_lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.lines().enumerate().filter_map(|(index, content)| {
        classify(content).map(|kind| Line {
            number: index + 1,
            content,
            kind,
        })
    })
}
