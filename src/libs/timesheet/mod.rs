//! Timesheet log parser.
//!
//! Turns the plain-text log format into a [`Document`] of sections and
//! cursor-stamped tasks, collecting advisory [`Diagnostic`]s on the way.
//!
//! ## Format
//!
//! ```text
//! # comments and blank lines are ignored
//! === Work (8:30) ===
//! -- 2024-01-05
//! 09:00 - 10:30 [proj] did work
//! 10:30 - 11:00 -> standup
//! ~~~ vacation lines are ignored too
//! === Break ===
//! 12:00 - 12:45 lunch
//! ```
//!
//! ## Pipeline
//!
//! 1. [`line`] drops ignorable lines and tags the rest by prefix.
//! 2. [`parsers`] turns each tagged line into a record (or a [`ParseError`]).
//! 3. [`assembler`] folds the records into a [`Document`].
//! 4. [`validator`] checks each (section, date) group for overlaps.
//!
//! ## Failure policy
//!
//! Malformed lines and tasks before any section abort the parse by default.
//! With [`ParseOptions::recover`] they become diagnostics and the line is
//! skipped; tasks under a skipped section header have no section until the
//! next good one. Negative durations, duplicate sections/dates and overlaps
//! are always diagnostics.
//!
//! ```rust
//! use tally::libs::timesheet::parse;
//!
//! let parsed = parse("=== Dev ===\n-- 2024-01-05\n09:00 - 10:30 [proj] did work\n").unwrap();
//! assert_eq!(parsed.document.tasks[0].total_minutes, 90);
//! assert!(parsed.diagnostics.is_empty());
//! ```

pub mod assembler;
pub mod diagnostic;
pub mod document;
pub mod line;
pub mod parsers;
pub mod time;
pub mod validator;

pub use diagnostic::{Diagnostic, DiagnosticKind, ParseError, Severity};
pub use document::{Document, Section, Sections};

use diagnostic::Diagnostics;
use line::LineKind;
use parsers::{ParsedLine, Record};
use serde::{Deserialize, Serialize};

/// Parser behaviour switches. The defaults keep fail-fast semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Turn malformed lines and orphan tasks into diagnostics instead of errors.
    pub recover: bool,
    /// Open a section with this name when a task arrives before any header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub implicit_section: Option<String>,
}

/// Result of a successful parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Parsed {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

impl Parsed {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity() == Severity::Error)
    }
}

pub fn parse(text: &str) -> Result<Parsed, ParseError> {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Parsed, ParseError> {
    let mut diagnostics = Diagnostics::default();
    let mut records = Vec::new();

    for line in line::classify_lines(text) {
        match parsers::parse_line(&line) {
            Ok(record) => records.push(ParsedLine { number: line.number, record }),
            Err(error) if options.recover => {
                if line.kind == LineKind::Section {
                    records.push(ParsedLine {
                        number: line.number,
                        record: Record::BrokenSection,
                    });
                }
                diagnostics.recovered(error);
            }
            Err(error) => return Err(error),
        }
    }
    tracing::debug!(records = records.len(), "classified and parsed timesheet lines");

    let document = assembler::assemble(records, options, &mut diagnostics)?;
    validator::validate(&document, &mut diagnostics);
    tracing::debug!(
        sections = document.sections.len(),
        tasks = document.tasks.len(),
        diagnostics = diagnostics.len(),
        "timesheet parsed"
    );

    Ok(Parsed {
        document,
        diagnostics: diagnostics.into_vec(),
    })
}
