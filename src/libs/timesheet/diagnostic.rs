//! Hard parse errors and advisory diagnostics.
//!
//! A [`ParseError`] aborts the parse unless recovery is switched on, in which
//! case it is converted into a [`Diagnostic`] and the offending line is
//! skipped. Advisory diagnostics never stop the parse.

use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Failures that abort a fail-fast parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: malformed section header `{content}`")]
    MalformedSectionHeader { line: usize, content: String },
    #[error("line {line}: malformed date line `{content}`")]
    MalformedDateLine { line: usize, content: String },
    #[error("line {line}: malformed task line `{content}`")]
    MalformedTaskLine { line: usize, content: String },
    #[error("line {line}: task appears before any section header")]
    TaskBeforeAnySection { line: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MalformedSectionHeader { line, .. }
            | ParseError::MalformedDateLine { line, .. }
            | ParseError::MalformedTaskLine { line, .. }
            | ParseError::TaskBeforeAnySection { line } => *line,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    NegativeDuration {
        total_minutes: i32,
    },
    DuplicateSectionDefinition {
        section: String,
    },
    DuplicateDateDefinition {
        date: String,
    },
    OverlappingTask {
        section: String,
        date: Option<String>,
        description: Option<String>,
    },
    // Recovered hard failures.
    MalformedSectionHeader {
        content: String,
    },
    MalformedDateLine {
        content: String,
    },
    MalformedTaskLine {
        content: String,
    },
    TaskBeforeAnySection,
}

/// One located finding about the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: Option<usize>,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self.kind {
            DiagnosticKind::NegativeDuration { .. }
            | DiagnosticKind::DuplicateSectionDefinition { .. }
            | DiagnosticKind::DuplicateDateDefinition { .. }
            | DiagnosticKind::OverlappingTask { .. } => Severity::Warning,
            DiagnosticKind::MalformedSectionHeader { .. }
            | DiagnosticKind::MalformedDateLine { .. }
            | DiagnosticKind::MalformedTaskLine { .. }
            | DiagnosticKind::TaskBeforeAnySection => Severity::Error,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        let line = Some(error.line());
        let kind = match error {
            ParseError::MalformedSectionHeader { content, .. } => DiagnosticKind::MalformedSectionHeader { content },
            ParseError::MalformedDateLine { content, .. } => DiagnosticKind::MalformedDateLine { content },
            ParseError::MalformedTaskLine { content, .. } => DiagnosticKind::MalformedTaskLine { content },
            ParseError::TaskBeforeAnySection { .. } => DiagnosticKind::TaskBeforeAnySection,
        };
        Diagnostic { line, kind }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {}: ", line)?;
        }
        match &self.kind {
            DiagnosticKind::NegativeDuration { total_minutes } => write!(f, "negative task duration ({} min)", total_minutes),
            DiagnosticKind::DuplicateSectionDefinition { section } => write!(f, "section {} has already been defined", section),
            DiagnosticKind::DuplicateDateDefinition { date } => write!(f, "date {} has already been defined", date),
            DiagnosticKind::OverlappingTask { section, date, description } => write!(
                f,
                "overlapping task in section {} on {}: {}",
                section,
                date.as_deref().unwrap_or("no date"),
                description.as_deref().unwrap_or("(no description)")
            ),
            DiagnosticKind::MalformedSectionHeader { content } => write!(f, "malformed section header `{}`", content),
            DiagnosticKind::MalformedDateLine { content } => write!(f, "malformed date line `{}`", content),
            DiagnosticKind::MalformedTaskLine { content } => write!(f, "malformed task line `{}`", content),
            DiagnosticKind::TaskBeforeAnySection => write!(f, "task appears before any section header"),
        }
    }
}

/// Ordered collector threaded through one parse.
///
/// Every pushed diagnostic is also logged at debug level, so debug runs show
/// them as they are found.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn push(&mut self, line: Option<usize>, kind: DiagnosticKind) {
        self.record(Diagnostic { line, kind });
    }

    pub fn recovered(&mut self, error: ParseError) {
        self.record(error.into());
    }

    fn record(&mut self, diagnostic: Diagnostic) {
        tracing::debug!(line = ?diagnostic.line, severity = ?diagnostic.severity(), "{}", diagnostic);
        self.0.push(diagnostic);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct CapturedLog(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn log_pushes_at(level: tracing::Level) -> String {
        let log = CapturedLog::default();
        let writer = log.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut diagnostics = Diagnostics::default();
            diagnostics.push(Some(4), DiagnosticKind::NegativeDuration { total_minutes: -30 });
            diagnostics.recovered(ParseError::TaskBeforeAnySection { line: 1 });
        });

        let bytes = log.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_diagnostics_are_logged_at_debug_only() {
        assert!(log_pushes_at(tracing::Level::INFO).is_empty());

        let debug_log = log_pushes_at(tracing::Level::DEBUG);
        assert!(debug_log.contains("line 4: negative task duration (-30 min)"));
        assert!(debug_log.contains("line 1: task appears before any section header"));
    }

    #[test]
    fn test_parse_error_converts_to_error_diagnostic() {
        let diagnostic: Diagnostic = ParseError::MalformedTaskLine {
            line: 7,
            content: "lunch".to_string(),
        }
        .into();

        assert_eq!(diagnostic.line, Some(7));
        assert_eq!(diagnostic.severity(), Severity::Error);
        assert_eq!(diagnostic.to_string(), "line 7: malformed task line `lunch`");
    }

    #[test]
    fn test_overlap_display_without_date() {
        let diagnostic = Diagnostic {
            line: Some(3),
            kind: DiagnosticKind::OverlappingTask {
                section: "Dev".to_string(),
                date: None,
                description: Some("review".to_string()),
            },
        };
        assert_eq!(diagnostic.severity(), Severity::Warning);
        assert_eq!(diagnostic.to_string(), "line 3: overlapping task in section Dev on no date: review");
    }

    #[test]
    fn test_serialized_shape() {
        let diagnostic = Diagnostic {
            line: Some(2),
            kind: DiagnosticKind::DuplicateDateDefinition {
                date: "2024-01-05".to_string(),
            },
        };
        let value = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(value["kind"], "duplicate_date_definition");
        assert_eq!(value["line"], 2);
        assert_eq!(value["date"], "2024-01-05");
    }
}
