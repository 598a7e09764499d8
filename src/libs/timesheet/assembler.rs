//! Folds parsed records into a [`Document`].
//!
//! The fold carries an explicit accumulator holding the section map, the set
//! of dates seen so far and the two cursors. Tasks are stamped with whatever
//! the cursors point at when they arrive.
//!
//! A section opened implicitly for orphan tasks stays unclaimed until a
//! header with the same name appears. That header adopts the bucket and its
//! target instead of counting as a redefinition.

use super::diagnostic::{DiagnosticKind, Diagnostics, ParseError};
use super::document::{Document, Section, Sections};
use super::parsers::{ParsedLine, Record, SectionHeader};
use super::ParseOptions;
use crate::libs::task::Task;
use std::collections::HashSet;

#[derive(Debug, Default)]
struct Accumulator {
    sections: Sections,
    tasks: Vec<Task>,
    seen_dates: HashSet<String>,
    current_section: Option<String>,
    current_date: Option<String>,
    unclaimed_implicit: Option<String>,
}

impl Accumulator {
    fn apply(mut self, entry: ParsedLine, options: &ParseOptions, diagnostics: &mut Diagnostics) -> Result<Self, ParseError> {
        match entry.record {
            Record::Section(header) => self.open_section(entry.number, header, diagnostics),
            Record::BrokenSection => self.current_section = None,
            Record::Date(date) => self.open_date(entry.number, date, diagnostics),
            Record::Task(task) => self.attach_task(entry.number, task, options, diagnostics)?,
        }
        Ok(self)
    }

    fn open_section(&mut self, number: usize, header: SectionHeader, diagnostics: &mut Diagnostics) {
        if self.unclaimed_implicit.as_deref() == Some(header.name.as_str()) {
            self.unclaimed_implicit = None;
            if let Some(section) = self.sections.get_mut(&header.name) {
                section.expected_minutes = header.expected_minutes;
            }
        } else if self.sections.contains(&header.name) {
            diagnostics.push(
                Some(number),
                DiagnosticKind::DuplicateSectionDefinition {
                    section: header.name.clone(),
                },
            );
        } else {
            self.sections.insert(Section::new(&header.name, header.expected_minutes));
        }
        self.current_section = Some(header.name);
    }

    fn open_date(&mut self, number: usize, date: String, diagnostics: &mut Diagnostics) {
        if !self.seen_dates.insert(date.clone()) {
            diagnostics.push(Some(number), DiagnosticKind::DuplicateDateDefinition { date: date.clone() });
        }
        self.current_date = Some(date);
    }

    fn attach_task(&mut self, number: usize, mut task: Task, options: &ParseOptions, diagnostics: &mut Diagnostics) -> Result<(), ParseError> {
        if self.current_section.is_none() {
            match &options.implicit_section {
                Some(name) => {
                    tracing::debug!(line = number, section = %name, "opening implicit section");
                    if self.sections.insert(Section::new(name, None)) {
                        self.unclaimed_implicit = Some(name.clone());
                    }
                    self.current_section = Some(name.clone());
                }
                None if options.recover => {
                    diagnostics.recovered(ParseError::TaskBeforeAnySection { line: number });
                    return Ok(());
                }
                None => return Err(ParseError::TaskBeforeAnySection { line: number }),
            }
        }

        task.section = self.current_section.clone();
        task.date = self.current_date.clone();

        let section = self
            .current_section
            .as_deref()
            .and_then(|name| self.sections.get_mut(name))
            .ok_or(ParseError::TaskBeforeAnySection { line: number })?;
        section.tasks.push(task.clone());

        if task.total_minutes < 0 {
            diagnostics.push(
                Some(number),
                DiagnosticKind::NegativeDuration {
                    total_minutes: task.total_minutes,
                },
            );
        }
        self.tasks.push(task);
        Ok(())
    }

    fn finish(self) -> Document {
        Document {
            tasks: self.tasks,
            sections: self.sections,
        }
    }
}

/// Builds the document in one forward pass over `records`.
pub fn assemble(records: Vec<ParsedLine>, options: &ParseOptions, diagnostics: &mut Diagnostics) -> Result<Document, ParseError> {
    records
        .into_iter()
        .try_fold(Accumulator::default(), |acc, entry| acc.apply(entry, options, diagnostics))
        .map(Accumulator::finish)
}
