//! Read-only chronology check over an assembled document.

use super::diagnostic::{DiagnosticKind, Diagnostics};
use super::document::Document;
use crate::libs::task::Task;

/// Groups tasks by stamped date: groups in order of first appearance, tasks
/// in file order within each group.
pub fn group_by_date(tasks: &[Task]) -> Vec<(Option<&str>, Vec<&Task>)> {
    let mut groups: Vec<(Option<&str>, Vec<&Task>)> = Vec::new();
    for task in tasks {
        let date = task.date.as_deref();
        match groups.iter_mut().find(|(key, _)| *key == date) {
            Some((_, group)) => group.push(task),
            None => groups.push((date, vec![task])),
        }
    }
    groups
}

/// Walks one (section, date) group against a running end-time watermark and
/// returns the final watermark.
///
/// A flagged task still moves the watermark to its own end.
pub fn check_chronology(section: &str, date: Option<&str>, tasks: &[&Task], diagnostics: &mut Diagnostics) -> i32 {
    tasks.iter().fold(0, |last_end, task| {
        if task.end_minute < last_end || task.start_minute < last_end {
            diagnostics.push(
                Some(task.line),
                DiagnosticKind::OverlappingTask {
                    section: section.to_string(),
                    date: date.map(str::to_string),
                    description: task.description.clone(),
                },
            );
        }
        task.end_minute
    })
}

pub fn validate(document: &Document, diagnostics: &mut Diagnostics) {
    for section in document.sections.iter() {
        for (date, tasks) in group_by_date(&section.tasks) {
            check_chronology(&section.name, date, &tasks, diagnostics);
        }
    }
}
