use serde::Serialize;

/// One recorded time interval from a timesheet.
///
/// `section` and `date` are stamped by the assembler from its cursors; a task
/// that appears before any date marker keeps `date == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub line: usize,
    pub start_minute: i32,
    pub end_minute: i32,
    /// `end_minute - start_minute`, negative for intervals crossing midnight.
    pub total_minutes: i32,
    pub path_label: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub section: Option<String>,
}

impl Task {
    pub fn new(line: usize, start_minute: i32, end_minute: i32, path_label: Option<String>, description: Option<String>) -> Self {
        Task {
            line,
            start_minute,
            end_minute,
            total_minutes: end_minute - start_minute,
            path_label,
            description,
            date: None,
            section: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Section(String),
    Date(String),
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Section(name) => task.section.as_deref() == Some(name.as_str()),
            TaskFilter::Date(date) => task.date.as_deref() == Some(date.as_str()),
        }
    }
}

pub trait FilterTasks {
    fn filtered(&self, filter: &TaskFilter) -> Vec<&Task>;
}

impl FilterTasks for [Task] {
    fn filtered(&self, filter: &TaskFilter) -> Vec<&Task> {
        self.iter().filter(|task| filter.matches(task)).collect()
    }
}
