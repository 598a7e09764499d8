use crate::libs::task::Task;
use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// A named bucket of tasks with an optional target duration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Section {
    pub name: String,
    pub expected_minutes: Option<i32>,
    pub tasks: Vec<Task>,
}

impl Section {
    pub fn new(name: &str, expected_minutes: Option<i32>) -> Self {
        Section {
            name: name.to_string(),
            expected_minutes,
            tasks: Vec::new(),
        }
    }

    pub fn total_minutes(&self) -> i32 {
        self.tasks.iter().map(|task| task.total_minutes).sum()
    }
}

/// Sections keyed by name, iterated in the order they were first defined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<Section>,
    index: HashMap<String, usize>,
}

impl Sections {
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.index.get(name).map(|&position| &mut self.entries[position])
    }

    /// Adds a section unless one with the same name exists. Returns whether
    /// it was inserted.
    pub fn insert(&mut self, section: Section) -> bool {
        if self.contains(&section.name) {
            return false;
        }
        self.index.insert(section.name.clone(), self.entries.len());
        self.entries.push(section);
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|section| section.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Sections {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|section| (&section.name, section)))
    }
}

/// The assembled timesheet: every task in file order plus the section map.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Document {
    pub tasks: Vec<Task>,
    pub sections: Sections,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_definition() {
        let mut sections = Sections::default();
        assert!(sections.insert(Section::new("Work", Some(510))));
        assert!(sections.insert(Section::new("Break", None)));
        assert!(!sections.insert(Section::new("Work", None)));

        assert_eq!(sections.len(), 2);
        assert_eq!(sections.get("Work").unwrap().expected_minutes, Some(510));
        assert_eq!(sections.names().collect::<Vec<_>>(), vec!["Work", "Break"]);
    }

    #[test]
    fn test_serializes_as_ordered_map() {
        let mut sections = Sections::default();
        sections.insert(Section::new("Zeta", None));
        sections.insert(Section::new("Alpha", Some(60)));

        let json = serde_json::to_string(&sections).unwrap();
        assert!(json.find("Zeta").unwrap() < json.find("Alpha").unwrap());
        assert!(json.contains("\"expected_minutes\":60"));
    }
}
