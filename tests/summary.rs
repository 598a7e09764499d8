#[cfg(test)]
mod tests {
    use tally::libs::summary::{FormattedSectionSummary, SectionSummary, Summarize};
    use tally::libs::task::{FilterTasks, TaskFilter};
    use tally::libs::timesheet::parse;

    const TIMESHEET: &str = "\
=== Work (8:30) ===
-- 2024-01-05
09:00 - 12:00 [proj] morning
13:00 - 17:00 [proj] afternoon
-- 2024-01-06
09:00 - 11:00 [ops] deploy
=== Break ===
-- 2024-01-05
12:00 - 13:00 lunch
=== Night ===
-- 2024-01-06
23:00 - 01:00 on call
";

    #[test]
    fn test_section_summaries() {
        let document = parse(TIMESHEET).unwrap().document;
        let summaries = document.section_summaries();

        assert_eq!(
            summaries[0],
            SectionSummary {
                name: "Work".to_string(),
                task_count: 3,
                total_minutes: 540,
                expected_minutes: Some(510),
                difference_minutes: Some(30),
            }
        );
        assert_eq!(summaries[1].total_minutes, 60);
        assert_eq!(summaries[1].difference_minutes, None);
        assert_eq!(summaries[2].total_minutes, -1320);
    }

    #[test]
    fn test_formatted_section_summary() {
        let document = parse(TIMESHEET).unwrap().document;
        let summaries = document.section_summaries();

        let work = FormattedSectionSummary::from(&summaries[0]);
        assert_eq!(work.total, "09:00");
        assert_eq!(work.expected, "08:30");
        assert_eq!(work.difference, "+00:30");

        let lunch = FormattedSectionSummary::from(&summaries[1]);
        assert_eq!(lunch.expected, "-");
        assert_eq!(lunch.difference, "-");
    }

    #[test]
    fn test_date_totals_follow_first_appearance() {
        let document = parse(TIMESHEET).unwrap().document;
        let totals = document.date_totals();

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].date.as_deref(), Some("2024-01-05"));
        assert_eq!(totals[0].total_minutes, 480);
        assert_eq!(totals[1].date.as_deref(), Some("2024-01-06"));
        assert_eq!(totals[1].total_minutes, 120 - 1320);
    }

    #[test]
    fn test_document_total() {
        let document = parse(TIMESHEET).unwrap().document;
        assert_eq!(document.total_minutes(), 540 + 60 - 1320);
    }

    #[test]
    fn test_task_filters() {
        let document = parse(TIMESHEET).unwrap().document;

        assert_eq!(document.tasks.filtered(&TaskFilter::All).len(), 5);
        assert_eq!(document.tasks.filtered(&TaskFilter::Section("Work".to_string())).len(), 3);
        assert_eq!(document.tasks.filtered(&TaskFilter::Date("2024-01-06".to_string())).len(), 2);
        assert!(document.tasks.filtered(&TaskFilter::Section("Missing".to_string())).is_empty());
    }
}
