#[cfg(test)]
mod tests {
    use tally::libs::export::{ExportData, ExportFormat, Exporter};
    use tally::libs::task::TaskFilter;
    use tally::libs::timesheet::{parse, Parsed};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    const TIMESHEET: &str = "\
=== Work (2:00) ===
-- 2024-01-05
09:00 - 10:30 [proj] did work
10:00 - 10:15 standup
=== Break ===
-- 2024-01-06
12:00 - 12:45 lunch, with \"quotes\"
";

    struct ExportTestContext {
        temp_dir: TempDir,
        parsed: Parsed,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                parsed: parse(TIMESHEET).unwrap(),
            }
        }
    }

    fn render(format: ExportFormat, data: ExportData, parsed: &Parsed, filter: &TaskFilter) -> String {
        let mut buffer = Vec::new();
        Exporter::new(format, None).write(data, parsed, filter, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_tasks_csv_to_file(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));
        exporter.export(ExportData::Tasks, &ctx.parsed, &TaskFilter::All).unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Line,Section,Date,Start,End,Duration,Minutes,Category,Description"));
        assert_eq!(lines.next(), Some("3,Work,2024-01-05,09:00,10:30,01:30,90,proj,did work"));
        assert!(content.contains("\"lunch, with \"\"quotes\"\"\""));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_filtered_tasks(ctx: &mut ExportTestContext) {
        let content = render(ExportFormat::Csv, ExportData::Tasks, &ctx.parsed, &TaskFilter::Section("Break".to_string()));
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("lunch"));

        let content = render(ExportFormat::Csv, ExportData::Tasks, &ctx.parsed, &TaskFilter::Date("2024-01-05".to_string()));
        assert_eq!(content.lines().count(), 3);
        assert!(!content.contains("lunch"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_summary_csv(ctx: &mut ExportTestContext) {
        let content = render(ExportFormat::Csv, ExportData::Summary, &ctx.parsed, &TaskFilter::All);

        assert!(content.contains("Work,2,01:45,02:00,-00:15"));
        assert!(content.contains("Break,1,00:45,-,"));
        assert!(content.contains("2024-01-06,00:45"));
        assert!(content.contains("Total,02:30"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_json(ctx: &mut ExportTestContext) {
        let content = render(ExportFormat::Json, ExportData::All, &ctx.parsed, &TaskFilter::All);
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(value["tasks"].as_array().unwrap().len(), 3);
        assert_eq!(value["tasks"][0]["total_minutes"], 90);
        assert_eq!(value["summary"]["total_minutes"], 150);
        assert_eq!(value["summary"]["sections"][0]["difference_minutes"], -15);
        assert_eq!(value["diagnostics"][0]["kind"], "overlapping_task");
        assert_eq!(value["diagnostics"][0]["line"], 4);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_all_csv_lists_diagnostics(ctx: &mut ExportTestContext) {
        let content = render(ExportFormat::Csv, ExportData::All, &ctx.parsed, &TaskFilter::All);

        assert!(content.starts_with("TASKS\n"));
        assert!(content.contains("SUMMARY"));
        assert!(content.contains("DIAGNOSTICS"));
        assert!(content.contains("4,warning,overlapping task in section Work on 2024-01-05: standup"));
    }

    #[test]
    fn test_default_output_path_has_extension() {
        let exporter = Exporter::new(ExportFormat::Json, None);
        let name = exporter.output_path().to_string_lossy().to_string();
        assert!(name.starts_with("tally_export_"));
        assert!(name.ends_with(".json"));
        assert!(!exporter.is_stdout());

        let exporter = Exporter::new(ExportFormat::Csv, Some("-".into()));
        assert!(exporter.is_stdout());
    }
}
