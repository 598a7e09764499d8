#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tally::libs::config::{Config, ReportConfig};
    use tally::libs::timesheet::ParseOptions;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-wide; config tests take turns.
    static HOME_LOCK: Mutex<()> = Mutex::new(());

    /// Points the user's home/appdata directory at a fresh temporary directory.
    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = HOME_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _guard: guard, temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.parse_options(), ParseOptions::default());
        assert!(!config.report_options().show_tasks);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            parser: Some(ParseOptions {
                recover: true,
                implicit_section: Some("Misc".to_string()),
            }),
            report: Some(ReportConfig {
                show_tasks: true,
                show_dates: false,
            }),
        };
        config.save().unwrap();

        assert!(Config::path().unwrap().starts_with(ctx.temp_dir.path()));
        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        assert!(read_config.parse_options().recover);
        assert_eq!(read_config.parse_options().implicit_section.as_deref(), Some("Misc"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_parser_section_uses_defaults(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), r#"{ "parser": { "recover": true } }"#).unwrap();

        let config = Config::read().unwrap();
        assert!(config.parse_options().recover);
        assert_eq!(config.parse_options().implicit_section, None);
        assert_eq!(config.report, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_an_error(_ctx: &mut ConfigTestContext) {
        std::fs::write(Config::path().unwrap(), "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(_ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config::default().save().unwrap();
        assert!(Config::path().unwrap().exists());
        assert!(Config::delete().unwrap());
        assert!(!Config::path().unwrap().exists());
    }

    #[test]
    fn test_unconfigured_modules_are_omitted() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(json, "{}");
    }
}
