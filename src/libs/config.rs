//! Configuration management for the tally application.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). A missing file means defaults: fail-fast parsing and
//! the plain section report.
//!
//! ## Configuration Structure
//!
//! - **Parser**: recovery policy and the implicit section name
//! - **Report**: which optional tables `tally report` prints
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tally::libs::config::Config;
//!
//! let config = Config::read()?;
//! let options = config.parse_options();
//! println!("recover malformed lines: {}", options.recover);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::timesheet::ParseOptions;
use crate::msg_print;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Options for `tally report`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Print the task table under the section summary.
    pub show_tasks: bool,
    /// Print per-date totals.
    pub show_dates: bool,
}

/// Root configuration. Unconfigured modules are omitted from the file.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<ParseOptions>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        Ok(DataStorage::new().get_path(CONFIG_FILE_NAME)?)
    }

    /// Reads the configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(&config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).context(Message::ConfigParseError.to_string())?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file = File::create(Self::path()?)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = Self::path()?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn parse_options(&self) -> ParseOptions {
        self.parser.clone().unwrap_or_default()
    }

    pub fn report_options(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the current values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "parser".to_string(),
                name: Message::ConfigModuleParser.to_string(),
            },
            ConfigModule {
                key: "report".to_string(),
                name: Message::ConfigModuleReport.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "parser" => {
                    let default = config.parse_options();
                    msg_print!(Message::ConfigModuleParser);

                    let recover = Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptRecoverMalformed.to_string())
                        .default(default.recover)
                        .interact()?;

                    let implicit_section: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptImplicitSection.to_string())
                        .default(default.implicit_section.unwrap_or_default())
                        .allow_empty(true)
                        .interact_text()?;
                    let implicit_section = implicit_section.trim();

                    config.parser = Some(ParseOptions {
                        recover,
                        implicit_section: (!implicit_section.is_empty()).then(|| implicit_section.to_string()),
                    });
                }
                "report" => {
                    let default = config.report_options();
                    msg_print!(Message::ConfigModuleReport);
                    config.report = Some(ReportConfig {
                        show_tasks: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowTasks.to_string())
                            .default(default.show_tasks)
                            .interact()?,
                        show_dates: Confirm::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptShowDates.to_string())
                            .default(default.show_dates)
                            .interact()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
