pub mod check;
pub mod export;
pub mod init;
pub mod report;

use crate::{
    libs::{
        config::Config,
        messages::Message,
        timesheet::{self, Diagnostic, ParseOptions, Parsed, Severity},
    },
    msg_bail_anyhow, msg_debug, msg_error, msg_error_anyhow, msg_warning,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Parse a timesheet and list its diagnostics")]
    Check(check::CheckArgs),
    #[command(about = "Print section totals for a timesheet")]
    Report(report::ReportArgs),
    #[command(about = "Export parsed tasks and totals to CSV or JSON")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<(), Box<dyn Error>> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Check(args) => check::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}

/// Input file and parser policy flags shared by the timesheet commands.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Timesheet file to read, or `-` for standard input
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Skip malformed lines and report them instead of stopping
    #[arg(long, conflicts_with = "fail_fast")]
    pub recover: bool,

    /// Stop at the first malformed line, even if the configuration says otherwise
    #[arg(long)]
    pub fail_fast: bool,

    /// Collect tasks that appear before any section header into this section
    #[arg(long, value_name = "NAME")]
    pub implicit_section: Option<String>,
}

impl SourceArgs {
    /// Configured parser options with command-line overrides applied.
    pub fn options(&self, config: &Config) -> ParseOptions {
        let mut options = config.parse_options();
        if self.recover {
            options.recover = true;
        }
        if self.fail_fast {
            options.recover = false;
        }
        if let Some(name) = &self.implicit_section {
            options.implicit_section = Some(name.clone());
        }
        options
    }

    pub fn source_name(&self) -> String {
        if self.is_stdin() {
            "standard input".to_string()
        } else {
            self.file.display().to_string()
        }
    }

    fn is_stdin(&self) -> bool {
        self.file.as_os_str() == "-"
    }

    pub fn read(&self) -> Result<String> {
        if self.is_stdin() {
            msg_debug!(Message::ReadingStdin);
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }
        read_timesheet(&self.file)
    }

    /// Reads and parses the source with the effective options.
    pub fn load(&self, config: &Config) -> Result<Parsed> {
        let text = self.read()?;
        let options = self.options(config);
        timesheet::parse_with(&text, &options).map_err(|error| msg_error_anyhow!(Message::ParseFailed(error.to_string())))
    }
}

pub fn read_timesheet(path: &Path) -> Result<String> {
    if !path.is_file() {
        msg_bail_anyhow!(Message::FileReadError(path.display().to_string()));
    }
    fs::read_to_string(path).with_context(|| Message::FileReadError(path.display().to_string()))
}

/// Prints each diagnostic on stderr, errors and warnings alike.
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Warning => msg_warning!(diagnostic),
            Severity::Error => msg_error!(diagnostic),
        }
    }
}
