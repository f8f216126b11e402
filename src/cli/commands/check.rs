//! The `check` command.
//!
//! Merges CLI flags with the optional config file, runs one version check,
//! and prints the outcome as text or as a JSON report.

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::checker::{CheckReport, CheckStatus, VersionChecker};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::config::UvcConfig;
use crate::error::{Result, UvcError};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
    quiet: bool,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(
        project_root: &Path,
        config_path: Option<PathBuf>,
        args: CheckArgs,
        quiet: bool,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
            quiet,
        }
    }

    /// Resolve a parameter from its CLI flag, falling back to the config file.
    fn resolve(
        flag_value: Option<&str>,
        config_value: Option<&str>,
        name: &str,
        flag: &str,
    ) -> Result<String> {
        flag_value
            .or(config_value)
            .map(String::from)
            .ok_or_else(|| UvcError::MissingParameter {
                name: name.to_string(),
                flag: flag.to_string(),
            })
    }

    /// Map a check status to the process exit code.
    fn exit_code(status: &CheckStatus) -> i32 {
        match status {
            CheckStatus::UpToDate | CheckStatus::UpdateRecommended { .. } => 0,
            CheckStatus::UpdateRequired => 1,
            CheckStatus::Error(_) => 2,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config = UvcConfig::load(&self.project_root, self.config_path.as_deref())?;

        let server = Self::resolve(
            self.args.server.as_deref(),
            config.server.as_deref(),
            "server",
            "server",
        )?;
        let app = Self::resolve(
            self.args.app.as_deref(),
            config.app_name.as_deref(),
            "app_name",
            "app",
        )?;
        let app_version = Self::resolve(
            self.args.app_version.as_deref(),
            config.app_version.as_deref(),
            "app_version",
            "app-version",
        )?;

        let checker = VersionChecker::new(server, app, app_version);
        let (status, message) = checker.run();

        if !self.quiet {
            match self.args.format {
                OutputFormat::Text => {
                    if message.ends_with('\n') {
                        print!("{}", message);
                    } else {
                        println!("{}", message);
                    }
                }
                OutputFormat::Json => {
                    let report = CheckReport::new(
                        checker.app_name(),
                        checker.app_version(),
                        status,
                        message,
                    );
                    let json = serde_json::to_string_pretty(&report)
                        .context("Failed to serialize check report")?;
                    println!("{}", json);
                }
            }
        }

        let exit_code = Self::exit_code(&status);
        if exit_code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(exit_code))
        }
    }
}
