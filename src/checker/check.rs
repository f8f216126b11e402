//! The version checker.
//!
//! [`VersionChecker`] runs a five-stage check: local format validation,
//! remote fetch, remote-version extraction, field-wise comparison, and
//! message construction. Every outcome is rendered to a fixed message
//! string; nothing is ever raised to the caller.

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checker::version::{Version, FIELD_COUNT, FIELD_DIFF_THRESHOLD, FIELD_NAMES};
use crate::fetch::{Fetch, HttpFetcher};

/// Why a check could not compare versions.
///
/// Each kind renders to its fixed message string via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckError {
    /// The local version string is malformed.
    #[error("Invalid version format")]
    InvalidFormat,

    /// Transport failure, or the payload carried no version for this app.
    #[error("Failed to retrieve external versions.")]
    FetchFailed,

    /// The remote version does not have exactly four fields.
    #[error("Version format mismatch between local and external versions.")]
    FieldCountMismatch,
}

/// Outcome of a version check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum CheckStatus {
    /// All four fields match.
    UpToDate,

    /// The first differing field is within the update threshold.
    UpdateRecommended {
        /// Index of the first differing field (0 = Main .. 3 = Fix).
        field: usize,
        /// Remote value of that field.
        remote: u64,
        /// Local value of that field.
        current: u64,
    },

    /// Some field differs by more than the threshold.
    UpdateRequired,

    /// The check could not compare versions.
    Error(CheckError),
}

/// Checks an application's version against a version server.
///
/// Configured once with the server endpoint, the application name used as a
/// lookup key in the remote payload, and the local version string. Nothing
/// is validated at construction; validation happens when a check runs.
///
/// # Example
///
/// ```no_run
/// use uvc::checker::VersionChecker;
///
/// let checker = VersionChecker::new(
///     "https://example.com/version_info",
///     "MyApp",
///     "1.0.0.0",
/// );
/// let message = checker.check_version();
/// ```
pub struct VersionChecker<F = HttpFetcher> {
    server: String,
    app_name: String,
    app_version: String,
    fetcher: F,
}

impl VersionChecker<HttpFetcher> {
    /// Create a checker that fetches over HTTP.
    pub fn new(
        server: impl Into<String>,
        app_name: impl Into<String>,
        app_version: impl Into<String>,
    ) -> Self {
        Self::with_fetcher(server, app_name, app_version, HttpFetcher::new())
    }
}

impl<F: Fetch> VersionChecker<F> {
    /// Create a checker with an injected fetch collaborator.
    pub fn with_fetcher(
        server: impl Into<String>,
        app_name: impl Into<String>,
        app_version: impl Into<String>,
        fetcher: F,
    ) -> Self {
        Self {
            server: server.into(),
            app_name: app_name.into(),
            app_version: app_version.into(),
            fetcher,
        }
    }

    /// The configured application name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The configured local version string.
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Fetch the remote payload and extract this app's version fields.
    ///
    /// Takes the first `<app_name>_version==<dotted-digits>` occurrence in
    /// the payload and splits the captured digits on `.`. On transport
    /// failure, or when the pattern is absent, returns an empty sequence and
    /// logs the diagnostic at error level.
    pub fn fetch_remote_fields(&self) -> Vec<String> {
        let payload = match self.fetcher.fetch(&self.server) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(server = %self.server, error = %e, "failed to fetch version data");
                return Vec::new();
            }
        };

        let pattern = format!(r"{}_version==(\d+(?:\.\d+)*)", regex::escape(&self.app_name));
        let Ok(re) = Regex::new(&pattern) else {
            return Vec::new();
        };

        match re.captures(&payload) {
            Some(caps) => caps[1].split('.').map(String::from).collect(),
            None => {
                tracing::error!(
                    app = %self.app_name,
                    server = %self.server,
                    "no version entry found in server payload"
                );
                Vec::new()
            }
        }
    }

    /// Run the check and classify the outcome.
    pub fn check(&self) -> CheckStatus {
        let Ok(local) = self.app_version.parse::<Version>() else {
            return CheckStatus::Error(CheckError::InvalidFormat);
        };

        let remote = self.fetch_remote_fields();
        if remote.is_empty() {
            return CheckStatus::Error(CheckError::FetchFailed);
        }
        if remote.len() != FIELD_COUNT {
            return CheckStatus::Error(CheckError::FieldCountMismatch);
        }

        for (index, (raw, current)) in remote.iter().zip(local.fields()).enumerate() {
            let remote_value = match raw.parse::<u64>() {
                Ok(value) => value,
                // A digit run too large for u64 is far past the threshold.
                Err(_) => return CheckStatus::UpdateRequired,
            };
            if remote_value == current {
                continue;
            }

            let diff = remote_value.abs_diff(current);
            if diff > FIELD_DIFF_THRESHOLD {
                return CheckStatus::UpdateRequired;
            }

            // Only the first differing field is ever reported.
            return CheckStatus::UpdateRecommended {
                field: index,
                remote: remote_value,
                current,
            };
        }

        CheckStatus::UpToDate
    }

    /// Run the check, returning the classified status and finalized message.
    ///
    /// The message is logged at info level before being returned.
    pub fn run(&self) -> (CheckStatus, String) {
        let status = self.check();
        let message = self.render(&status);
        tracing::info!(app = %self.app_name, "{}", message.trim_end());
        (status, message)
    }

    /// Run the check and return the human-readable message.
    ///
    /// Total: every input yields a string, never a panic or a propagated
    /// error.
    pub fn check_version(&self) -> String {
        let (_, message) = self.run();
        message
    }

    /// Render a status into its message shape.
    pub fn render(&self, status: &CheckStatus) -> String {
        match status {
            CheckStatus::UpToDate => {
                format!("({}) is up to date. ({})", self.app_name, self.app_version)
            }
            CheckStatus::UpdateRecommended {
                field,
                remote,
                current,
            } => format!(
                "({}) {}: remote:{} current:{}, Update recommended.\n",
                self.app_name, FIELD_NAMES[*field], remote, current
            ),
            CheckStatus::UpdateRequired => {
                "Version difference is too large, please update".to_string()
            }
            CheckStatus::Error(error) => error.to_string(),
        }
    }
}
