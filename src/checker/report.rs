//! Serializable check reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::check::CheckStatus;

/// A structured record of one version check.
///
/// This is the JSON shape emitted by `uvc check --format json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Application the check ran for.
    pub app_name: String,

    /// Locally known version string, as configured (pre-validation).
    pub local_version: String,

    /// Classified outcome.
    pub status: CheckStatus,

    /// Human-readable message for this outcome.
    pub message: String,

    /// When the check was performed.
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    /// Build a report for a finished check, stamped with the current time.
    pub fn new(
        app_name: impl Into<String>,
        local_version: impl Into<String>,
        status: CheckStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            local_version: local_version.into(),
            status,
            message: message.into(),
            checked_at: Utc::now(),
        }
    }
}
