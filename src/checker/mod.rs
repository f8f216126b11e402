//! Version checking core.
//!
//! # Architecture
//!
//! - [`version`] - The 4-field version value type and comparison constants
//! - [`check`] - The [`VersionChecker`] pipeline: validate, fetch, extract,
//!   compare, render
//! - [`report`] - Serializable check reports for structured output

pub mod check;
pub mod report;
pub mod version;

pub use check::{CheckError, CheckStatus, VersionChecker};
pub use report::CheckReport;
pub use version::{Version, FIELD_COUNT, FIELD_DIFF_THRESHOLD, FIELD_NAMES};
