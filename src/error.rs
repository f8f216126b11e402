//! Error types for uvc operations.
//!
//! This module defines [`UvcError`], the error type used by the application
//! plumbing (configuration loading, CLI dispatch), and a [`Result`] type
//! alias for convenience.
//!
//! The version check itself never raises these: its contract is total, and
//! every check outcome, failures included, is rendered to a message string.
//! See [`crate::checker::CheckStatus`].

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for uvc operations.
#[derive(Debug, Error)]
pub enum UvcError {
    /// Configuration file not found at the requested location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A required parameter is missing from both CLI flags and config.
    #[error("Missing parameter '{name}': pass --{flag} or set it in .uvc/config.yml")]
    MissingParameter { name: String, flag: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for uvc operations.
pub type Result<T> = std::result::Result<T, UvcError>;
