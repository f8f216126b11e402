//! uvc - Version checking against a remote version server.
//!
//! uvc compares an application's locally known version string against a
//! version string published on a remote server and produces a human-readable
//! recommendation (up to date, update recommended, update required, or an
//! error description). It is usable as a library and as a CLI binary.
//!
//! # Modules
//!
//! - [`checker`] - Version parsing, comparison, and message construction
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Optional YAML configuration defaults
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - Fetch collaborator trait and HTTP implementation
//!
//! # Example
//!
//! ```no_run
//! use uvc::checker::VersionChecker;
//!
//! let checker = VersionChecker::new(
//!     "https://example.com/version_info",
//!     "MyApp",
//!     "1.0.0.0",
//! );
//! println!("{}", checker.check_version());
//! ```

pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;

pub use error::{Result, UvcError};
