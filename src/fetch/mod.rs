//! Fetch collaborator for retrieving remote version data.
//!
//! The checker talks to the version server through the [`Fetch`] trait so
//! the transport can be swapped out in tests. [`HttpFetcher`] is the
//! production implementation.

pub mod http;

pub use http::HttpFetcher;

use anyhow::Result;

/// A capability that retrieves raw decoded text from an endpoint.
pub trait Fetch {
    /// Fetch the raw text published at `url`.
    fn fetch(&self, url: &str) -> Result<String>;
}
