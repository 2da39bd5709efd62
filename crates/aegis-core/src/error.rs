//! Error types for `aegis-core`.
//!
//! Matcher operations are total and never return these; only the encoded-id
//! parse boundary is fallible.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("malformed encoded issue id: {0:?}")]
  MalformedIssueId(String),

  #[error("unknown severity: {0:?}")]
  UnknownSeverity(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
