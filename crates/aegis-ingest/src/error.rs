//! Error types for the aegis-ingest translation layer.

use aegis_core::{GroupId, IssueId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("duplicate issue id: {0}")]
  DuplicateIssueId(IssueId),

  #[error("duplicate entry group id: {0}")]
  DuplicateGroupId(GroupId),

  #[error("issue {issue} has no severity")]
  MissingSeverity { issue: IssueId },

  #[error("issue {issue}: unknown severity {value:?}")]
  UnknownSeverity { issue: IssueId, value: String },

  #[error("mapping for issue {issue} references unknown group {group}")]
  UnknownGroup { issue: IssueId, group: GroupId },

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
