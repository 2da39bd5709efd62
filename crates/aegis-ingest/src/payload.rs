//! Wire shape of the platform safety-state export.
//!
//! These structs mirror the JSON document as delivered; everything is
//! stringly typed and optional-by-default here, and becomes typed and
//! validated in [`crate::translate`]. In particular `issue_groups` is the
//! side-channel issue→groups bundle: a map keyed by issue id, valued as a
//! list of group id strings.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SnapshotPayload {
  /// Capture time of the export; defaults to translation time when absent.
  #[serde(default)]
  pub captured_at:      Option<DateTime<Utc>>,
  #[serde(default)]
  pub issues:           Vec<IssuePayload>,
  #[serde(default)]
  pub dismissed_issues: Vec<IssuePayload>,
  #[serde(default)]
  pub entry_groups:     Vec<EntryGroupPayload>,
  #[serde(default)]
  pub issue_groups:     BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
  pub id:                String,
  /// Severity string form; required, but validated in `translate` rather
  /// than at deserialisation so the error can name the issue.
  #[serde(default)]
  pub severity:          Option<String>,
  pub group:             String,
  #[serde(default)]
  pub actions:           Vec<ActionPayload>,
  #[serde(default = "default_true")]
  pub dismissible:       bool,
  #[serde(default)]
  pub confirm_dismissal: bool,
  #[serde(default)]
  pub attribution:       Option<String>,
  #[serde(default)]
  pub subtitle:          Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActionPayload {
  pub id:              String,
  pub label:           String,
  #[serde(default)]
  pub confirmation:    Option<ConfirmationPayload>,
  #[serde(default)]
  pub success_message: Option<String>,
  #[serde(default)]
  pub will_resolve:    bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfirmationPayload {
  pub title:        String,
  pub text:         String,
  pub accept_label: String,
  pub deny_label:   String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryGroupPayload {
  pub id:    String,
  pub title: String,
}

fn default_true() -> bool { true }
