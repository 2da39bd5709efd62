//! Issue records — the unit of safety-relevant state surfaced to the user.
//!
//! Issues are immutable once constructed. Dismissal is not a field on the
//! issue: the snapshot keeps active and dismissed issues in separate
//! sequences, and the derived [`IssueUiData`](crate::view::IssueUiData)
//! carries the flag for rendering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
  error::{Error, Result},
  group::IssueGroupMapping,
  id::{ActionId, GroupId, IssueId},
};

// ─── Severity ────────────────────────────────────────────────────────────────

/// How urgent an issue is. Variant order is the severity order:
/// `Ok < Recommendation < CriticalWarning`.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
  Serialize,
  Deserialize,
  strum::Display,
  strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
  /// Informational; nothing for the user to do.
  Ok,
  /// The user should act, but is not at immediate risk.
  Recommendation,
  /// The user is exposed until they act.
  CriticalWarning,
}

impl Severity {
  /// Parse the platform string form (`"ok"`, `"recommendation"`,
  /// `"critical_warning"`).
  pub fn parse(s: &str) -> Result<Self> {
    Self::from_str(s).map_err(|_| Error::UnknownSeverity(s.to_owned()))
  }
}

// ─── Actions ─────────────────────────────────────────────────────────────────

/// The confirmation dialog shown before an action runs, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmationDetails {
  pub title:        String,
  pub text:         String,
  pub accept_label: String,
  pub deny_label:   String,
}

/// One thing the user can do about an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
  /// Unique within the owning issue.
  pub id:              ActionId,
  pub label:           String,
  pub confirmation:    Option<ConfirmationDetails>,
  /// Shown once the action completes successfully.
  pub success_message: Option<String>,
  /// Whether clicking triggers an in-place resolution animation rather than
  /// navigating away.
  pub will_resolve:    bool,
}

// ─── Issue ───────────────────────────────────────────────────────────────────

/// A single safety-relevant finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
  /// Globally unique within one snapshot, across active and dismissed
  /// issues. Encoded as `source_id/profile/issue_type`; see
  /// [`IssueId::source_id`].
  pub id:                IssueId,
  pub severity:          Severity,
  /// The group this issue belongs to, unless overridden by the snapshot's
  /// [`IssueGroupMapping`].
  pub group_id:          GroupId,
  /// Ordered; the first action is the primary one.
  pub actions:           Vec<Action>,
  pub dismissible:       bool,
  /// Whether dismissal must be confirmed by the user first.
  pub confirm_dismissal: bool,
  /// Name of the party the finding is attributed to.
  pub attribution:       Option<String>,
  pub subtitle:          Option<String>,
}

impl Issue {
  /// Whether this issue's effective group set contains `group`.
  ///
  /// The effective group set is the mapping's entry for this issue if one
  /// exists, else the singleton of the issue's own `group_id`.
  pub fn matches_group(
    &self,
    mapping: &IssueGroupMapping,
    group: &GroupId,
  ) -> bool {
    match mapping.groups_for(&self.id) {
      Some(groups) => groups.contains(group),
      None => self.group_id == *group,
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn severity_order() {
    assert!(Severity::Ok < Severity::Recommendation);
    assert!(Severity::Recommendation < Severity::CriticalWarning);
  }

  #[test]
  fn severity_string_forms() {
    assert_eq!(Severity::parse("critical_warning").unwrap(), Severity::CriticalWarning);
    assert_eq!(Severity::CriticalWarning.to_string(), "critical_warning");
    assert_eq!(Severity::parse("ok").unwrap(), Severity::Ok);
    assert!(matches!(
      Severity::parse("severe"),
      Err(Error::UnknownSeverity(s)) if s == "severe"
    ));
  }

  #[test]
  fn severity_serde_matches_strum_forms() {
    let json = serde_json::to_string(&Severity::Recommendation).unwrap();
    assert_eq!(json, "\"recommendation\"");
    let back: Severity = serde_json::from_str("\"critical_warning\"").unwrap();
    assert_eq!(back, Severity::CriticalWarning);
  }

  #[test]
  fn matches_group_falls_back_to_own_group() {
    let issue = Issue {
      id:                IssueId::new("src/personal/t"),
      severity:          Severity::Ok,
      group_id:          GroupId::new("groupB"),
      actions:           vec![],
      dismissible:       true,
      confirm_dismissal: false,
      attribution:       None,
      subtitle:          None,
    };

    let empty = IssueGroupMapping::default();
    assert!(issue.matches_group(&empty, &GroupId::new("groupB")));
    assert!(!issue.matches_group(&empty, &GroupId::new("groupA")));

    // A mapping entry replaces the issue's own group entirely.
    let mapping: IssueGroupMapping =
      [(issue.id.clone(), [GroupId::new("groupA")].into())]
        .into_iter()
        .collect();
    assert!(issue.matches_group(&mapping, &GroupId::new("groupA")));
    assert!(!issue.matches_group(&mapping, &GroupId::new("groupB")));
  }
}
