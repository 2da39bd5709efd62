//! Validation and construction of [`Snapshot`]s from raw payloads.
//!
//! Everything the matcher assumes about a well-formed snapshot is enforced
//! here, once: issue-id uniqueness across active and dismissed issues,
//! entry-group-id uniqueness, parseable severities, and mapping entries
//! that only reference declared groups. Mapping entries keyed by issue ids
//! absent from the snapshot are kept verbatim — nothing looks them up, and
//! the platform contract does not forbid them.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use aegis_core::{
  ActionId, EntryGroup, GroupId, Issue, IssueGroupMapping, IssueId, Severity,
  Snapshot,
  issue::{Action, ConfirmationDetails},
};
use chrono::Utc;

use crate::{
  error::{Error, Result},
  payload::{ActionPayload, IssuePayload, SnapshotPayload},
};

/// Translate a parsed payload into a validated [`Snapshot`].
///
/// Order of the `issues` and `dismissed_issues` arrays is preserved
/// verbatim; it is the platform's display order.
pub fn translate(payload: SnapshotPayload) -> Result<Snapshot> {
  let mut group_ids: HashSet<GroupId> = HashSet::new();
  let mut entry_groups = Vec::with_capacity(payload.entry_groups.len());
  for g in payload.entry_groups {
    let id = GroupId::new(g.id);
    if !group_ids.insert(id.clone()) {
      return Err(Error::DuplicateGroupId(id));
    }
    entry_groups.push(EntryGroup { id, title: g.title });
  }

  let mut issue_ids: HashSet<IssueId> = HashSet::new();
  for p in payload.issues.iter().chain(&payload.dismissed_issues) {
    let id = IssueId::new(p.id.as_str());
    if !issue_ids.insert(id.clone()) {
      return Err(Error::DuplicateIssueId(id));
    }
  }

  let issue_groups = translate_mapping(payload.issue_groups, &group_ids)?;

  let issues = payload
    .issues
    .into_iter()
    .map(translate_issue)
    .collect::<Result<Vec<_>>>()?;
  let dismissed_issues = payload
    .dismissed_issues
    .into_iter()
    .map(translate_issue)
    .collect::<Result<Vec<_>>>()?;

  Ok(Snapshot {
    captured_at: payload.captured_at.unwrap_or_else(Utc::now),
    issues,
    dismissed_issues,
    entry_groups,
    issue_groups,
  })
}

fn translate_mapping(
  raw: BTreeMap<String, Vec<String>>,
  known_groups: &HashSet<GroupId>,
) -> Result<IssueGroupMapping> {
  raw
    .into_iter()
    .map(|(issue, groups)| {
      let issue = IssueId::new(issue);
      let groups = groups
        .into_iter()
        .map(|g| {
          let group = GroupId::new(g);
          if known_groups.contains(&group) {
            Ok(group)
          } else {
            Err(Error::UnknownGroup {
              issue: issue.clone(),
              group,
            })
          }
        })
        .collect::<Result<BTreeSet<_>>>()?;
      Ok((issue, groups))
    })
    .collect()
}

fn translate_issue(p: IssuePayload) -> Result<Issue> {
  let id = IssueId::new(p.id);
  let value = p
    .severity
    .ok_or_else(|| Error::MissingSeverity { issue: id.clone() })?;
  let severity = Severity::parse(&value).map_err(|_| Error::UnknownSeverity {
    issue: id.clone(),
    value,
  })?;

  Ok(Issue {
    id,
    severity,
    group_id: GroupId::new(p.group),
    actions: p.actions.into_iter().map(translate_action).collect(),
    dismissible: p.dismissible,
    confirm_dismissal: p.confirm_dismissal,
    attribution: p.attribution,
    subtitle: p.subtitle,
  })
}

fn translate_action(p: ActionPayload) -> Action {
  Action {
    id:              ActionId::new(p.id),
    label:           p.label,
    confirmation:    p.confirmation.map(|c| ConfirmationDetails {
      title:        c.title,
      text:         c.text,
      accept_label: c.accept_label,
      deny_label:   c.deny_label,
    }),
    success_message: p.success_message,
    will_resolve:    p.will_resolve,
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
