//! The matcher — a pure query layer over one snapshot and one request
//! context.
//!
//! [`SnapshotView`] is the computed read model for a single screen: it joins
//! issues against entry groups (honouring the snapshot's override mapping)
//! and against the context's resolved-action and same-task state. Every
//! operation is total; malformed snapshots (duplicate ids, dangling mapping
//! references) degrade to stable results rather than errors, because
//! validation belongs to the translation layer.

use serde::Serialize;

use crate::{
  context::RequestContext,
  group::EntryGroup,
  id::{ActionId, GroupId, TaskId},
  issue::{Issue, Severity},
  snapshot::Snapshot,
};

// ─── Derived record ──────────────────────────────────────────────────────────

/// Render data for one active issue. Computed by
/// [`SnapshotView::issue_ui_data`], never stored.
#[derive(Debug, Clone, Serialize)]
pub struct IssueUiData<'a> {
  pub issue:           &'a Issue,
  /// Always `false` here: only active issues get ui data. Dismissed issues
  /// render through [`SnapshotView::matching_dismissed_issues`].
  pub dismissed:       bool,
  /// The action already triggered for this issue, if any.
  pub resolved_action: Option<&'a ActionId>,
  /// The task to replay the resolution animation in. Set only when the
  /// issue's source shares the caller's task; an issue from any other
  /// source opens a fresh task.
  pub launch_task:     Option<TaskId>,
}

// ─── View ────────────────────────────────────────────────────────────────────

/// One snapshot paired with one request context, queried synchronously and
/// discarded at the end of the render pass.
#[derive(Debug, Clone)]
pub struct SnapshotView {
  snapshot: Snapshot,
  context:  RequestContext,
}

impl SnapshotView {
  pub fn new(snapshot: Snapshot, context: RequestContext) -> Self {
    Self { snapshot, context }
  }

  pub fn snapshot(&self) -> &Snapshot { &self.snapshot }

  pub fn context(&self) -> &RequestContext { &self.context }

  /// The entry group with id `group`, or `None`.
  ///
  /// Group ids are unique in validated snapshots. If a snapshot does carry
  /// duplicates, which of them is returned is unspecified (currently the
  /// first encountered) — callers must not rely on a tie-break.
  pub fn matching_group(&self, group: &GroupId) -> Option<&EntryGroup> {
    self.snapshot.entry_groups.iter().find(|g| g.id == *group)
  }

  /// Active issues whose effective group set contains `group`, in snapshot
  /// order. Empty when none match.
  pub fn matching_issues(&self, group: &GroupId) -> Vec<&Issue> {
    self
      .snapshot
      .issues
      .iter()
      .filter(|issue| issue.matches_group(&self.snapshot.issue_groups, group))
      .collect()
  }

  /// Dismissed issues whose effective group set contains `group`, in
  /// dismissal-record order.
  ///
  /// Dismissed `Ok`-severity issues carry no actionable information and
  /// never resurface, whatever their group.
  pub fn matching_dismissed_issues(&self, group: &GroupId) -> Vec<&Issue> {
    self
      .snapshot
      .dismissed_issues
      .iter()
      .filter(|issue| {
        issue.severity > Severity::Ok
          && issue.matches_group(&self.snapshot.issue_groups, group)
      })
      .collect()
  }

  /// Render data for every active issue, one element per issue, in snapshot
  /// order. No filtering.
  pub fn issue_ui_data(&self) -> Vec<IssueUiData<'_>> {
    self
      .snapshot
      .issues
      .iter()
      .map(|issue| {
        let same_task = self
          .context
          .same_task_sources
          .contains(&issue.id.source_id());
        IssueUiData {
          issue,
          dismissed: false,
          resolved_action: self.context.resolved_actions.get(&issue.id),
          launch_task: if same_task { self.context.task_id } else { None },
        }
      })
      .collect()
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
