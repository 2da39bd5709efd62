//! Request context — what the querying screen already knows.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::id::{ActionId, IssueId, SourceId, TaskId};

/// Per-request state supplied by the UI layer alongside a
/// [`Snapshot`](crate::snapshot::Snapshot).
///
/// Tracks which issue actions are mid-resolution (so the UI can disable
/// them and replay the resolution animation) and which safety sources share
/// the caller's UI task (so their issues reopen in place instead of
/// launching a fresh task).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
  /// The UI task the request originates from, if known.
  pub task_id:           Option<TaskId>,
  /// Sources whose issues should reuse `task_id` rather than open a new
  /// task.
  pub same_task_sources: HashSet<SourceId>,
  /// Actions the user has already triggered, pending completion, keyed by
  /// the owning issue.
  pub resolved_actions:  HashMap<IssueId, ActionId>,
}
