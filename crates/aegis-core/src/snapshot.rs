//! Snapshot — one consistent capture of safety-center state.
//!
//! A snapshot is assembled once per render pass (by `aegis-ingest`, from the
//! platform export), queried through a
//! [`SnapshotView`](crate::view::SnapshotView), and discarded. Nothing
//! mutates it afterwards, so it may be shared across threads freely.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{group::{EntryGroup, IssueGroupMapping}, issue::Issue};

/// The aggregate root for one render pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
  /// The point in time at which this state was captured.
  pub captured_at:      DateTime<Utc>,
  /// Active issues. Insertion order is the platform's display order and is
  /// preserved in every derived view.
  pub issues:           Vec<Issue>,
  /// Dismissed issues, in dismissal-record order.
  pub dismissed_issues: Vec<Issue>,
  /// The entry groups the UI can render. Ids are unique in validated
  /// snapshots; the matcher does not rely on that.
  pub entry_groups:     Vec<EntryGroup>,
  /// Side-channel overrides of issue→group membership.
  pub issue_groups:     IssueGroupMapping,
}
