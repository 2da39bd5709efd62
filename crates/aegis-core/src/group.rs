//! Entry groups and the issue→groups override mapping.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::id::{GroupId, IssueId};

/// A named UI partition (one settings card). Issues and settings entries
/// belong to exactly the groups that claim them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryGroup {
  pub id:    GroupId,
  pub title: String,
}

/// Overrides which groups an issue surfaces in.
///
/// The platform delivers this as a side-channel bundle keyed by issue id,
/// valued as a list of group id strings; `aegis-ingest` parses it into this
/// typed form once. No entry for an issue means "use the issue's own
/// `group_id` only" — an empty set means the issue surfaces nowhere.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueGroupMapping(HashMap<IssueId, BTreeSet<GroupId>>);

impl IssueGroupMapping {
  /// The full group set for `issue`, or `None` if the mapping has no entry
  /// for it.
  pub fn groups_for(&self, issue: &IssueId) -> Option<&BTreeSet<GroupId>> {
    self.0.get(issue)
  }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn len(&self) -> usize { self.0.len() }
}

impl FromIterator<(IssueId, BTreeSet<GroupId>)> for IssueGroupMapping {
  fn from_iter<I: IntoIterator<Item = (IssueId, BTreeSet<GroupId>)>>(
    iter: I,
  ) -> Self {
    Self(iter.into_iter().collect())
  }
}
