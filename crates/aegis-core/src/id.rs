//! Typed identifiers.
//!
//! All identifiers are opaque strings assigned by the platform; wrapping
//! them keeps issue ids, group ids, and action ids from being confused for
//! one another in the API. They serialize transparently as plain strings.
//!
//! Issue ids carry internal structure: the platform encodes them as
//! `source_id/profile/issue_type`. The matcher only ever needs the source
//! prefix (a total operation); the full three-part decode is fallible and
//! belongs to the translation boundary.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

macro_rules! string_id {
  ($(#[$doc:meta])* $name:ident) => {
    $(#[$doc])*
    #[derive(
      Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      pub fn new(id: impl Into<String>) -> Self { Self(id.into()) }

      pub fn as_str(&self) -> &str { &self.0 }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }

    impl From<&str> for $name {
      fn from(id: &str) -> Self { Self(id.to_owned()) }
    }

    impl From<String> for $name {
      fn from(id: String) -> Self { Self(id) }
    }
  };
}

string_id! {
  /// Identifier of an [`Issue`](crate::Issue) — globally unique within one
  /// snapshot, across active and dismissed issues.
  IssueId
}

string_id! {
  /// Identifier of an [`EntryGroup`](crate::EntryGroup).
  GroupId
}

string_id! {
  /// Identifier of an [`Action`](crate::issue::Action) — unique within its
  /// owning issue.
  ActionId
}

string_id! {
  /// Identifier of the safety source an issue originated from.
  SourceId
}

/// Identifier of the UI task (window) a request originates from.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub u32);

impl fmt::Display for TaskId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}

// ─── Encoded issue ids ───────────────────────────────────────────────────────

/// The decoded form of an issue id: `source_id/profile/issue_type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedIssueId {
  pub source_id:  SourceId,
  pub profile:    String,
  pub issue_type: String,
}

impl IssueId {
  /// The source-id prefix of this issue id.
  ///
  /// Total: an id without the encoded structure is treated as being its own
  /// source component.
  pub fn source_id(&self) -> SourceId {
    match self.0.split_once('/') {
      Some((source, _)) => SourceId::new(source),
      None => SourceId::new(self.0.as_str()),
    }
  }

  /// Decode the full `source_id/profile/issue_type` triple.
  pub fn decode(&self) -> Result<EncodedIssueId> {
    self.0.parse()
  }
}

impl FromStr for EncodedIssueId {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    let mut parts = s.split('/');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
      (Some(source), Some(profile), Some(issue_type), None)
        if !source.is_empty() && !profile.is_empty() && !issue_type.is_empty() =>
      {
        Ok(Self {
          source_id:  SourceId::new(source),
          profile:    profile.to_owned(),
          issue_type: issue_type.to_owned(),
        })
      }
      _ => Err(Error::MalformedIssueId(s.to_owned())),
    }
  }
}

impl fmt::Display for EncodedIssueId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}/{}/{}", self.source_id, self.profile, self.issue_type)
  }
}

impl From<&EncodedIssueId> for IssueId {
  fn from(encoded: &EncodedIssueId) -> Self {
    IssueId::new(encoded.to_string())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn source_id_is_the_prefix() {
    let id = IssueId::new("lock_screen/personal/no_screen_lock");
    assert_eq!(id.source_id(), SourceId::new("lock_screen"));
  }

  #[test]
  fn source_id_of_unstructured_id_is_the_whole_id() {
    let id = IssueId::new("not-an-encoded-id");
    assert_eq!(id.source_id(), SourceId::new("not-an-encoded-id"));
  }

  #[test]
  fn decode_round_trips() {
    let id = IssueId::new("biometrics/work/fingerprint_disabled");
    let encoded = id.decode().unwrap();
    assert_eq!(encoded.source_id, SourceId::new("biometrics"));
    assert_eq!(encoded.profile, "work");
    assert_eq!(encoded.issue_type, "fingerprint_disabled");
    assert_eq!(IssueId::from(&encoded), id);
  }

  #[test]
  fn decode_rejects_wrong_arity_and_empty_components() {
    for bad in ["", "a/b", "a/b/c/d", "/b/c", "a//c", "a/b/"] {
      let err = IssueId::new(bad).decode().unwrap_err();
      assert!(matches!(err, Error::MalformedIssueId(_)), "{bad:?}");
    }
  }

  #[test]
  fn ids_serialize_as_plain_strings() {
    let id = GroupId::new("device_lock");
    let json = serde_json::to_string(&id).unwrap();
    assert_eq!(json, "\"device_lock\"");
    let back: GroupId = serde_json::from_str(&json).unwrap();
    assert_eq!(back, id);
  }
}
