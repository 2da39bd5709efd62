//! Translation of the platform safety-state export into [`aegis_core`]
//! snapshots. Pure synchronous; no I/O beyond the caller-supplied string.
//!
//! The export is a single JSON document carrying the active and dismissed
//! issue lists, the entry groups, and the side-channel issue→groups mapping
//! bundle. All validation the matcher relies on happens here, once; the
//! core never re-checks.
//!
//! # Quick start
//!
//! ```
//! let raw = r#"{
//!   "issues": [
//!     { "id": "lock_screen/personal/no_lock",
//!       "severity": "recommendation",
//!       "group": "device_lock" }
//!   ],
//!   "entry_groups": [ { "id": "device_lock", "title": "Device lock" } ]
//! }"#;
//!
//! let snapshot = aegis_ingest::parse_snapshot(raw).unwrap();
//! assert_eq!(snapshot.issues.len(), 1);
//! ```

pub mod error;
mod payload;
mod translate;

use aegis_core::Snapshot;
pub use error::{Error, Result};
pub use payload::{
  ActionPayload, ConfirmationPayload, EntryGroupPayload, IssuePayload,
  SnapshotPayload,
};
pub use translate::translate;

/// Parse and validate one JSON export into a [`Snapshot`].
pub fn parse_snapshot(input: &str) -> Result<Snapshot> {
  let payload: SnapshotPayload = serde_json::from_str(input)?;
  translate(payload)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
