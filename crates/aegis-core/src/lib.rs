//! Core types and matcher for the Aegis safety view.
//!
//! This crate is deliberately free of I/O, async, and platform dependencies.
//! It models one render pass over safety-center state: a [`Snapshot`] of
//! issues and entry groups captured from the platform, a [`RequestContext`]
//! describing the querying screen, and a [`SnapshotView`] that joins the two
//! into the filtered, ordered data a single screen binds to.
//!
//! Everything here is an immutable value record. A snapshot is built once
//! (by `aegis-ingest` or by hand), queried synchronously, and discarded;
//! concurrent readers may share one freely because nothing mutates.

pub mod context;
pub mod error;
pub mod group;
pub mod id;
pub mod issue;
pub mod snapshot;
pub mod view;

pub use context::RequestContext;
pub use error::{Error, Result};
pub use group::{EntryGroup, IssueGroupMapping};
pub use id::{ActionId, GroupId, IssueId, SourceId, TaskId};
pub use issue::{Issue, Severity};
pub use snapshot::Snapshot;
pub use view::{IssueUiData, SnapshotView};
