//! `aegis` — command-line inspector for safety-view snapshots.
//!
//! Loads a platform JSON export, runs the matcher over it with a request
//! context assembled from flags, and prints what a settings screen would
//! render.
//!
//! # Usage
//!
//! ```
//! aegis groups snapshot.json
//! aegis show snapshot.json --group device_lock --task-id 5 \
//!   --same-task-source lock_screen \
//!   --resolved lock_screen/personal/no_lock=set_lock
//! aegis ui-data snapshot.json
//! ```

mod render;

use std::path::{Path, PathBuf};

use aegis_core::{
  ActionId, GroupId, IssueId, RequestContext, SnapshotView, SourceId, TaskId,
};
use anyhow::{Context as _, bail};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "aegis", about = "Inspect safety-view snapshots")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// List the entry groups declared in a snapshot.
  Groups {
    /// Path to the snapshot JSON export.
    snapshot: PathBuf,
  },

  /// Render one group view: matching issues and dismissed issues.
  Show {
    /// Path to the snapshot JSON export.
    snapshot: PathBuf,

    /// The entry group to render.
    #[arg(long)]
    group: String,

    #[command(flatten)]
    context: ContextArgs,
  },

  /// Dump per-issue render data as JSON.
  UiData {
    /// Path to the snapshot JSON export.
    snapshot: PathBuf,

    #[command(flatten)]
    context: ContextArgs,
  },
}

/// Flags that assemble the request context a screen would supply.
#[derive(Args, Default)]
struct ContextArgs {
  /// UI task id the request originates from.
  #[arg(long)]
  task_id: Option<u32>,

  /// Source id whose issues share the current task (repeatable).
  #[arg(long = "same-task-source", value_name = "SOURCE")]
  same_task_sources: Vec<String>,

  /// Action already triggered, as `issue_id=action_id` (repeatable).
  #[arg(long = "resolved", value_name = "ISSUE=ACTION", value_parser = parse_resolved)]
  resolved: Vec<(IssueId, ActionId)>,
}

fn parse_resolved(s: &str) -> Result<(IssueId, ActionId), String> {
  match s.split_once('=') {
    Some((issue, action)) if !issue.is_empty() && !action.is_empty() => {
      Ok((IssueId::new(issue), ActionId::new(action)))
    }
    _ => Err(format!("expected `issue_id=action_id`, got {s:?}")),
  }
}

impl From<ContextArgs> for RequestContext {
  fn from(args: ContextArgs) -> Self {
    RequestContext {
      task_id:           args.task_id.map(TaskId),
      same_task_sources: args
        .same_task_sources
        .into_iter()
        .map(SourceId::new)
        .collect(),
      resolved_actions:  args.resolved.into_iter().collect(),
    }
  }
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .with_writer(std::io::stderr)
    .init();

  match Cli::parse().command {
    Command::Groups { snapshot } => {
      let view = load_view(&snapshot, RequestContext::default())?;
      print!("{}", render::render_groups(&view));
    }
    Command::Show {
      snapshot,
      group,
      context,
    } => {
      let view = load_view(&snapshot, context.into())?;
      let group = GroupId::new(group);
      match render::render_group(&view, &group) {
        Some(rendered) => print!("{rendered}"),
        None => bail!("snapshot declares no entry group {group:?}"),
      }
    }
    Command::UiData { snapshot, context } => {
      let view = load_view(&snapshot, context.into())?;
      let json = serde_json::to_string_pretty(&view.issue_ui_data())
        .context("serialising ui data")?;
      println!("{json}");
    }
  }

  Ok(())
}

fn load_view(
  path: &Path,
  context: RequestContext,
) -> anyhow::Result<SnapshotView> {
  let raw = std::fs::read_to_string(path)
    .with_context(|| format!("reading snapshot file {}", path.display()))?;
  let snapshot = aegis_ingest::parse_snapshot(&raw)
    .with_context(|| format!("translating snapshot {}", path.display()))?;
  debug!(
    issues = snapshot.issues.len(),
    dismissed = snapshot.dismissed_issues.len(),
    groups = snapshot.entry_groups.len(),
    "snapshot loaded"
  );
  Ok(SnapshotView::new(snapshot, context))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resolved_flag_parses_issue_action_pairs() {
    let (issue, action) = parse_resolved("src/p/t=fix").unwrap();
    assert_eq!(issue, IssueId::new("src/p/t"));
    assert_eq!(action, ActionId::new("fix"));

    assert!(parse_resolved("no-equals").is_err());
    assert!(parse_resolved("=fix").is_err());
    assert!(parse_resolved("src/p/t=").is_err());
  }

  #[test]
  fn context_args_assemble_a_request_context() {
    let args = ContextArgs {
      task_id:           Some(9),
      same_task_sources: vec!["lock_screen".into(), "backup".into()],
      resolved:          vec![(IssueId::new("a/b/c"), ActionId::new("x"))],
    };

    let context = RequestContext::from(args);
    assert_eq!(context.task_id, Some(TaskId(9)));
    assert!(context.same_task_sources.contains(&SourceId::new("backup")));
    assert_eq!(
      context.resolved_actions.get(&IssueId::new("a/b/c")),
      Some(&ActionId::new("x"))
    );
  }
}
