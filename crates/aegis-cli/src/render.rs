//! Plain-text rendering of snapshot queries.

use std::{collections::HashMap, fmt::Write as _};

use aegis_core::{GroupId, Issue, IssueId, IssueUiData, SnapshotView};

/// One line per entry group, with its active-issue count.
pub fn render_groups(view: &SnapshotView) -> String {
  let mut out = String::new();
  for group in &view.snapshot().entry_groups {
    let count = view.matching_issues(&group.id).len();
    let _ = writeln!(out, "{}  {}  ({count} issue(s))", group.id, group.title);
  }
  out
}

/// The full view for one group: title, matching active issues annotated
/// with their ui data, then matching dismissed issues.
///
/// `None` when the snapshot declares no such group.
pub fn render_group(view: &SnapshotView, group: &GroupId) -> Option<String> {
  let entry = view.matching_group(group)?;

  let ui_data = view.issue_ui_data();
  let annotations: HashMap<&IssueId, &IssueUiData<'_>> =
    ui_data.iter().map(|d| (&d.issue.id, d)).collect();

  let mut out = String::new();
  let _ = writeln!(out, "{} ({})", entry.title, entry.id);

  let _ = writeln!(out, "\nIssues:");
  let issues = view.matching_issues(group);
  if issues.is_empty() {
    let _ = writeln!(out, "  (none)");
  }
  for issue in issues {
    render_issue(&mut out, issue, annotations.get(&issue.id).copied());
  }

  let dismissed = view.matching_dismissed_issues(group);
  if !dismissed.is_empty() {
    let _ = writeln!(out, "\nDismissed:");
    for issue in dismissed {
      let _ = writeln!(out, "  [{}] {}", issue.severity, issue.id);
    }
  }

  Some(out)
}

fn render_issue(
  out: &mut String,
  issue: &Issue,
  ui: Option<&IssueUiData<'_>>,
) {
  let _ = writeln!(out, "  [{}] {}", issue.severity, issue.id);
  if let Some(subtitle) = &issue.subtitle {
    let _ = writeln!(out, "      {subtitle}");
  }
  if let Some(attribution) = &issue.attribution {
    let _ = writeln!(out, "      attributed to: {attribution}");
  }
  for action in &issue.actions {
    let resolves = if action.will_resolve { " (resolves)" } else { "" };
    let _ = writeln!(out, "      action: {} {:?}{resolves}", action.id, action.label);
  }
  if let Some(ui) = ui {
    if let Some(resolved) = ui.resolved_action {
      let _ = writeln!(out, "      resolving: {resolved}");
    }
    if let Some(task) = ui.launch_task {
      let _ = writeln!(out, "      opens in task: {task}");
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use aegis_core::{ActionId, RequestContext, TaskId};
  use aegis_ingest::parse_snapshot;

  use super::*;

  const EXPORT: &str = r#"{
    "issues": [
      { "id": "lock_screen/personal/no_lock",
        "severity": "recommendation",
        "group": "device_lock",
        "subtitle": "No screen lock is set",
        "actions": [
          { "id": "set_lock", "label": "Set screen lock",
            "will_resolve": true }
        ] }
    ],
    "dismissed_issues": [
      { "id": "backup/personal/stale", "severity": "critical_warning",
        "group": "device_lock" },
      { "id": "backup/personal/done", "severity": "ok",
        "group": "device_lock" }
    ],
    "entry_groups": [
      { "id": "device_lock", "title": "Device lock" }
    ]
  }"#;

  fn view() -> SnapshotView {
    let context = RequestContext {
      task_id: Some(TaskId(5)),
      same_task_sources: ["lock_screen".into()].into_iter().collect(),
      resolved_actions: [(
        IssueId::new("lock_screen/personal/no_lock"),
        ActionId::new("set_lock"),
      )]
      .into_iter()
      .collect(),
    };
    SnapshotView::new(parse_snapshot(EXPORT).unwrap(), context)
  }

  #[test]
  fn groups_listing_counts_active_issues() {
    let out = render_groups(&view());
    assert_eq!(out, "device_lock  Device lock  (1 issue(s))\n");
  }

  #[test]
  fn group_view_shows_annotations_and_skips_dismissed_ok() {
    let out = render_group(&view(), &GroupId::new("device_lock")).unwrap();

    assert!(out.starts_with("Device lock (device_lock)\n"));
    assert!(out.contains("[recommendation] lock_screen/personal/no_lock"));
    assert!(out.contains("No screen lock is set"));
    assert!(out.contains("action: set_lock \"Set screen lock\" (resolves)"));
    assert!(out.contains("resolving: set_lock"));
    assert!(out.contains("opens in task: 5"));

    assert!(out.contains("[critical_warning] backup/personal/stale"));
    assert!(!out.contains("backup/personal/done"));
  }

  #[test]
  fn unknown_group_renders_nothing() {
    assert!(render_group(&view(), &GroupId::new("ghost")).is_none());
  }
}
