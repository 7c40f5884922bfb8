//! `panectl ls` — pane table or JSON.

use anyhow::Context;
use panectl_tmux::{ListScope, Pane, ParsePolicy, TmuxCommandRunner, list_panes};

pub fn cmd_ls(
    runner: &impl TmuxCommandRunner,
    scope: &ListScope,
    policy: ParsePolicy,
    json: bool,
) -> anyhow::Result<()> {
    let panes = list_panes(runner, &scope.to_args(), policy).context("listing panes")?;
    let output = if json {
        serde_json::to_string_pretty(&panes)?
    } else {
        format_table(&panes)
    };
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// One row per pane, `*` marking the active pane of each window.
///
/// ```text
/// TARGET      WINDOW        ACTIVE
/// main:1.0    0:shell       *
/// ```
pub(crate) fn format_table(panes: &[Pane]) -> String {
    if panes.is_empty() {
        return String::new();
    }
    let rows: Vec<(String, String, &str)> = panes
        .iter()
        .map(|p| {
            (
                p.pane_target(),
                format!("{}:{}", p.window_index, p.window_name),
                if p.active { "*" } else { "" },
            )
        })
        .collect();

    let target_w = rows.iter().map(|r| r.0.len()).max().unwrap_or(0).max("TARGET".len());
    let window_w = rows.iter().map(|r| r.1.len()).max().unwrap_or(0).max("WINDOW".len());

    let mut lines = vec![format!("{:<target_w$}  {:<window_w$}  ACTIVE", "TARGET", "WINDOW")];
    for (target, window, active) in rows {
        lines.push(
            format!("{target:<target_w$}  {window:<window_w$}  {active}")
                .trim_end()
                .to_string(),
        );
    }
    lines.join("\n")
}
