//! Per-pane subcommands: path, focus, move, size, capture, send.
//! Each resolves its target against a fresh `list-panes -a`.

use anyhow::{Context, anyhow};
use panectl_tmux::{Pane, ParsePolicy, TmuxCommandRunner, current_path, find_pane};

fn resolve(
    runner: &impl TmuxCommandRunner,
    target: &str,
    policy: ParsePolicy,
) -> anyhow::Result<Pane> {
    find_pane(runner, target, policy)
        .context("listing panes")?
        .ok_or_else(|| anyhow!("no pane at {target} (expected session:window_id.pane_id)"))
}

pub fn cmd_path(
    runner: &impl TmuxCommandRunner,
    target: Option<&str>,
    policy: ParsePolicy,
) -> anyhow::Result<String> {
    match target {
        Some(target) => {
            let pane = resolve(runner, target, policy)?;
            Ok(pane.current_path(runner)?)
        }
        None => Ok(current_path(runner)?),
    }
}

pub fn cmd_focus(
    runner: &impl TmuxCommandRunner,
    target: &str,
    policy: ParsePolicy,
) -> anyhow::Result<()> {
    let pane = resolve(runner, target, policy)?;
    pane.set_focus(runner)
        .with_context(|| format!("focusing {target}; focus state is unknown"))
}

/// Returns the moved pane's window target.
pub fn cmd_move(
    runner: &impl TmuxCommandRunner,
    source: &str,
    dest: &str,
    focus: bool,
    policy: ParsePolicy,
) -> anyhow::Result<String> {
    let mut pane = resolve(runner, source, policy)?;
    let dest = resolve(runner, dest, policy)?;
    pane.move_pane(runner, &dest, focus)
        .with_context(|| format!("moving {source} to {}", dest.window_target()))?;
    tracing::info!(
        window = %pane.window_target(),
        "pane moved; re-list to get its new pane id"
    );
    Ok(pane.window_target())
}

pub fn cmd_size(
    runner: &impl TmuxCommandRunner,
    target: &str,
    policy: ParsePolicy,
) -> anyhow::Result<String> {
    let pane = resolve(runner, target, policy)?;
    let (width, height) = pane.current_size(runner)?;
    Ok(format!("{width}x{height}"))
}

pub fn cmd_capture(
    runner: &impl TmuxCommandRunner,
    target: &str,
    policy: ParsePolicy,
) -> anyhow::Result<String> {
    let pane = resolve(runner, target, policy)?;
    pane.capture(runner)
        .with_context(|| format!("capturing {target}"))
}

pub fn cmd_send(
    runner: &impl TmuxCommandRunner,
    target: &str,
    words: &[String],
    policy: ParsePolicy,
) -> anyhow::Result<()> {
    let pane = resolve(runner, target, policy)?;
    pane.run_command(runner, &words.join(" "))?;
    Ok(())
}
