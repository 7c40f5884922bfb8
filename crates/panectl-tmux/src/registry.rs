//! Pane listing and lookup.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::pane::strip_line_terminator;
use crate::pane_info::{LIST_PANES_FORMAT, Pane, ParsePolicy, parse_list_panes_output};

/// Which panes `list-panes` should enumerate (see tmux(1), `list-panes [-as] [-t target]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListScope {
    /// Panes of the current window.
    #[default]
    CurrentWindow,
    /// Panes of one window (`-t <target>`).
    Window(String),
    /// Every pane of the current session (`-s`).
    CurrentSession,
    /// Every pane of one session (`-s -t <target>`).
    Session(String),
    /// Every pane on the server (`-a`).
    All,
}

impl ListScope {
    /// Scope flags as passed to `list-panes`.
    pub fn to_args(&self) -> Vec<&str> {
        match self {
            Self::CurrentWindow => Vec::new(),
            Self::Window(target) => vec!["-t", target.as_str()],
            Self::CurrentSession => vec!["-s"],
            Self::Session(target) => vec!["-s", "-t", target.as_str()],
            Self::All => vec!["-a"],
        }
    }
}

/// Execute `tmux list-panes -F <LIST_PANES_FORMAT> <scope_args...>` and parse the output.
///
/// `scope_args` are appended verbatim after the format flag; this function
/// does not interpret them. Panes come back in tmux's enumeration order.
pub fn list_panes(
    runner: &impl TmuxCommandRunner,
    scope_args: &[&str],
    policy: ParsePolicy,
) -> Result<Vec<Pane>, TmuxError> {
    let mut args = vec!["list-panes", "-F", LIST_PANES_FORMAT];
    args.extend_from_slice(scope_args);
    let output = runner.run(&args)?;
    parse_list_panes_output(&output.stdout, policy)
}

/// Find the pane addressed by `target` (`session:window_id.pane_id`) among
/// all panes on the server.
pub fn find_pane(
    runner: &impl TmuxCommandRunner,
    target: &str,
    policy: ParsePolicy,
) -> Result<Option<Pane>, TmuxError> {
    let panes = list_panes(runner, &ListScope::All.to_args(), policy)?;
    Ok(panes.into_iter().find(|p| p.pane_target() == target))
}

/// Working directory of the attached client's current pane.
pub fn current_path(runner: &impl TmuxCommandRunner) -> Result<String, TmuxError> {
    let output = runner.run(&["display-message", "-p", "-F", "#{pane_current_path}"])?;
    Ok(strip_line_terminator(&output.stdout).to_string())
}
