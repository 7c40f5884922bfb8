//! Pane record, list_panes format string, and parser.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TmuxError;

/// Colon-delimited format string for `tmux list-panes -F`.
pub const LIST_PANES_FORMAT: &str = "#{session_id}:#{session_name}:#{window_id}:#{window_name}:#{window_index}:#{pane_id}:#{pane_active}";

/// One `list-panes` line:
/// `$<session_id>:<session_name>:@<window_id>:<window_name>:<window_index>:%<pane_id>:<0|1>`.
///
/// Id fields are captured as any run of non-`:` characters so a garbled id is
/// matched and then rejected by numeric decoding instead of being skipped.
/// The session name stops at the first `:@`; the window name runs up to the
/// fixed three-field tail.
static PANE_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\$([^:]*):(.+?):@([^:]*):(.+):([^:]*):%([^:]*):([01])$")
        .expect("PANE_LINE_RE regex pattern is valid")
});

/// A tmux pane as reported by `list-panes`.
///
/// A snapshot: nothing refreshes it behind the caller's back. See
/// [`Pane::move_pane`] for the one place this crate writes to it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pane {
    /// Pane number within its window, from the `%N` token.
    pub id: u32,
    pub session_id: u32,
    pub session_name: String,
    pub window_id: u32,
    pub window_name: String,
    pub window_index: u32,
    /// Whether this pane has focus within its window.
    pub active: bool,
}

/// What to do with a `list-panes` line that does not have the pane shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParsePolicy {
    /// Drop it. tmux output can carry stray lines (warnings, blank tails)
    /// that are not panes.
    #[default]
    Lenient,
    /// Fail with [`TmuxError::UnmatchedLine`]. Blank lines are still skipped.
    Strict,
}

/// Parse the raw output of `tmux list-panes -F <LIST_PANES_FORMAT>`.
///
/// A line that matches the pane shape but carries a non-numeric id aborts the
/// whole parse: no panes are returned, not even the ones decoded before it.
pub fn parse_list_panes_output(output: &str, policy: ParsePolicy) -> Result<Vec<Pane>, TmuxError> {
    let mut panes = Vec::new();
    for (idx, line) in output.lines().enumerate() {
        let line_num = idx + 1;
        match parse_line(line, line_num)? {
            Some(pane) => panes.push(pane),
            None if policy == ParsePolicy::Strict && !line.trim().is_empty() => {
                return Err(TmuxError::UnmatchedLine {
                    line_num,
                    line: line.to_string(),
                });
            }
            None => tracing::trace!(line_num, line, "skipping non-pane list-panes line"),
        }
    }
    tracing::debug!(count = panes.len(), "parsed list-panes output");
    Ok(panes)
}

/// `Ok(None)` when the line does not have the pane shape.
fn parse_line(line: &str, line_num: usize) -> Result<Option<Pane>, TmuxError> {
    let Some(caps) = PANE_LINE_RE.captures(line) else {
        return Ok(None);
    };

    let number = |group: usize, field: &str| -> Result<u32, TmuxError> {
        let raw = &caps[group];
        raw.parse::<u32>().map_err(|e| TmuxError::ParseError {
            line_num,
            detail: format!("invalid {field} {raw:?}: {e}"),
        })
    };

    Ok(Some(Pane {
        session_id: number(1, "session id")?,
        session_name: caps[2].to_string(),
        window_id: number(3, "window id")?,
        window_name: caps[4].to_string(),
        window_index: number(5, "window index")?,
        id: number(6, "pane id")?,
        active: &caps[7] == "1",
    }))
}
