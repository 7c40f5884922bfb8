//! tmux target strings: `session:window` and `session:window.pane`.
//!
//! Names are not validated. A session name containing `:` or `.` produces an
//! ambiguous target and tmux will resolve it however it likes; keeping names
//! delimiter-free is the caller's job.

/// Separator between session and window.
pub const SESSION_SEP: char = ':';
/// Separator between window and pane.
pub const PANE_SEP: char = '.';

/// `<session_name>:<window_id>`
pub fn window_target(session_name: &str, window_id: u32) -> String {
    format!("{session_name}{SESSION_SEP}{window_id}")
}

/// `<session_name>:<window_id>.<pane_id>`
pub fn pane_target(session_name: &str, window_id: u32, pane_id: u32) -> String {
    format!("{session_name}{SESSION_SEP}{window_id}{PANE_SEP}{pane_id}")
}
