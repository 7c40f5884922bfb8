//! Per-pane operations: each builds its argv from the pane's target and runs
//! it once through the injected runner.

use crate::error::TmuxError;
use crate::executor::TmuxCommandRunner;
use crate::pane_info::Pane;
use crate::target::{pane_target, window_target};

/// Key token tmux maps to Enter.
const ENTER_KEY: &str = "C-m";

/// Drop one trailing `\n` (or `\r\n`) from a single-line tmux reply.
pub(crate) fn strip_line_terminator(s: &str) -> &str {
    s.strip_suffix("\r\n")
        .or_else(|| s.strip_suffix('\n'))
        .unwrap_or(s)
}

impl Pane {
    /// `session_name:window_id`
    pub fn window_target(&self) -> String {
        window_target(&self.session_name, self.window_id)
    }

    /// `session_name:window_id.id`
    pub fn pane_target(&self) -> String {
        pane_target(&self.session_name, self.window_id, self.id)
    }

    /// Working directory of the process running in this pane.
    pub fn current_path(&self, runner: &impl TmuxCommandRunner) -> Result<String, TmuxError> {
        let target = self.pane_target();
        let output = runner.run(&[
            "display-message",
            "-p",
            "-t",
            &target,
            "-F",
            "#{pane_current_path}",
        ])?;
        Ok(strip_line_terminator(&output.stdout).to_string())
    }

    /// Select this pane's window, then the pane itself.
    ///
    /// Both commands are always issued. The `select-pane` error wins when
    /// both fail; any error means focus is not guaranteed.
    pub fn set_focus(&self, runner: &impl TmuxCommandRunner) -> Result<(), TmuxError> {
        let window = self.window_target();
        let pane = self.pane_target();
        tracing::debug!(%pane, "focusing pane");

        let window_result = runner.run(&["select-window", "-t", &window]);
        let pane_result = runner.run(&["select-pane", "-t", &pane]);
        pane_result?;
        window_result?;
        Ok(())
    }

    /// Join this pane into `target`'s window.
    ///
    /// With `focus == false` the pane is moved detached (`-d`) so the
    /// current focus stays put. On success `window_name` and `window_id` are
    /// copied from `target`; on failure the pane is left unchanged.
    ///
    /// `id` is not recomputed: tmux renumbers the pane inside its new window,
    /// so list the panes again before addressing it by index.
    pub fn move_pane(
        &mut self,
        runner: &impl TmuxCommandRunner,
        target: &Pane,
        focus: bool,
    ) -> Result<(), TmuxError> {
        let source = self.pane_target();
        let destination = target.window_target();
        let mut args = vec!["join-pane", "-s", &source, "-t", &destination];
        if !focus {
            args.push("-d");
        }
        tracing::debug!(%source, %destination, focus, "moving pane");

        runner.run(&args)?;
        self.window_name = target.window_name.clone();
        self.window_id = target.window_id;
        Ok(())
    }

    /// Pane size in cells as `(width, height)`.
    pub fn current_size(&self, runner: &impl TmuxCommandRunner) -> Result<(u32, u32), TmuxError> {
        let target = self.pane_target();
        let output = runner.run(&[
            "display-message",
            "-p",
            "-t",
            &target,
            "-F",
            "#{pane_width}x#{pane_height}",
        ])?;
        parse_size(strip_line_terminator(&output.stdout))
    }

    /// Visible pane contents as plain text, trailing newline kept.
    ///
    /// When tmux fails, the returned error carries its stderr
    /// (see [`TmuxError::stderr`]).
    pub fn capture(&self, runner: &impl TmuxCommandRunner) -> Result<String, TmuxError> {
        let target = self.pane_target();
        let output = runner.run(&["capture-pane", "-t", &target, "-p"])?;
        Ok(output.stdout)
    }

    /// Type `command` into the pane and press Enter.
    pub fn run_command(
        &self,
        runner: &impl TmuxCommandRunner,
        command: &str,
    ) -> Result<(), TmuxError> {
        let target = self.pane_target();
        tracing::debug!(pane = %target, command, "sending keys");
        runner
            .run(&["send-keys", "-t", &target, command, ENTER_KEY])
            .map_err(|e| TmuxError::SendKeys {
                stderr: e.stderr().unwrap_or_default().to_string(),
                source: Box::new(e),
            })?;
        Ok(())
    }
}

fn parse_size(raw: &str) -> Result<(u32, u32), TmuxError> {
    let invalid = || TmuxError::InvalidSize(raw.to_string());
    let (w, h) = raw.split_once('x').ok_or_else(invalid)?;
    let width = w.parse::<u32>().map_err(|_| invalid())?;
    let height = h.parse::<u32>().map_err(|_| invalid())?;
    Ok((width, height))
}
