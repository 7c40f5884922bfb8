//! TmuxCommandRunner trait and TmuxExecutor (sync subprocess wrapper).
//! Every pane operation goes through the trait so tests can inject fakes.

use crate::error::TmuxError;

/// Captured output of one successful tmux invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn from_stdout(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }
}

/// Trait for executing tmux commands. Enables mock injection for testing.
///
/// A non-zero exit must surface as [`TmuxError::CommandFailed`] carrying the
/// captured stderr, so callers can show tmux's own diagnostic.
pub trait TmuxCommandRunner: Send + Sync {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, TmuxError>;
}

impl<T: TmuxCommandRunner + ?Sized> TmuxCommandRunner for &T {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, TmuxError> {
        (**self).run(args)
    }
}

/// Real tmux executor using `std::process::Command`.
#[derive(Debug, Clone)]
pub struct TmuxExecutor {
    tmux_bin: String,
    socket_path: Option<String>,
    socket_name: Option<String>,
}

impl TmuxExecutor {
    pub fn new(tmux_bin: impl Into<String>) -> Self {
        Self {
            tmux_bin: tmux_bin.into(),
            socket_path: None,
            socket_name: None,
        }
    }

    #[must_use]
    pub fn with_socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn with_socket_name(mut self, name: impl Into<String>) -> Self {
        self.socket_name = Some(name.into());
        self
    }

    /// Server selection flags placed before the command verb.
    fn server_args(&self) -> Vec<&str> {
        // Socket path takes precedence over socket name
        if let Some(path) = self.socket_path.as_deref() {
            vec!["-S", path]
        } else if let Some(name) = self.socket_name.as_deref() {
            vec!["-L", name]
        } else {
            Vec::new()
        }
    }
}

impl Default for TmuxExecutor {
    fn default() -> Self {
        Self::new("tmux")
    }
}

impl TmuxCommandRunner for TmuxExecutor {
    fn run(&self, args: &[&str]) -> Result<CommandOutput, TmuxError> {
        let mut cmd = std::process::Command::new(&self.tmux_bin);
        cmd.args(self.server_args());
        cmd.args(args);
        tracing::debug!(bin = %self.tmux_bin, ?args, "running tmux");

        let output = cmd.output().map_err(TmuxError::Io)?;
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            let status = output
                .status
                .code()
                .map(|c| format!("exit code {c}"))
                .unwrap_or_else(|| "killed by signal".to_string());
            return Err(TmuxError::CommandFailed {
                status,
                stderr: stderr.trim_end().to_string(),
            });
        }
        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
        })
    }
}
