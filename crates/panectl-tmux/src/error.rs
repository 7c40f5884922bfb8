//! Error types for the tmux backend.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TmuxError {
    #[error("tmux command failed ({status}): {stderr}")]
    CommandFailed { status: String, stderr: String },

    #[error("failed to parse list-panes line {line_num}: {detail}")]
    ParseError { line_num: usize, detail: String },

    #[error("list-panes line {line_num} does not match the pane format: {line:?}")]
    UnmatchedLine { line_num: usize, line: String },

    #[error("malformed pane size {0:?}, expected <width>x<height>")]
    InvalidSize(String),

    #[error("send-keys failed: {source}: {stderr}")]
    SendKeys {
        stderr: String,
        #[source]
        source: Box<TmuxError>,
    },

    #[error("tmux io error: {0}")]
    Io(#[from] std::io::Error),
}

impl TmuxError {
    /// Diagnostic text tmux wrote to stderr, when the failure carries any.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { stderr, .. } | Self::SendKeys { stderr, .. } => {
                Some(stderr.as_str())
            }
            _ => None,
        }
    }
}
