//! CLI definition using clap derive.

use clap::{Args, Parser, Subcommand};
use panectl_tmux::{ListScope, ParsePolicy, TmuxExecutor};

#[derive(Parser, Debug)]
#[command(name = "panectl", about = "Address and drive tmux panes", version)]
pub struct Cli {
    /// tmux binary to run
    #[arg(long, global = true, env = "PANECTL_TMUX_BIN", default_value = "tmux")]
    pub tmux_bin: String,

    /// tmux server socket name (tmux -L)
    #[arg(long, short = 'L', global = true, env = "PANECTL_SOCKET_NAME")]
    pub socket_name: Option<String>,

    /// tmux server socket path (tmux -S); wins over --socket-name
    #[arg(long, short = 'S', global = true, env = "PANECTL_SOCKET_PATH")]
    pub socket_path: Option<String>,

    /// Fail on list-panes lines that are not panes instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn executor(&self) -> TmuxExecutor {
        let mut exec = TmuxExecutor::new(&self.tmux_bin);
        if let Some(ref name) = self.socket_name {
            exec = exec.with_socket_name(name);
        }
        if let Some(ref path) = self.socket_path {
            exec = exec.with_socket_path(path);
        }
        exec
    }

    pub fn policy(&self) -> ParsePolicy {
        if self.strict {
            ParsePolicy::Strict
        } else {
            ParsePolicy::Lenient
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List panes
    Ls(LsOpts),
    /// Print a pane's working directory (default: the client's current pane)
    Path {
        /// Pane target, session:window_id.pane_id
        target: Option<String>,
    },
    /// Select a pane and its window
    Focus {
        /// Pane target, session:window_id.pane_id
        target: String,
    },
    /// Join a pane into another pane's window
    Move {
        /// Pane to move
        source: String,
        /// Any pane in the destination window
        dest: String,
        /// Let the moved pane take focus
        #[arg(long)]
        focus: bool,
    },
    /// Print a pane's size as WIDTHxHEIGHT
    Size {
        /// Pane target, session:window_id.pane_id
        target: String,
    },
    /// Print the visible contents of a pane
    Capture {
        /// Pane target, session:window_id.pane_id
        target: String,
    },
    /// Type a command into a pane and press Enter
    Send {
        /// Pane target, session:window_id.pane_id
        target: String,
        /// Command words, joined with spaces
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },
}

#[derive(Args, Debug, Default)]
pub struct LsOpts {
    /// All panes on the server
    #[arg(short = 'a', long, conflicts_with = "session")]
    pub all: bool,

    /// All panes of the target session
    #[arg(short = 's', long)]
    pub session: bool,

    /// Window (or with -s, session) to list
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Emit JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl LsOpts {
    pub fn scope(&self) -> ListScope {
        match (self.all, self.session, self.target.clone()) {
            (true, _, _) => ListScope::All,
            (false, true, Some(t)) => ListScope::Session(t),
            (false, true, None) => ListScope::CurrentSession,
            (false, false, Some(t)) => ListScope::Window(t),
            (false, false, None) => ListScope::CurrentWindow,
        }
    }
}
