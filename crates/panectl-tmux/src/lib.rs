//! panectl-tmux: pane addressing over the tmux CLI.
//! Lists panes into structured records and drives per-pane commands by
//! encoding those records back into tmux target strings. Every tmux call goes
//! through [`TmuxCommandRunner`], so nothing here spawns a process directly
//! except [`TmuxExecutor`].

pub mod error;
pub mod executor;
pub mod pane;
pub mod pane_info;
pub mod registry;
pub mod target;

pub use error::TmuxError;
pub use executor::{CommandOutput, TmuxCommandRunner, TmuxExecutor};
pub use pane_info::{LIST_PANES_FORMAT, Pane, ParsePolicy, parse_list_panes_output};
pub use registry::{ListScope, current_path, find_pane, list_panes};
pub use target::{pane_target, window_target};
