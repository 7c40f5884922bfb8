//! panectl: list tmux panes and drive them by `session:window_id.pane_id` address.

use clap::Parser;

mod cli;
mod cmd_ls;
mod cmd_pane;

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    let filter = std::env::var("PANECTL_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let runner = args.executor();
    let policy = args.policy();
    tracing::debug!(?policy, "panectl starting");

    match args.command {
        cli::Command::Ls(opts) => {
            cmd_ls::cmd_ls(&runner, &opts.scope(), policy, opts.json)?;
        }
        cli::Command::Path { target } => {
            println!("{}", cmd_pane::cmd_path(&runner, target.as_deref(), policy)?);
        }
        cli::Command::Focus { target } => {
            cmd_pane::cmd_focus(&runner, &target, policy)?;
        }
        cli::Command::Move {
            source,
            dest,
            focus,
        } => {
            let window = cmd_pane::cmd_move(&runner, &source, &dest, focus, policy)?;
            println!("{window}");
        }
        cli::Command::Size { target } => {
            println!("{}", cmd_pane::cmd_size(&runner, &target, policy)?);
        }
        cli::Command::Capture { target } => {
            // Buffer is printed as-is, trailing newline included.
            print!("{}", cmd_pane::cmd_capture(&runner, &target, policy)?);
        }
        cli::Command::Send { target, command } => {
            cmd_pane::cmd_send(&runner, &target, &command, policy)?;
        }
    }

    Ok(())
}
