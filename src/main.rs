use clap::Parser;
use eyre::Result;
use std::io;
use tasklist::{Filter, Session, TaskList};
use tracing::Level;

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(about = "Tasklist - an in-memory to-do list. Type a line to add it, `help` for commands")]
#[command(version)]
struct Cli {
    /// Start with completed tasks hidden
    #[arg(long)]
    hide_completed: bool,

    /// Disable ANSI colors in the rendered list
    #[arg(long)]
    no_color: bool,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let filter = if cli.hide_completed { Filter::ACTIVE } else { Filter::ALL };
    let mut session = Session::new(TaskList::with_filter(filter), io::stdout().lock());
    session.run(io::stdin().lock())?;

    Ok(())
}
