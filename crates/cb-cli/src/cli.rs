use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "cb")]
#[command(about = "Cropboard CLI - kanban task board for the farm dashboard")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Server URL (defaults to the configured server.url)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// User whose tasks to operate on (defaults to board.user_id)
    #[arg(long, global = true)]
    pub(crate) user_id: Option<String>,

    /// Project the tasks belong to (defaults to board.project)
    #[arg(long, global = true)]
    pub(crate) project: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
