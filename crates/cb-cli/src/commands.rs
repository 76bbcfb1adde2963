use crate::board_commands::BoardCommands;
use crate::column_commands::ColumnCommands;
use crate::task_commands::TaskCommands;

use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Task operations
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },

    /// Column operations
    Column {
        #[command(subcommand)]
        action: ColumnCommands,
    },

    /// Whole-board views
    Board {
        #[command(subcommand)]
        action: BoardCommands,
    },
}
