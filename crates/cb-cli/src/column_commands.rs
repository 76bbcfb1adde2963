use clap::Subcommand;

#[derive(Subcommand)]
pub enum ColumnCommands {
    /// Rename a column in place (columns are not persisted remotely)
    Rename {
        /// Column id: todo, progress, check or done
        id: String,

        /// New display title
        #[arg(long)]
        title: String,
    },

    /// Evaluate an advisory task-count limit against a column
    Limit {
        /// Column id: todo, progress, check or done
        id: String,

        /// Limit as a non-negative integer; blank means unlimited
        #[arg(long, default_value = "")]
        limit: String,
    },

    /// Drag a column onto another column to reorder the lanes
    Move {
        /// Column id to drag
        id: String,

        /// Column id to drop it onto
        #[arg(long)]
        onto: String,
    },
}
