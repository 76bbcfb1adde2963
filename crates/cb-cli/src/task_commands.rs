use clap::Subcommand;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Create a task at the end of a column
    Add {
        /// Task title
        #[arg(long)]
        title: String,

        /// Column id: todo, progress, check or done
        #[arg(long, default_value = "todo")]
        column: String,

        /// Priority: low, medium or high (default: medium)
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// Comma-separated labels
        #[arg(long)]
        labels: Option<String>,
    },

    /// Update a task's title, priority or labels
    Update {
        /// Task id
        id: i64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New priority: low, medium or high
        #[arg(long, value_parser = ["low", "medium", "high"])]
        priority: Option<String>,

        /// New comma-separated labels (empty string clears them)
        #[arg(long)]
        labels: Option<String>,
    },

    /// Delete a task
    Delete {
        /// Task id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// List visible tasks, optionally filtered
    List {
        /// Case-insensitive search over title and id
        #[arg(long)]
        search: Option<String>,

        /// Only show tasks carrying this label; may be repeated
        #[arg(long)]
        label: Vec<String>,
    },

    /// Drag a task onto a column or another task, then persist its status
    Move {
        /// Task id
        id: i64,

        /// Drop the task onto this column
        #[arg(long, required_unless_present = "onto_task", conflicts_with = "onto_task")]
        onto_column: Option<String>,

        /// Drop the task onto this task
        #[arg(long)]
        onto_task: Option<i64>,
    },
}
