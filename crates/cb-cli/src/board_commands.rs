use clap::Subcommand;

#[derive(Subcommand)]
pub enum BoardCommands {
    /// Print the board: columns left to right, tasks top to bottom
    Show {
        /// Case-insensitive search over title and id
        #[arg(long)]
        search: Option<String>,

        /// Only show tasks carrying this label; may be repeated
        #[arg(long)]
        label: Vec<String>,
    },
}
