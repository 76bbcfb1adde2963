//! cb - Cropboard CLI
//!
//! Drives the kanban board against the task backend: create, update, delete
//! and drag tasks, reorder lanes, and print board views as JSON.
//!
//! # Examples
//!
//! ```bash
//! # Show the board
//! cb board show --pretty
//!
//! # Create a task
//! cb task add --title "Write report" --column todo --priority high
//!
//! # Drag a task into another lane and persist the status change
//! cb task move 101 --onto-column progress
//! ```

mod board_commands;
mod cli;
mod column_commands;
mod commands;
mod error;
mod logger;
mod task_commands;

#[cfg(test)]
mod tests;

use crate::board_commands::BoardCommands;
use crate::cli::Cli;
use crate::column_commands::ColumnCommands;
use crate::commands::Commands;
use crate::error::{CliError, CliResult};
use crate::task_commands::TaskCommands;

use std::io::Write;
use std::process::ExitCode;
use std::str::FromStr;

use cb_client::{BoardService, Client};
use cb_config::Config;
use cb_core::{
    Board, ColumnId, ColumnLimits, DropTarget, Priority, Task, TaskFilter, TaskId, TaskPatch,
};
use clap::Parser;
use serde_json::{Value, json};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing output: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    // Config file/env first, explicit flags win
    let mut config = Config::load()?;
    if let Some(server) = cli.server {
        config.server.url = server;
    }
    if let Some(user_id) = cli.user_id {
        config.board.user_id = user_id;
    }
    if let Some(project) = cli.project {
        config.board.project = project;
    }
    config.validate()?;

    logger::initialize(config.logging.level, config.logging.colored)?;
    config.log_summary();

    let client = Client::new(&config.server.url);
    let mut service = BoardService::new(client, &config.board.user_id, &config.board.project);
    service.load().await?;

    match cli.command {
        Commands::Task { action } => match action {
            TaskCommands::Add {
                title,
                column,
                priority,
                labels,
            } => {
                let column = ColumnId::new(column.as_str());
                let priority = parse_priority(priority.as_deref())?;
                let labels = labels.unwrap_or_default();

                let id = service.add_task(&column, &title, priority, &labels).await?;
                Ok(task_json(known_task(service.board(), id)?))
            }

            TaskCommands::Update {
                id,
                title,
                priority,
                labels,
            } => {
                let id = TaskId(id);
                let patch = TaskPatch {
                    title,
                    priority: priority
                        .as_deref()
                        .map(Priority::from_str)
                        .transpose()?,
                    labels,
                };
                if patch.is_empty() {
                    return Err(CliError::Usage(
                        "nothing to update: pass --title, --priority or --labels".to_string(),
                    ));
                }

                service.update_task(id, patch).await?;
                Ok(task_json(known_task(service.board(), id)?))
            }

            TaskCommands::Delete { id, yes } => {
                let id = TaskId(id);
                if !yes && !confirm_delete(id)? {
                    return Ok(json!({ "task_id": id.0, "deleted": false }));
                }

                service.delete_task(id).await?;
                Ok(json!({ "task_id": id.0, "deleted": true }))
            }

            TaskCommands::List { search, label } => {
                let filter = TaskFilter {
                    search: search.unwrap_or_default(),
                    labels: label,
                };

                let tasks: Vec<Value> = filter
                    .visible_tasks(service.board())
                    .into_iter()
                    .map(task_json)
                    .collect();
                Ok(json!({ "tasks": tasks }))
            }

            TaskCommands::Move {
                id,
                onto_column,
                onto_task,
            } => {
                let id = TaskId(id);
                let target = match onto_task {
                    Some(task_id) => DropTarget::Task(TaskId(task_id)),
                    // clap guarantees onto_column is present here
                    None => DropTarget::Column(ColumnId::new(
                        onto_column.unwrap_or_default().as_str(),
                    )),
                };

                if !service.move_task(id, &target) {
                    return Err(CliError::Usage(format!("no task with id {id}")));
                }
                service.sync_task(id).await?;
                Ok(task_json(known_task(service.board(), id)?))
            }
        },

        Commands::Column { action } => match action {
            ColumnCommands::Rename { id, title } => {
                let column = ColumnId::new(id.as_str());
                if !service.rename_column(&column, &title) {
                    return Err(CliError::Usage(format!("no column with id {id}")));
                }
                Ok(json!({ "id": id, "title": title }))
            }

            ColumnCommands::Limit { id, limit } => {
                let column = ColumnId::new(id.as_str());
                let board = service.board();
                if board.column(&column).is_none() {
                    return Err(CliError::Usage(format!("no column with id {id}")));
                }

                let mut limits = ColumnLimits::new();
                limits.set_limit(&column, &limit)?;

                Ok(json!({
                    "id": id,
                    "limit": limits.limit(&column),
                    "task_count": board.column_task_count(&column),
                    "breached": limits.is_breached(board, &column),
                }))
            }

            ColumnCommands::Move { id, onto } => {
                let column = ColumnId::new(id.as_str());
                let over = ColumnId::new(onto.as_str());
                if !service.move_column(&column, &over) {
                    return Err(CliError::Usage(format!(
                        "unknown column in move: {id} onto {onto}"
                    )));
                }

                let columns: Vec<Value> = service
                    .board()
                    .columns
                    .iter()
                    .map(|c| json!({ "id": c.id.as_str(), "title": c.title }))
                    .collect();
                Ok(json!({ "columns": columns }))
            }
        },

        Commands::Board { action } => match action {
            BoardCommands::Show { search, label } => {
                let filter = TaskFilter {
                    search: search.unwrap_or_default(),
                    labels: label,
                };
                Ok(board_json(service.board(), &filter))
            }
        },
    }
}

fn parse_priority(raw: Option<&str>) -> CliResult<Priority> {
    Ok(raw.map(Priority::from_str).transpose()?.unwrap_or_default())
}

fn known_task(board: &Board, id: TaskId) -> CliResult<&Task> {
    board
        .task(id)
        .ok_or_else(|| CliError::Usage(format!("no task with id {id}")))
}

/// Render a task in the backend's wire shape, plus its column.
fn task_json(task: &Task) -> Value {
    json!({
        "task_id": task.id.0,
        "task": task.title,
        "type": task.labels,
        "status": task.status().ok().map(|s| s.as_str().to_string()),
        "priority": task.priority.as_str(),
        "column": task.column_id.as_str(),
    })
}

fn board_json(board: &Board, filter: &TaskFilter) -> Value {
    let columns: Vec<Value> = board
        .columns
        .iter()
        .map(|column| {
            let tasks: Vec<Value> = board
                .tasks_in(&column.id)
                .into_iter()
                .filter(|task| filter.matches(task))
                .map(task_json)
                .collect();

            json!({
                "id": column.id.as_str(),
                "title": column.title,
                "tasks": tasks,
            })
        })
        .collect();

    json!({ "columns": columns })
}

/// Yes/no gate before a destructive delete.
fn confirm_delete(id: TaskId) -> CliResult<bool> {
    print!("Delete task {id}? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
