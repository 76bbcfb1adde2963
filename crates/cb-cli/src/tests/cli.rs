use crate::cli::Cli;
use crate::commands::Commands;
use crate::task_commands::TaskCommands;

use clap::Parser;

#[test]
fn test_parse_task_add() {
    let cli = Cli::try_parse_from([
        "cb", "task", "add", "--title", "Weed rows", "--column", "progress", "--priority", "high",
    ])
    .unwrap();

    match cli.command {
        Commands::Task {
            action:
                TaskCommands::Add {
                    title,
                    column,
                    priority,
                    labels,
                },
        } => {
            assert_eq!(title, "Weed rows");
            assert_eq!(column, "progress");
            assert_eq!(priority.as_deref(), Some("high"));
            assert!(labels.is_none());
        }
        _ => panic!("parsed into the wrong command"),
    }
}

#[test]
fn test_parse_task_add_defaults_to_todo() {
    let cli = Cli::try_parse_from(["cb", "task", "add", "--title", "x"]).unwrap();

    match cli.command {
        Commands::Task {
            action: TaskCommands::Add { column, .. },
        } => assert_eq!(column, "todo"),
        _ => panic!("parsed into the wrong command"),
    }
}

#[test]
fn test_parse_move_requires_a_target() {
    assert!(Cli::try_parse_from(["cb", "task", "move", "7"]).is_err());
}

#[test]
fn test_parse_move_targets_conflict() {
    let result = Cli::try_parse_from([
        "cb",
        "task",
        "move",
        "7",
        "--onto-column",
        "done",
        "--onto-task",
        "9",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_parse_invalid_priority_rejected() {
    let result = Cli::try_parse_from(["cb", "task", "add", "--title", "x", "--priority", "urgent"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from([
        "cb",
        "board",
        "show",
        "--server",
        "http://10.0.0.2:9000",
        "--project",
        "vineyard",
        "--pretty",
    ])
    .unwrap();

    assert_eq!(cli.server.as_deref(), Some("http://10.0.0.2:9000"));
    assert_eq!(cli.project.as_deref(), Some("vineyard"));
    assert!(cli.pretty);
}
