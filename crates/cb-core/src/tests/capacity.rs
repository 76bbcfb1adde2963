use crate::tests::{board_with, task};
use crate::{BoardCommand, ColumnId, ColumnLimits, CoreError};

#[test]
fn test_no_limit_never_breaches() {
    let board = board_with(vec![task(1, "todo", "a"), task(2, "todo", "b")]);
    let limits = ColumnLimits::new();

    assert!(!limits.is_breached(&board, &ColumnId::new("todo")));
}

#[test]
fn test_blank_input_clears_limit() {
    let column = ColumnId::new("todo");
    let mut limits = ColumnLimits::new();

    limits.set_limit(&column, "2").unwrap();
    assert_eq!(limits.limit(&column), Some(2));

    limits.set_limit(&column, "   ").unwrap();
    assert_eq!(limits.limit(&column), None);
}

#[test]
fn test_non_numeric_input_rejected_and_limit_unchanged() {
    let column = ColumnId::new("todo");
    let mut limits = ColumnLimits::new();
    limits.set_limit(&column, "3").unwrap();

    let result = limits.set_limit(&column, "3x");

    assert!(matches!(result, Err(CoreError::Validation { .. })));
    assert_eq!(limits.limit(&column), Some(3));
}

#[test]
fn test_negative_input_rejected() {
    let mut limits = ColumnLimits::new();
    assert!(limits.set_limit(&ColumnId::new("todo"), "-1").is_err());
}

#[test]
fn test_breach_is_strictly_greater_than_limit() {
    let column = ColumnId::new("todo");
    let board = board_with(vec![task(1, "todo", "a"), task(2, "todo", "b")]);
    let mut limits = ColumnLimits::new();
    limits.set_limit(&column, "2").unwrap();

    assert!(!limits.is_breached(&board, &column));

    let board = board.apply(BoardCommand::AddTask(task(3, "todo", "c")));
    assert!(limits.is_breached(&board, &column));
}

#[test]
fn test_limit_is_advisory_only() {
    // Three tasks already over a limit of 2: adding a fourth still works.
    let column = ColumnId::new("todo");
    let board = board_with(vec![
        task(1, "todo", "a"),
        task(2, "todo", "b"),
        task(3, "todo", "c"),
    ]);
    let mut limits = ColumnLimits::new();
    limits.set_limit(&column, "2").unwrap();
    assert!(limits.is_breached(&board, &column));

    let board = board.apply(BoardCommand::AddTask(task(4, "todo", "d")));

    assert_eq!(board.column_task_count(&column), 4);
    assert!(limits.is_breached(&board, &column));
}
