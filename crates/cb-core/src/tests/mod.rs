mod capacity;
mod filter;

use crate::{Board, ColumnId, Priority, Task, TaskId};

/// Stock board with the given tasks appended in order.
pub(crate) fn board_with(tasks: Vec<Task>) -> Board {
    let mut board = Board::stock();
    board.tasks = tasks;
    board
}

pub(crate) fn task(id: i64, column: &str, title: &str) -> Task {
    Task::new(
        TaskId(id),
        ColumnId::new(column),
        title.to_string(),
        Priority::Medium,
    )
}
