use crate::tests::{board_with, task};
use crate::TaskFilter;

fn sample_board() -> crate::Board {
    let mut fix_bug = task(1, "todo", "Fix bug");
    fix_bug.labels = "Urgent,Dev".to_string();
    let mut write_docs = task(2, "progress", "Write docs");
    write_docs.labels = "Design".to_string();
    board_with(vec![fix_bug, write_docs])
}

#[test]
fn test_empty_filter_shows_everything() {
    let board = sample_board();
    let filter = TaskFilter::new();

    assert!(filter.is_empty());
    assert_eq!(filter.visible_tasks(&board).len(), 2);
}

#[test]
fn test_label_filter_intersects_task_labels() {
    let board = sample_board();
    let filter = TaskFilter {
        search: String::new(),
        labels: vec!["Dev".to_string()],
    };

    let visible: Vec<&str> = filter
        .visible_tasks(&board)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["Fix bug"]);
}

#[test]
fn test_search_matches_title_substring() {
    let board = sample_board();
    let filter = TaskFilter {
        search: "doc".to_string(),
        labels: Vec::new(),
    };

    let visible: Vec<&str> = filter
        .visible_tasks(&board)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["Write docs"]);
}

#[test]
fn test_search_is_case_insensitive() {
    let board = sample_board();
    let filter = TaskFilter {
        search: "FIX".to_string(),
        labels: Vec::new(),
    };

    assert_eq!(filter.visible_tasks(&board).len(), 1);
}

#[test]
fn test_search_matches_stringified_id() {
    let board = sample_board();
    let filter = TaskFilter {
        search: "2".to_string(),
        labels: Vec::new(),
    };

    let visible: Vec<&str> = filter
        .visible_tasks(&board)
        .iter()
        .map(|t| t.title.as_str())
        .collect();
    assert_eq!(visible, vec!["Write docs"]);
}

#[test]
fn test_label_and_search_are_conjunctive() {
    let board = sample_board();
    let filter = TaskFilter {
        search: "docs".to_string(),
        labels: vec!["dev".to_string()],
    };

    assert!(filter.visible_tasks(&board).is_empty());
}

#[test]
fn test_unlabelled_task_hidden_by_label_filter() {
    let board = board_with(vec![task(1, "todo", "Plain")]);
    let filter = TaskFilter {
        search: String::new(),
        labels: vec!["dev".to_string()],
    };

    assert!(filter.visible_tasks(&board).is_empty());
}

#[test]
fn test_projection_does_not_mutate_board() {
    let board = sample_board();
    let before = board.clone();
    let filter = TaskFilter {
        search: "bug".to_string(),
        labels: vec!["urgent".to_string()],
    };

    let _ = filter.visible_tasks(&board);

    assert_eq!(board, before);
}
