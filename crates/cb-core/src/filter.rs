use crate::board::Board;
use crate::models::task::Task;

/// Search text plus selected labels, projected over the task list.
///
/// A pure view: recomputed whenever its inputs change, never mutates the
/// board, and is independent of any in-progress drag.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub search: String,
    pub labels: Vec<String>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.labels.is_empty()
    }

    /// A task is visible iff the label sets intersect (or no labels are
    /// selected) and the search text matches its title or id (or is empty).
    /// All comparisons are case-insensitive.
    pub fn matches(&self, task: &Task) -> bool {
        if !self.labels.is_empty() {
            let task_labels = task.label_set();
            let selected = self
                .labels
                .iter()
                .any(|label| task_labels.contains(&label.to_lowercase()));
            if !selected {
                return false;
            }
        }

        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle) || task.id.to_string().contains(&needle)
    }

    pub fn visible_tasks<'a>(&self, board: &'a Board) -> Vec<&'a Task> {
        board.tasks.iter().filter(|task| self.matches(task)).collect()
    }
}
