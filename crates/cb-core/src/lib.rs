pub mod board;
pub mod capacity;
pub mod command;
pub mod drag;
pub mod error;
pub mod filter;
pub mod models;

pub use board::Board;
pub use capacity::ColumnLimits;
pub use command::BoardCommand;
pub use drag::{DragPayload, DragSession, DropTarget};
pub use error::{CoreError, CoreResult};
pub use filter::TaskFilter;
pub use models::column::{Column, ColumnId};
pub use models::priority::Priority;
pub use models::status::Status;
pub use models::task::{Task, TaskId};
pub use models::task_patch::TaskPatch;

#[cfg(test)]
mod tests;
