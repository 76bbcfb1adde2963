pub mod column;
pub mod priority;
pub mod status;
pub mod task;
pub mod task_patch;
