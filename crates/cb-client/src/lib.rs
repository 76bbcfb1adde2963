//! REST gateway client and board service.
//!
//! `Client` speaks the task backend's wire contract; `BoardService` wraps it
//! with the in-memory board, applying every mutation optimistically and
//! rolling it back if the gateway call fails.

pub(crate) mod client;
pub(crate) mod dto;
pub(crate) mod error;
pub(crate) mod service;

pub use client::Client;
pub use dto::{AddTaskRequest, AddTaskResponse, TaskDto, TaskListResponse, UpdateTaskRequest};
pub use error::{ClientError, ClientResult, ServiceError, ServiceResult};
pub use service::BoardService;

#[cfg(test)]
mod tests;
