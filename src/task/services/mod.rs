//! Service layer orchestrating task board use cases.

mod board;

pub use board::{
    ChecklistItemSpec, CreateTaskRequest, TaskBoardError, TaskBoardResult, TaskBoardService,
    UpdateTaskRequest,
};
