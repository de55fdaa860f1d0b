// Tasklist - in-memory to-do list with a line-oriented front end

pub mod command;
pub mod filter;
pub mod session;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use command::{Command, ParseError};
pub use filter::Filter;
pub use session::Session;
pub use store::{TaskList, View};
pub use task::{Task, TaskId, now_ms};
