//! Core data model definitions shared across Taskdeck crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod todo;

pub use error::{Result as ModelResult, ValidationError};
pub use ids::TodoId;
pub use todo::{NewTodo, Todo, TodoPatch, TodoRecord, TodoReplacement};
