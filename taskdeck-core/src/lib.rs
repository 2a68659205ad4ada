//! Core library for the Taskdeck todo service.
//!
//! The interesting part lives in [`query`]: it turns the raw `sort`, `q`,
//! `page` and `size` request inputs into a fully specified store query and
//! the metadata reported back to the client. Everything else here is thin
//! plumbing around a [`store::TodoStore`] port.
#![allow(missing_docs)]

#[cfg(feature = "demo")]
pub mod demo;
pub mod error;
pub mod mapper;
pub mod query;
pub mod service;
pub mod shapes;
pub mod store;

pub use error::{Result, TodoError};
pub use query::{
    ListMetadata, ListOutcome, ListPlan, ListQueryEngine, ListRequest,
    PageRequest, ResolvedSort, SortDirection, SortSpec, SortTerm,
};
pub use service::TodoService;
pub use store::{InMemoryTodoStore, Page, StoreError, TextFilter, TodoStore};
pub use taskdeck_model::{
    NewTodo, Todo, TodoId, TodoPatch, TodoRecord, TodoReplacement,
    ValidationError,
};
