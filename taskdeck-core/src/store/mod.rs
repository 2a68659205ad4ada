//! Record store port
//!
//! The list engine only needs two listing calls; the remaining methods back
//! the CRUD endpoints.

pub mod memory;

pub use memory::InMemoryTodoStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use taskdeck_model::{TodoId, TodoRecord};
use thiserror::Error;

use crate::query::pagination::PageRequest;
use crate::query::types::SortSpec;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Unknown field for store query: {0}")]
    UnknownField(String),

    #[error("Record store error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// One page of records plus totals across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    pub total_pages: u64,
}

/// Substring predicate on a single text field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextFilter {
    pub field: String,
    pub needle: String,
    pub case_insensitive: bool,
}

impl TextFilter {
    pub fn contains_ignore_case(
        field: impl Into<String>,
        needle: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            needle: needle.into(),
            case_insensitive: true,
        }
    }

    pub fn matches(&self, value: &str) -> bool {
        if self.case_insensitive {
            value.to_lowercase().contains(&self.needle.to_lowercase())
        } else {
            value.contains(&self.needle)
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoStore: Send + Sync {
    async fn list_all(
        &self,
        page: PageRequest,
        sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>>;

    async fn list_where_field_contains(
        &self,
        filter: &TextFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>>;

    async fn get(&self, id: TodoId) -> StoreResult<Option<TodoRecord>>;

    async fn exists(&self, id: TodoId) -> StoreResult<bool>;

    /// Inserts or replaces the record with the same id.
    async fn save(&self, record: TodoRecord) -> StoreResult<TodoRecord>;

    /// Returns whether a record was removed.
    async fn delete(&self, id: TodoId) -> StoreResult<bool>;
}
