//! In-memory record store.
//!
//! Backs the bundled server and the integration tests. Ordering follows the
//! supplied [`SortSpec`] term by term; filtering and paging happen after the
//! whole table is snapshotted, so the lock is never held across an await.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use taskdeck_model::{TodoId, TodoRecord};
use tracing::trace;

use super::{Page, StoreError, StoreResult, TextFilter, TodoStore};
use crate::query::pagination::{PageRequest, total_pages};
use crate::query::types::{SortDirection, SortSpec};
use crate::shapes::{COMPLETED_FIELD, ID_FIELD, TITLE_FIELD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordField {
    Id,
    Title,
    Completed,
}

impl RecordField {
    fn parse(name: &str) -> Option<Self> {
        match name {
            ID_FIELD => Some(RecordField::Id),
            TITLE_FIELD => Some(RecordField::Title),
            COMPLETED_FIELD => Some(RecordField::Completed),
            _ => None,
        }
    }

    fn compare(self, a: &TodoRecord, b: &TodoRecord) -> Ordering {
        match self {
            RecordField::Id => a.id.cmp(&b.id),
            RecordField::Title => a.title.cmp(&b.title),
            RecordField::Completed => a.completed.cmp(&b.completed),
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryTodoStore {
    records: RwLock<HashMap<TodoId, TodoRecord>>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = TodoRecord>) -> Self {
        let records = records
            .into_iter()
            .map(|record| (record.id, record))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    fn query(
        &self,
        filter: Option<&TextFilter>,
        page: PageRequest,
        sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>> {
        let order = sort
            .iter()
            .map(|term| {
                RecordField::parse(&term.key)
                    .map(|field| (field, term.direction))
                    .ok_or_else(|| StoreError::UnknownField(term.key.clone()))
            })
            .collect::<StoreResult<Vec<_>>>()?;

        if let Some(filter) = filter
            && RecordField::parse(&filter.field) != Some(RecordField::Title)
        {
            return Err(StoreError::UnknownField(filter.field.clone()));
        }

        let mut matching: Vec<TodoRecord> = self
            .records
            .read()
            .values()
            .filter(|record| filter.is_none_or(|f| f.matches(&record.title)))
            .cloned()
            .collect();

        matching.sort_by(|a, b| {
            order
                .iter()
                .map(|(field, direction)| {
                    let ordering = field.compare(a, b);
                    if direction.is_descending() {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                })
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        let total_elements = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let content: Vec<TodoRecord> = matching
            .into_iter()
            .skip(offset)
            .take(page.size() as usize)
            .collect();

        trace!(
            total_elements,
            returned = content.len(),
            page = page.index(),
            "in-memory list query"
        );

        Ok(Page {
            content,
            total_elements,
            total_pages: total_pages(total_elements, page.size()),
        })
    }
}

#[async_trait]
impl TodoStore for InMemoryTodoStore {
    async fn list_all(
        &self,
        page: PageRequest,
        sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>> {
        self.query(None, page, sort)
    }

    async fn list_where_field_contains(
        &self,
        filter: &TextFilter,
        page: PageRequest,
        sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>> {
        self.query(Some(filter), page, sort)
    }

    async fn get(&self, id: TodoId) -> StoreResult<Option<TodoRecord>> {
        Ok(self.records.read().get(&id).cloned())
    }

    async fn exists(&self, id: TodoId) -> StoreResult<bool> {
        Ok(self.records.read().contains_key(&id))
    }

    async fn save(&self, record: TodoRecord) -> StoreResult<TodoRecord> {
        self.records.write().insert(record.id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: TodoId) -> StoreResult<bool> {
        Ok(self.records.write().remove(&id).is_some())
    }
}
