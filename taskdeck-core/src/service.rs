//! Application service for the todo resource.
//!
//! Wraps the store port and the list engine; every method returns client
//! representations.

use std::sync::Arc;

use taskdeck_model::{NewTodo, Todo, TodoId, TodoPatch, TodoReplacement};
use tracing::{debug, info};

use crate::error::{Result, TodoError};
use crate::mapper;
use crate::query::inspector::SortableAccess;
use crate::query::list::{ListOutcome, ListQueryEngine, ListRequest};
use crate::store::TodoStore;

#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
    listing: ListQueryEngine,
}

impl std::fmt::Debug for TodoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoService")
            .field("listing", &self.listing)
            .finish_non_exhaustive()
    }
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>, access: SortableAccess) -> Self {
        let listing = ListQueryEngine::new(Arc::clone(&store), access);
        Self { store, listing }
    }

    pub async fn list(&self, request: &ListRequest) -> Result<ListOutcome<Todo>> {
        let outcome = self.listing.list_page(request).await?;
        Ok(outcome.map(mapper::to_todo))
    }

    pub async fn get(&self, id: TodoId) -> Result<Todo> {
        self.store
            .get(id)
            .await?
            .map(mapper::to_todo)
            .ok_or(TodoError::NotFound(id))
    }

    pub async fn create(&self, payload: &NewTodo) -> Result<Todo> {
        let title = payload.validate()?;
        let saved = self.store.save(mapper::new_record(title)).await?;
        info!(id = %saved.id, "todo created");
        Ok(mapper::to_todo(saved))
    }

    pub async fn replace(
        &self,
        id: TodoId,
        payload: &TodoReplacement,
    ) -> Result<Todo> {
        let (title, completed) = payload.validate()?;
        if !self.store.exists(id).await? {
            return Err(TodoError::NotFound(id));
        }

        let saved = self
            .store
            .save(mapper::replacement_record(id, title, completed))
            .await?;
        debug!(id = %id, "todo replaced");
        Ok(mapper::to_todo(saved))
    }

    pub async fn patch(&self, id: TodoId, payload: &TodoPatch) -> Result<Todo> {
        payload.validate()?;
        let current = self.store.get(id).await?.ok_or(TodoError::NotFound(id))?;

        let saved = self
            .store
            .save(mapper::patched_record(&current, payload))
            .await?;
        debug!(id = %id, "todo patched");
        Ok(mapper::to_todo(saved))
    }

    pub async fn delete(&self, id: TodoId) -> Result<()> {
        if !self.store.delete(id).await? {
            return Err(TodoError::NotFound(id));
        }
        info!(id = %id, "todo deleted");
        Ok(())
    }
}
