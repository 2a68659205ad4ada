#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use axum_test::TestServer;
use taskdeck_config::Config;
use taskdeck_core::{
    InMemoryTodoStore, Page, PageRequest, SortSpec, StoreError, TextFilter,
    TodoId, TodoRecord, TodoStore, demo, store::StoreResult,
};
use taskdeck_server::{AppState, create_app};

pub fn test_config() -> Config {
    let mut config = Config::default();
    config.demo.seed = false;
    config
}

pub fn build_server(store: Arc<dyn TodoStore>) -> Result<TestServer> {
    build_server_with_config(test_config(), store)
}

pub fn build_server_with_config(
    config: Config,
    store: Arc<dyn TodoStore>,
) -> Result<TestServer> {
    let state = AppState::new(Arc::new(config), store);
    TestServer::new(create_app(state)).map_err(|err| anyhow!(err.to_string()))
}

/// Server backed by an in-memory store holding the demo todos.
pub async fn seeded_server() -> Result<TestServer> {
    let store = Arc::new(InMemoryTodoStore::new());
    demo::seed(store.as_ref()).await?;
    build_server(store)
}

/// Store whose every operation fails as if the backend were down.
#[derive(Debug, Default)]
pub struct UnavailableStore;

fn unavailable<T>() -> StoreResult<T> {
    Err(StoreError::Unavailable("connection refused".into()))
}

#[async_trait]
impl TodoStore for UnavailableStore {
    async fn list_all(
        &self,
        _page: PageRequest,
        _sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>> {
        unavailable()
    }

    async fn list_where_field_contains(
        &self,
        _filter: &TextFilter,
        _page: PageRequest,
        _sort: &SortSpec,
    ) -> StoreResult<Page<TodoRecord>> {
        unavailable()
    }

    async fn get(&self, _id: TodoId) -> StoreResult<Option<TodoRecord>> {
        unavailable()
    }

    async fn exists(&self, _id: TodoId) -> StoreResult<bool> {
        unavailable()
    }

    async fn save(&self, _record: TodoRecord) -> StoreResult<TodoRecord> {
        unavailable()
    }

    async fn delete(&self, _id: TodoId) -> StoreResult<bool> {
        unavailable()
    }
}
