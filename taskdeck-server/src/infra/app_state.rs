use std::{fmt, sync::Arc};

use taskdeck_config::Config;
use taskdeck_core::{TodoService, TodoStore};

#[derive(Clone)]
pub struct AppState {
    pub todos: TodoService,
    pub config: Arc<Config>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("todos", &self.todos)
            .finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, store: Arc<dyn TodoStore>) -> Self {
        let todos = TodoService::new(store, config.listing.sortable_access);
        Self { todos, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
