use axum::{Router, routing::get};

use crate::{AppState, handlers::todos};

pub const TODOS: &str = "/todos";
pub const TODO_BY_ID: &str = "/todos/{id}";

/// Create all v1 API routes
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            TODOS,
            get(todos::list_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            TODO_BY_ID,
            get(todos::get_todo_handler)
                .put(todos::replace_todo_handler)
                .patch(todos::patch_todo_handler)
                .delete(todos::delete_todo_handler),
        )
}
