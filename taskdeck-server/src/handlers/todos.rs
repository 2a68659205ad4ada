use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode},
};
use serde::Deserialize;
use taskdeck_core::{ListMetadata, ListRequest};
use taskdeck_model::{NewTodo, Todo, TodoId, TodoPatch, TodoReplacement};
use tracing::debug;
use uuid::Uuid;

use crate::infra::{app_state::AppState, errors::AppResult};

pub const PAGE_HEADER: &str = "x-page";
pub const SIZE_HEADER: &str = "x-size";
pub const TOTAL_ELEMENTS_HEADER: &str = "x-total-elements";
pub const TOTAL_PAGES_HEADER: &str = "x-total-pages";
pub const SORT_HEADER: &str = "x-sort";
pub const SORT_DIR_HEADER: &str = "x-sort-dir";

/// Headers carrying the applied list parameters, exposed to browsers.
pub const LIST_HEADERS: [&str; 6] = [
    PAGE_HEADER,
    SIZE_HEADER,
    TOTAL_ELEMENTS_HEADER,
    TOTAL_PAGES_HEADER,
    SORT_HEADER,
    SORT_DIR_HEADER,
];

/// Raw list parameters. Everything stays a string here so that a
/// non-numeric `page` or `size` degrades to "absent" instead of a 400.
#[derive(Debug, Default, Deserialize)]
pub struct ListTodosQuery {
    pub sort: Option<String>,
    pub q: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

impl ListTodosQuery {
    pub fn into_request(self) -> ListRequest {
        ListRequest {
            sort: self.sort,
            q: self.q,
            page: parse_int(self.page.as_deref()),
            size: parse_int(self.size.as_deref()),
        }
    }
}

fn parse_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

/// List todos
///
/// `GET /api/v1/todos?sort=-completed&q=grocer&page=0&size=20`
///
/// The body is the page of todos. The applied page, size, sort key and
/// direction plus the totals are returned as `X-Page`, `X-Size`,
/// `X-Sort`, `X-Sort-Dir`, `X-Total-Elements` and `X-Total-Pages`.
pub async fn list_todos_handler(
    State(state): State<AppState>,
    Query(query): Query<ListTodosQuery>,
) -> AppResult<(HeaderMap, Json<Vec<Todo>>)> {
    let request = query.into_request();
    let outcome = state.todos.list(&request).await?;
    debug!(
        page = outcome.metadata.applied_page,
        size = outcome.metadata.applied_size,
        sort_key = %outcome.metadata.applied_sort_key,
        returned = outcome.items.len(),
        "listed todos"
    );

    Ok((list_headers(&outcome.metadata), Json(outcome.items)))
}

fn list_headers(metadata: &ListMetadata) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static(PAGE_HEADER),
        HeaderValue::from(metadata.applied_page),
    );
    headers.insert(
        HeaderName::from_static(SIZE_HEADER),
        HeaderValue::from(metadata.applied_size),
    );
    headers.insert(
        HeaderName::from_static(TOTAL_ELEMENTS_HEADER),
        HeaderValue::from(metadata.total_elements),
    );
    headers.insert(
        HeaderName::from_static(TOTAL_PAGES_HEADER),
        HeaderValue::from(metadata.total_pages),
    );
    // Sort keys always come from a shape's field table.
    if let Ok(value) = HeaderValue::from_str(&metadata.applied_sort_key) {
        headers.insert(HeaderName::from_static(SORT_HEADER), value);
    }
    headers.insert(
        HeaderName::from_static(SORT_DIR_HEADER),
        HeaderValue::from_static(metadata.applied_sort_direction.as_str()),
    );
    headers
}

pub async fn get_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.get(TodoId(id)).await?;
    Ok(Json(todo))
}

pub async fn create_todo_handler(
    State(state): State<AppState>,
    Json(payload): Json<NewTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let todo = state.todos.create(&payload).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn replace_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TodoReplacement>,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.replace(TodoId(id), &payload).await?;
    Ok(Json(todo))
}

pub async fn patch_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TodoPatch>,
) -> AppResult<Json<Todo>> {
    let todo = state.todos.patch(TodoId(id), &payload).await?;
    Ok(Json(todo))
}

pub async fn delete_todo_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.todos.delete(TodoId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_numeric_paging_is_treated_as_absent() {
        let request = ListTodosQuery {
            page: Some("two".into()),
            size: Some(" 5 ".into()),
            ..Default::default()
        }
        .into_request();

        assert_eq!(request.page, None);
        assert_eq!(request.size, Some(5));
    }
}
