//! List query orchestration
//!
//! [`ListQueryEngine::plan`] turns raw request input into a [`ListPlan`]:
//! clamped page bounds, the resolved sort with its `id` tie-break, and an
//! optional title filter. [`ListQueryEngine::list_page`] executes the plan
//! with a single store call and renders the response metadata. Store errors
//! are returned unchanged.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use taskdeck_model::TodoRecord;
use tracing::debug;

use super::inspector::{FieldInspector, SortableAccess};
use super::pagination::PageRequest;
use super::sorting::{DefaultSort, ResolvedSort, SortResolver};
use super::types::{SortDirection, SortSpec};
use crate::shapes::{ID_FIELD, TITLE_FIELD, TODO_RECORD_SHAPE, TODO_SHAPE};
use crate::store::{StoreResult, TextFilter, TodoStore};

/// Raw, unvalidated list request input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub sort: Option<String>,
    pub q: Option<String>,
    pub page: Option<i64>,
    pub size: Option<i64>,
}

/// Fully specified store query for one list request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPlan {
    pub page: PageRequest,
    pub resolved: ResolvedSort,
    pub sort: SortSpec,
    pub filter: Option<TextFilter>,
}

/// Metadata describing what was actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListMetadata {
    pub applied_page: u64,
    pub applied_size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
    pub applied_sort_key: String,
    pub applied_sort_direction: SortDirection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutcome<T> {
    pub items: Vec<T>,
    pub metadata: ListMetadata,
}

impl<T> ListOutcome<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> ListOutcome<U> {
        ListOutcome {
            items: self.items.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }
}

#[derive(Clone)]
pub struct ListQueryEngine {
    store: Arc<dyn TodoStore>,
    inspector: FieldInspector,
    default_sort: DefaultSort,
}

impl std::fmt::Debug for ListQueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListQueryEngine")
            .field("inspector", &self.inspector)
            .field("default_sort", &self.default_sort)
            .finish_non_exhaustive()
    }
}

impl ListQueryEngine {
    pub fn new(store: Arc<dyn TodoStore>, access: SortableAccess) -> Self {
        Self {
            store,
            inspector: FieldInspector::new(access),
            default_sort: DefaultSort::new(
                TITLE_FIELD,
                SortDirection::Ascending,
            ),
        }
    }

    pub fn plan(&self, request: &ListRequest) -> ListPlan {
        let page = PageRequest::from_raw(request.page, request.size);

        let resolver =
            SortResolver::new(self.inspector, &TODO_SHAPE, &TODO_RECORD_SHAPE);
        let resolved =
            resolver.resolve(request.sort.as_deref(), &self.default_sort);
        let sort = resolved.with_tie_break(ID_FIELD);

        let filter = request
            .q
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .map(|q| TextFilter::contains_ignore_case(TITLE_FIELD, q));

        ListPlan {
            page,
            resolved,
            sort,
            filter,
        }
    }

    pub async fn list_page(
        &self,
        request: &ListRequest,
    ) -> StoreResult<ListOutcome<TodoRecord>> {
        let plan = self.plan(request);
        debug!(
            page = plan.page.index(),
            size = plan.page.size(),
            sort_key = %plan.resolved.applied_key,
            sort_dir = %plan.resolved.applied_direction,
            filtered = plan.filter.is_some(),
            "executing list query"
        );

        let result = match &plan.filter {
            None => self.store.list_all(plan.page, &plan.sort).await?,
            Some(filter) => {
                self.store
                    .list_where_field_contains(filter, plan.page, &plan.sort)
                    .await?
            }
        };

        let metadata = ListMetadata {
            applied_page: plan.page.index(),
            applied_size: plan.page.size(),
            total_elements: result.total_elements,
            total_pages: result.total_pages,
            applied_sort_key: plan.resolved.applied_key,
            applied_sort_direction: plan.resolved.applied_direction,
        };

        Ok(ListOutcome {
            items: result.content,
            metadata,
        })
    }
}
