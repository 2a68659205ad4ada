use std::sync::Arc;

use taskdeck_core::query::SortableAccess;
use taskdeck_core::{
    InMemoryTodoStore, ListRequest, SortDirection, TodoService, TodoStore,
    demo,
};

async fn seeded_service() -> TodoService {
    let store = Arc::new(InMemoryTodoStore::new());
    demo::seed(store.as_ref()).await.expect("seed demo data");
    let store: Arc<dyn TodoStore> = store;
    TodoService::new(store, SortableAccess::Readable)
}

fn sort(raw: &str) -> ListRequest {
    ListRequest {
        sort: Some(raw.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn defaults_sort_by_title_ascending() {
    let service = seeded_service().await;
    let outcome = service.list(&ListRequest::default()).await.unwrap();

    assert_eq!(outcome.metadata.applied_page, 0);
    assert_eq!(outcome.metadata.applied_size, 20);
    assert_eq!(outcome.metadata.applied_sort_key, "title");
    assert_eq!(
        outcome.metadata.applied_sort_direction,
        SortDirection::Ascending
    );
    assert_eq!(
        outcome.metadata.total_elements,
        demo::sample_records().len() as u64
    );
    assert_eq!(outcome.metadata.total_pages, 1);

    let titles: Vec<_> = outcome.items.iter().map(|t| t.title.clone()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    assert_eq!(titles, sorted);
}

#[tokio::test]
async fn descending_completed_puts_done_items_first() {
    let service = seeded_service().await;
    let outcome = service.list(&sort("-completed")).await.unwrap();

    assert_eq!(outcome.metadata.applied_sort_key, "completed");
    assert_eq!(
        outcome.metadata.applied_sort_direction,
        SortDirection::Descending
    );
    let first_open = outcome
        .items
        .iter()
        .position(|t| !t.completed)
        .expect("open items");
    assert!(outcome.items[..first_open].iter().all(|t| t.completed));
    assert!(outcome.items[first_open..].iter().all(|t| !t.completed));

    // Ties within each group follow ascending id.
    let done_ids: Vec<_> =
        outcome.items[..first_open].iter().map(|t| t.id).collect();
    let mut sorted = done_ids.clone();
    sorted.sort();
    assert_eq!(done_ids, sorted);
}

#[tokio::test]
async fn uppercase_key_resolves_to_canonical_field() {
    let service = seeded_service().await;
    let outcome = service.list(&sort("-COMPLETED")).await.unwrap();

    assert_eq!(outcome.metadata.applied_sort_key, "completed");
    assert_eq!(
        outcome.metadata.applied_sort_direction,
        SortDirection::Descending
    );
}

#[tokio::test]
async fn unknown_key_falls_back_but_keeps_direction() {
    let service = seeded_service().await;
    let outcome = service.list(&sort("-doesNotExist")).await.unwrap();

    assert_eq!(outcome.metadata.applied_sort_key, "title");
    assert_eq!(
        outcome.metadata.applied_sort_direction,
        SortDirection::Descending
    );
    let titles: Vec<_> = outcome.items.iter().map(|t| t.title.clone()).collect();
    let mut sorted = titles.clone();
    sorted.sort();
    sorted.reverse();
    assert_eq!(titles, sorted);
}

#[tokio::test]
async fn query_filter_matches_title_case_insensitively() {
    let service = seeded_service().await;
    let request = ListRequest {
        q: Some("grocer".into()),
        ..Default::default()
    };
    let outcome = service.list(&request).await.unwrap();

    assert!(!outcome.items.is_empty());
    assert!(
        outcome
            .items
            .iter()
            .all(|t| t.title.to_lowercase().contains("grocer"))
    );
    assert_eq!(outcome.metadata.total_elements, outcome.items.len() as u64);
}

#[tokio::test]
async fn pages_are_reproducible_and_disjoint() {
    let service = seeded_service().await;
    let page = |index| ListRequest {
        sort: Some("completed".into()),
        page: Some(index),
        size: Some(3),
        ..Default::default()
    };

    let first = service.list(&page(0)).await.unwrap();
    let again = service.list(&page(0)).await.unwrap();
    let second = service.list(&page(1)).await.unwrap();

    assert_eq!(first.items, again.items);
    assert_eq!(first.metadata.total_pages, 4);
    assert!(
        first
            .items
            .iter()
            .all(|item| !second.items.iter().any(|other| other.id == item.id))
    );
}
