//! Integration tests for MemoryPostStore

use blog_store::{
    MemoryPostStore, NewPost, Post, PostRepository, PostUpdate, SearchQuery, SortDirection,
    SortField, SortOrder, StoreError,
};
use std::collections::HashSet;
use std::sync::Arc;

fn titles(posts: &[Post]) -> Vec<String> {
    posts.iter().map(|p| p.title.clone()).collect()
}

#[tokio::test]
async fn test_create_assigns_next_id() {
    let store = MemoryPostStore::with_seed_posts();

    let post = store
        .create(NewPost::new("Third post", "This is the third post."))
        .await
        .unwrap();

    assert_eq!(post.id, 3);
    assert_eq!(store.get(3).await.unwrap(), post);
}

#[tokio::test]
async fn test_create_in_empty_store_starts_at_one() {
    let store = MemoryPostStore::new();
    assert!(store.is_empty().await);

    let post = store.create(NewPost::new("Hello", "World")).await.unwrap();
    assert_eq!(post.id, 1);
}

#[tokio::test]
async fn test_ids_stay_distinct_across_creates_and_deletes() {
    let store = MemoryPostStore::with_seed_posts();

    for i in 0..10 {
        store
            .create(NewPost::new(format!("Post {i}"), "body"))
            .await
            .unwrap();
        if i % 3 == 0 {
            store.delete(1 + i as u64).await.ok();
        }

        let posts = store.list(SortOrder::default()).await;
        let ids: HashSet<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
    }
}

#[tokio::test]
async fn test_create_reports_both_blank_fields() {
    let store = MemoryPostStore::with_seed_posts();

    let err = store.create(NewPost::new(" ", "")).await.unwrap_err();

    assert_eq!(
        err,
        StoreError::Validation {
            fields: vec!["title", "content"]
        }
    );
    assert_eq!(store.len().await, 2);
}

#[tokio::test]
async fn test_create_reports_absent_fields() {
    let store = MemoryPostStore::new();

    let err = store.create(NewPost::default()).await.unwrap_err();

    assert_eq!(err.to_string(), "Missing or empty fields: title, content");
}

// Ids derive from the current maximum, so the highest id is reused after deletion.
#[tokio::test]
async fn test_deleting_max_id_frees_it_for_next_create() {
    let store = MemoryPostStore::with_seed_posts();

    store.delete(2).await.unwrap();
    let post = store.create(NewPost::new("Replacement", "body")).await.unwrap();

    assert_eq!(post.id, 2);
}

#[tokio::test]
async fn test_deleting_lower_id_does_not_free_it() {
    let store = MemoryPostStore::with_seed_posts();

    store.delete(1).await.unwrap();
    let post = store.create(NewPost::new("Third", "body")).await.unwrap();

    assert_eq!(post.id, 3);
}

#[tokio::test]
async fn test_get_missing_post() {
    let store = MemoryPostStore::with_seed_posts();

    let err = store.get(99).await.unwrap_err();

    assert_eq!(err, StoreError::NotFound { id: 99 });
}

#[tokio::test]
async fn test_update_title_only_keeps_content() {
    let store = MemoryPostStore::with_seed_posts();

    let post = store
        .update(1, PostUpdate::title("Renamed"))
        .await
        .unwrap();

    assert_eq!(post.title, "Renamed");
    assert_eq!(post.content, "This is the first post.");
    assert_eq!(store.get(1).await.unwrap(), post);
}

#[tokio::test]
async fn test_update_blank_title_is_skipped() {
    let store = MemoryPostStore::with_seed_posts();

    let post = store
        .update(
            1,
            PostUpdate {
                title: Some("   ".to_string()),
                content: Some("New content".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(post.title, "First post");
    assert_eq!(post.content, "New content");
}

#[tokio::test]
async fn test_update_with_nothing_is_a_no_op() {
    let store = MemoryPostStore::with_seed_posts();
    let before = store.get(2).await.unwrap();

    let after = store.update(2, PostUpdate::default()).await.unwrap();

    assert_eq!(before, after);
}

#[tokio::test]
async fn test_update_never_changes_id() {
    let store = MemoryPostStore::with_seed_posts();

    let post = store
        .update(2, PostUpdate::content("Changed"))
        .await
        .unwrap();

    assert_eq!(post.id, 2);
}

#[tokio::test]
async fn test_delete_missing_post_leaves_collection_unchanged() {
    let store = MemoryPostStore::with_seed_posts();
    let before = store.list(SortOrder::default()).await;

    let err = store.delete(42).await.unwrap_err();

    assert_eq!(err, StoreError::NotFound { id: 42 });
    assert_eq!(store.list(SortOrder::default()).await, before);
}

#[tokio::test]
async fn test_list_sorted_by_title_desc() {
    let store = MemoryPostStore::with_seed_posts();

    let posts = store
        .list(SortOrder::by(SortField::Title, SortDirection::Desc))
        .await;

    assert_eq!(titles(&posts), vec!["Second post", "First post"]);
}

#[tokio::test]
async fn test_list_sorted_by_content() {
    let store = MemoryPostStore::from_posts(vec![
        Post::new(1, "a", "zebra"),
        Post::new(2, "b", "Aardvark"),
        Post::new(3, "c", "mole"),
    ]);

    let posts = store
        .list(SortOrder::by(SortField::Content, SortDirection::Asc))
        .await;
    let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();

    assert_eq!(ids, vec![2, 3, 1]);
}

#[tokio::test]
async fn test_sorting_is_idempotent() {
    let store = MemoryPostStore::from_posts(vec![
        Post::new(1, "delta", "x"),
        Post::new(2, "Alpha", "x"),
        Post::new(3, "charlie", "x"),
        Post::new(4, "bravo", "x"),
    ]);
    let order = SortOrder::by(SortField::Title, SortDirection::Desc);

    let once = store.list(order).await;
    let twice = MemoryPostStore::from_posts(once.clone()).list(order).await;

    assert_eq!(once, twice);
}

#[tokio::test]
async fn test_search_by_title() {
    let store = MemoryPostStore::with_seed_posts();

    let posts = store.search(SearchQuery::title("first")).await;

    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 1);
}

#[tokio::test]
async fn test_search_by_content_matches_all() {
    let store = MemoryPostStore::with_seed_posts();

    let posts = store.search(SearchQuery::content("POST.")).await;

    assert_eq!(posts.len(), 2);
}

// An empty query matches nothing rather than everything.
#[tokio::test]
async fn test_search_without_terms_is_empty() {
    let store = MemoryPostStore::with_seed_posts();

    assert!(store.search(SearchQuery::default()).await.is_empty());
    assert!(store
        .search(SearchQuery {
            title: Some(String::new()),
            content: Some(String::new()),
        })
        .await
        .is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let store = Arc::new(MemoryPostStore::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let store = Arc::clone(&store);
            tokio::spawn(async move {
                store
                    .create(NewPost::new(format!("Post {i}"), "body"))
                    .await
                    .unwrap()
                    .id
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap());
    }

    assert_eq!(ids.len(), 32);
    assert_eq!(ids, (1..=32).collect::<HashSet<u64>>());
}
