//! Core trait definition for post storage
//!
//! [`PostRepository`] is the seam between the HTTP handlers and whatever owns
//! the post collection. Handlers hold it as `Arc<dyn PostRepository>` and never
//! keep a [`Post`] across requests.
//!
//! # Examples
//!
//! ```no_run
//! use blog_store::{MemoryPostStore, NewPost, PostRepository, SortOrder};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), blog_store::StoreError> {
//! let store = MemoryPostStore::with_seed_posts();
//!
//! let post = store.create(NewPost::new("Third post", "Hello")).await?;
//! assert_eq!(post.id, 3);
//!
//! let posts = store.list(SortOrder::default()).await;
//! assert_eq!(posts.len(), 3);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::{NewPost, Post, PostUpdate, SearchQuery, SortOrder, StoreResult};

/// Owner of the post collection
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// All posts, in insertion order or sorted per `order`.
    ///
    /// Sorting produces a new view and never reorders the collection.
    async fn list(&self, order: SortOrder) -> Vec<Post>;

    /// Validate and append a new post, assigning `max(id) + 1` (or 1 when empty).
    ///
    /// Every missing or blank field is reported in a single
    /// [`StoreError::Validation`](crate::StoreError::Validation).
    async fn create(&self, new_post: NewPost) -> StoreResult<Post>;

    /// Fetch a post by id
    async fn get(&self, id: u64) -> StoreResult<Post>;

    /// Overwrite each supplied, non-blank field of the post with `id`
    async fn update(&self, id: u64, update: PostUpdate) -> StoreResult<Post>;

    /// Remove the post with `id`
    async fn delete(&self, id: u64) -> StoreResult<()>;

    /// Posts whose title or content contains the matching query term
    async fn search(&self, query: SearchQuery) -> Vec<Post>;

    /// Number of stored posts
    async fn len(&self) -> usize;

    /// Whether the collection is empty
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
