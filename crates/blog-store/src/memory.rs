//! In-memory post store
//!
//! The collection lives for the lifetime of the process. All mutations take the
//! single write lock for their whole lookup-then-act sequence, so id assignment
//! and list mutation cannot interleave.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::models::is_filled;
use crate::{
    NewPost, Post, PostRepository, PostUpdate, SearchQuery, SortDirection, SortOrder, StoreError,
    StoreResult,
};

/// Post store backed by a `Vec` in insertion order
#[derive(Debug, Default)]
pub struct MemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl MemoryPostStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the two startup posts
    pub fn with_seed_posts() -> Self {
        Self::from_posts(seed_posts())
    }

    /// Create a store holding `posts` as-is
    pub fn from_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

/// The posts every fresh server starts with
pub fn seed_posts() -> Vec<Post> {
    vec![
        Post::new(1, "First post", "This is the first post."),
        Post::new(2, "Second post", "This is the second post."),
    ]
}

/// Deleting the highest id frees it for the next create.
fn next_id(posts: &[Post]) -> u64 {
    posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

fn validate(new_post: &NewPost) -> StoreResult<()> {
    let mut fields = Vec::new();
    if !is_filled(new_post.title.as_deref()) {
        fields.push("title");
    }
    if !is_filled(new_post.content.as_deref()) {
        fields.push("content");
    }

    if fields.is_empty() {
        Ok(())
    } else {
        Err(StoreError::Validation { fields })
    }
}

#[async_trait]
impl PostRepository for MemoryPostStore {
    async fn list(&self, order: SortOrder) -> Vec<Post> {
        let mut view = self.posts.read().await.clone();

        if let Some(field) = order.field {
            match order.direction {
                SortDirection::Asc => view.sort_by_key(|p| p.sort_key(field)),
                SortDirection::Desc => {
                    view.sort_by(|a, b| b.sort_key(field).cmp(&a.sort_key(field)))
                }
            }
        }

        view
    }

    async fn create(&self, new_post: NewPost) -> StoreResult<Post> {
        validate(&new_post)?;
        let NewPost { title, content } = new_post;

        let mut posts = self.posts.write().await;
        let post = Post {
            id: next_id(&posts),
            title: title.unwrap_or_default(),
            content: content.unwrap_or_default(),
        };
        posts.push(post.clone());

        info!(id = post.id, "Created post");
        Ok(post)
    }

    async fn get(&self, id: u64) -> StoreResult<Post> {
        self.posts
            .read()
            .await
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn update(&self, id: u64, update: PostUpdate) -> StoreResult<Post> {
        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;

        if let Some(title) = update.title.filter(|t| is_filled(Some(t.as_str()))) {
            post.title = title;
        }
        if let Some(content) = update.content.filter(|c| is_filled(Some(c.as_str()))) {
            post.content = content;
        }

        debug!(id, "Updated post");
        Ok(post.clone())
    }

    async fn delete(&self, id: u64) -> StoreResult<()> {
        let mut posts = self.posts.write().await;
        let index = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound { id })?;
        posts.remove(index);

        info!(id, "Deleted post");
        Ok(())
    }

    async fn search(&self, query: SearchQuery) -> Vec<Post> {
        self.posts
            .read()
            .await
            .iter()
            .filter(|p| query.matches(p))
            .cloned()
            .collect()
    }

    async fn len(&self) -> usize {
        self.posts.read().await.len()
    }
}
