//! In-memory post store for the blog API
//!
//! This crate owns the post collection and enforces its invariants:
//!
//! - **Unique ids**: new posts get `max(id) + 1`, or 1 in an empty store
//! - **Required fields**: title and content are never blank while stored
//! - **Partial updates**: blank or absent fields leave the post unchanged
//! - **Read-only views**: sorting and searching never reorder the collection
//!
//! # Quick Start
//!
//! ```no_run
//! use blog_store::{MemoryPostStore, PostRepository, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = MemoryPostStore::with_seed_posts();
//!
//!     let hits = store.search(SearchQuery::title("first")).await;
//!     assert_eq!(hits.len(), 1);
//! }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::{seed_posts, MemoryPostStore};
pub use models::{NewPost, Post, PostUpdate, SearchQuery, SortDirection, SortField, SortOrder};
pub use traits::PostRepository;
