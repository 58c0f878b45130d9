//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::{JsonExtractor, NonEmptyJsonExtractor, PostId, QueryExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use blog_store::{Post, SearchQuery, StoreError};
use tracing::{info, warn};

fn log_store_error(err: &StoreError) {
    if err.is_not_found() {
        info!("Lookup missed: {}", err);
    } else if err.is_validation() {
        warn!("Rejected post: {}", err);
    }
}

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// List posts, optionally sorted
#[axum::debug_handler]
pub(super) async fn list_posts(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<ListParams>,
) -> Result<Json<Vec<Post>>, ServerError> {
    let order = params.sort_order().inspect_err(|e| warn!("Rejected listing: {}", e))?;

    let posts = state.store.list(order).await;
    info!(count = posts.len(), ?order, "Listed posts");

    Ok(Json(posts))
}

/// Create a post
#[axum::debug_handler]
pub(super) async fn create_post(
    State(state): State<AppState>,
    NonEmptyJsonExtractor(payload): NonEmptyJsonExtractor<CreatePostRequest>,
) -> Result<(StatusCode, Json<Post>), ServerError> {
    let post = state
        .store
        .create(payload.into())
        .await
        .inspect_err(log_store_error)?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Fetch a single post
pub(super) async fn get_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<Post>, ServerError> {
    Ok(Json(state.store.get(id).await.inspect_err(log_store_error)?))
}

/// Partially update a post
pub(super) async fn update_post(
    State(state): State<AppState>,
    PostId(id): PostId,
    JsonExtractor(payload): JsonExtractor<UpdatePostRequest>,
) -> Result<Json<Post>, ServerError> {
    let post = state
        .store
        .update(id, payload.into())
        .await
        .inspect_err(log_store_error)?;

    Ok(Json(post))
}

/// Delete a post
pub(super) async fn delete_post(
    State(state): State<AppState>,
    PostId(id): PostId,
) -> Result<Json<DeleteResponse>, ServerError> {
    state.store.delete(id).await.inspect_err(log_store_error)?;

    Ok(Json(DeleteResponse::for_post(id)))
}

/// Search posts by title or content
pub(super) async fn search_posts(
    State(state): State<AppState>,
    QueryExtractor(params): QueryExtractor<SearchParams>,
) -> Json<Vec<Post>> {
    let query = SearchQuery::from(params);
    let posts = state.store.search(query).await;
    info!(matches = posts.len(), "Searched posts");

    Json(posts)
}

/// Fallback for unknown routes
pub(super) async fn not_found() -> ServerError {
    ServerError::NotFound(RESOURCE_NOT_FOUND.to_string())
}
