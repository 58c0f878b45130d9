//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::error::ServerError;
use blog_store::{
    NewPost, PostRepository, PostUpdate, SearchQuery, SortDirection, SortField, SortOrder,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub(crate) const INVALID_SORT_FIELD: &str = "Invalid sort field. Must be 'title' or 'content'.";
pub(crate) const INVALID_SORT_DIRECTION: &str = "Invalid sort direction. Must be 'asc' or 'desc'.";
pub(crate) const INVALID_BODY: &str = "Request body must be a valid JSON object.";
pub(crate) const RESOURCE_NOT_FOUND: &str = "Resource not found.";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostRepository>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Query parameters for listing posts
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// `title` or `content`; absent or empty keeps insertion order
    #[serde(default)]
    pub sort: Option<String>,

    /// `asc` or `desc`, defaults to `asc`
    #[serde(default)]
    pub direction: Option<String>,
}

impl ListParams {
    /// Validate into a store sort order.
    ///
    /// The field is checked before the direction, so a request with both
    /// wrong reports the field.
    pub fn sort_order(&self) -> Result<SortOrder, ServerError> {
        let field = match self.sort.as_deref() {
            None | Some("") => None,
            Some(name) => Some(
                name.parse::<SortField>()
                    .map_err(|_| ServerError::InvalidRequest(INVALID_SORT_FIELD.to_string()))?,
            ),
        };

        let direction = match self.direction.as_deref() {
            None => SortDirection::default(),
            Some(name) => name
                .parse::<SortDirection>()
                .map_err(|_| ServerError::InvalidRequest(INVALID_SORT_DIRECTION.to_string()))?,
        };

        Ok(SortOrder { field, direction })
    }
}

/// Query parameters for searching posts
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<SearchParams> for SearchQuery {
    fn from(params: SearchParams) -> Self {
        SearchQuery {
            title: params.title,
            content: params.content,
        }
    }
}

/// Create post payload
#[derive(Debug, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<CreatePostRequest> for NewPost {
    fn from(payload: CreatePostRequest) -> Self {
        NewPost {
            title: payload.title,
            content: payload.content,
        }
    }
}

/// Update post payload; every field is optional
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePostRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl From<UpdatePostRequest> for PostUpdate {
    fn from(payload: UpdatePostRequest) -> Self {
        PostUpdate {
            title: payload.title,
            content: payload.content,
        }
    }
}

/// Delete post response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn for_post(id: u64) -> Self {
        Self {
            message: format!("Post with id {} has been deleted successfully.", id),
        }
    }
}
