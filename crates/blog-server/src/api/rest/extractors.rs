//! Custom extractors
//!
//! Wrap axum's built-in extractors so that rejections use the API's
//! `{"error": ...}` envelope.

use super::types::{INVALID_BODY, RESOURCE_NOT_FOUND};
use crate::error::ServerError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
    Json,
};
use serde_json::{Map, Value};
use tracing::debug;

/// JSON body extractor that only accepts a JSON object
pub struct JsonExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let object = json_object(req, state).await?;
        decode_object(object).map(Self)
    }
}

/// Like [`JsonExtractor`], but an empty object counts as no body at all
pub struct NonEmptyJsonExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for NonEmptyJsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let object = json_object(req, state).await?;
        if object.is_empty() {
            debug!("Rejected request body: empty JSON object");
            return Err(invalid_body());
        }
        decode_object(object).map(Self)
    }
}

async fn json_object<S>(req: Request, state: &S) -> Result<Map<String, Value>, ServerError>
where
    S: Send + Sync,
{
    let value = match Json::<Value>::from_request(req, state).await {
        Ok(Json(value)) => value,
        Err(rejection) => {
            let reason = match rejection {
                JsonRejection::JsonSyntaxError(err) => format!("JSON syntax error: {}", err),
                JsonRejection::MissingJsonContentType(_) => {
                    "Missing 'Content-Type: application/json' header".to_string()
                }
                other => format!("Failed to parse JSON: {}", other),
            };
            debug!("Rejected request body: {}", reason);
            return Err(invalid_body());
        }
    };

    match value {
        Value::Object(object) => Ok(object),
        _ => {
            debug!("Rejected request body: not a JSON object");
            Err(invalid_body())
        }
    }
}

fn decode_object<T: serde::de::DeserializeOwned>(
    object: Map<String, Value>,
) -> Result<T, ServerError> {
    serde_json::from_value(Value::Object(object)).map_err(|err| {
        debug!("Rejected request body: {}", err);
        invalid_body()
    })
}

fn invalid_body() -> ServerError {
    ServerError::InvalidRequest(INVALID_BODY.to_string())
}

/// Query string extractor where the first occurrence of a key wins.
///
/// Repeated keys never fail extraction, and an undecodable query string reads
/// as empty.
pub struct QueryExtractor<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pairs = match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => pairs,
            Err(rejection) => {
                debug!("Ignoring query string: {}", rejection);
                Vec::new()
            }
        };

        serde_json::from_value(Value::Object(first_values(pairs)))
            .map(Self)
            .map_err(|err| ServerError::InvalidRequest(format!("Invalid query string: {}", err)))
    }
}

fn first_values(pairs: Vec<(String, String)>) -> Map<String, Value> {
    let mut params = Map::new();
    for (key, value) in pairs {
        params.entry(key).or_insert(Value::String(value));
    }
    params
}

/// Integer post id taken from the `:id` path segment.
///
/// A segment that is not an integer does not name a resource, so it is a 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for PostId
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<u64>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(PostId(id)),
            Err(rejection) => {
                debug!("Rejected post id: {}", rejection);
                Err(ServerError::NotFound(RESOURCE_NOT_FOUND.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_string(), value.to_string())
    }

    #[test]
    fn test_first_values_keeps_first_occurrence() {
        let params = first_values(vec![
            pair("title", "first"),
            pair("content", "body"),
            pair("title", "second"),
        ]);

        assert_eq!(params.len(), 2);
        assert_eq!(params["title"], "first");
        assert_eq!(params["content"], "body");
    }

    #[test]
    fn test_first_values_empty() {
        assert!(first_values(Vec::new()).is_empty());
    }
}
