//! Request extractors enforcing the gateway's input rules

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use mime::Mime;
use serde::de::DeserializeOwned;

use crate::errors::GatewayError;

/// JSON body with an enforced `application/json` content type.
///
/// Unknown fields are rejected by the target type itself
/// (`#[serde(deny_unknown_fields)]`).
#[derive(Debug)]
pub struct StrictJson<T>(pub T);

impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        require_json_content_type(req.headers())?;

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| GatewayError::BodyRejected {
                status: e.status(),
                message: e.body_text(),
            })?;
        let value = serde_json::from_slice(&body)
            .map_err(|e| GatewayError::BadRequest(e.to_string()))?;

        Ok(StrictJson(value))
    }
}

/// Check the media type is `application/json`, ignoring parameters
pub fn require_json_content_type(headers: &HeaderMap) -> Result<(), GatewayError> {
    let value = match headers.get(CONTENT_TYPE) {
        Some(value) => value
            .to_str()
            .map_err(|e| GatewayError::BadRequest(format!("invalid Content-Type: {}", e)))?,
        None => "",
    };

    let media_type: Mime = value
        .parse()
        .map_err(|e| GatewayError::BadRequest(format!("invalid Content-Type {:?}: {}", value, e)))?;

    if media_type.essence_str() != mime::APPLICATION_JSON.essence_str() {
        return Err(GatewayError::UnsupportedMediaType(
            "expect application/json Content-Type".to_string(),
        ));
    }
    Ok(())
}

/// `[a-z]` optionally followed by `[-a-z0-9]*[a-z0-9]`
pub fn is_valid_app_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    let Some((first, rest)) = bytes.split_first() else {
        return false;
    };

    first.is_ascii_lowercase()
        && rest
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        && rest.last() != Some(&b'-')
}

/// The `{app}` path segment; names outside the grammar do not route
#[derive(Debug, Clone)]
pub struct AppName(pub String);

impl<S> FromRequestParts<S> for AppName
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(mut params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| GatewayError::NotFound(e.body_text()))?;

        match params.remove("app") {
            Some(app) if is_valid_app_name(&app) => Ok(AppName(app)),
            _ => Err(GatewayError::NotFound("404 page not found".to_string())),
        }
    }
}

/// Query string keeping repeated keys in order
#[derive(Debug, Clone, Default)]
pub struct QueryParams(pub Vec<(String, String)>);

impl QueryParams {
    /// First value given for `key`
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value for `key`, rejecting the request when missing or empty
    pub fn require(&self, key: &str) -> Result<&str, GatewayError> {
        match self.first(key) {
            Some(value) if !value.is_empty() => Ok(value),
            _ => Err(GatewayError::BadRequest(format!("empty {}", key))),
        }
    }
}

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| GatewayError::BadRequest(e.body_text()))?;
        Ok(QueryParams(pairs))
    }
}
