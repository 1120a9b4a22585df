//! Error types for catalog lookups and the search endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

/// Failures talking to the YouTube Music catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The OAuth session could not be established or refreshed.
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Token file {path}: {reason}")]
    TokenFile { path: String, reason: String },
}

impl From<reqwest::Error> for CatalogError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            CatalogError::Parse(e.to_string())
        } else {
            CatalogError::Network(e.to_string())
        }
    }
}

/// Faults raised by the search proxy. "No results" is not one of them.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Catalog search failed: {0}")]
    Upstream(#[from] CatalogError),

    /// The top result lacks a video id, a title or an artist.
    #[error("Malformed catalog result: {0}")]
    MalformedResult(String),
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({"error": self.to_string()})),
        )
            .into_response()
    }
}
