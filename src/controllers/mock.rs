//! In-memory catalog for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::controllers::catalog::CatalogService;
use crate::errors::CatalogError;
use crate::models::search::{CatalogArtist, CatalogResult, SearchFilter};

/// Answers from a fixed query → results table and records every call.
#[derive(Debug, Default)]
pub struct MockCatalog {
    responses: HashMap<String, Vec<CatalogResult>>,
    failure: Option<String>,
    queries: Mutex<Vec<(String, Option<SearchFilter>)>>,
}

impl MockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    pub fn with_results(mut self, query: &str, results: Vec<CatalogResult>) -> Self {
        self.responses.insert(query.to_string(), results);
        self
    }

    pub fn queries(&self) -> Vec<(String, Option<SearchFilter>)> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogService for MockCatalog {
    async fn search(
        &self,
        query: &str,
        filter: Option<SearchFilter>,
    ) -> Result<Vec<CatalogResult>, CatalogError> {
        self.queries
            .lock()
            .unwrap()
            .push((query.to_string(), filter));
        // Let concurrent callers interleave
        tokio::task::yield_now().await;

        if let Some(reason) = &self.failure {
            return Err(CatalogError::Status {
                status: 503,
                body: reason.clone(),
            });
        }
        Ok(self.responses.get(query).cloned().unwrap_or_default())
    }
}

pub fn track(video_id: &str, title: &str, artists: &[&str]) -> CatalogResult {
    CatalogResult {
        result_type: Some("song".to_string()),
        video_id: Some(video_id.to_string()),
        title: Some(title.to_string()),
        artists: artists
            .iter()
            .map(|name| CatalogArtist {
                name: name.to_string(),
                id: None,
            })
            .collect(),
    }
}
