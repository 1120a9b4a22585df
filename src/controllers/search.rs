use std::sync::Arc;

use tracing::debug;

use crate::controllers::CatalogService;
use crate::errors::SearchError;
use crate::models::search::{SearchFilter, SearchResponse};

/// Maps a catalog search onto its top result.
///
/// Holds only a shared handle to the catalog client, so clones are cheap and
/// concurrent searches never see each other.
#[derive(Clone, Debug)]
pub struct SearchProxy {
    catalog: Arc<dyn CatalogService>,
}

impl SearchProxy {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        SearchProxy { catalog }
    }

    /// Searches the catalog once and reshapes element zero.
    ///
    /// An empty result list is a normal outcome, `SearchResponse::NotFound`.
    /// A top result without a video id, title or at least one artist is
    /// `SearchError::MalformedResult`. Catalog failures pass through as
    /// `SearchError::Upstream`.
    pub async fn search(
        &self,
        q: &str,
        filter: Option<SearchFilter>,
    ) -> Result<SearchResponse, SearchError> {
        let results = self.catalog.search(q, filter).await?;

        let Some(top) = results.into_iter().next() else {
            debug!("no catalog results for {:?}", q);
            return Ok(SearchResponse::not_found());
        };

        let video_id = top.video_id.ok_or_else(|| {
            SearchError::MalformedResult(format!(
                "top result ({}) has no videoId",
                top.result_type.as_deref().unwrap_or("unknown type")
            ))
        })?;
        let title = top
            .title
            .ok_or_else(|| SearchError::MalformedResult(format!("{} has no title", video_id)))?;
        let artist = top
            .artists
            .into_iter()
            .next()
            .ok_or_else(|| SearchError::MalformedResult(format!("{} has no artists", video_id)))?
            .name;

        Ok(SearchResponse::Found {
            video_id,
            title,
            artist,
        })
    }
}
