use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::models::search::{CatalogResult, SearchFilter};

/// A music catalog that can answer free-text searches.
///
/// Results come back in the catalog's own ranking; callers must not reorder
/// them.
#[async_trait]
pub trait CatalogService: Send + Sync + std::fmt::Debug {
    /// # Errors
    /// - `CatalogError::Network` / `Status` when the catalog is unreachable or refuses
    /// - `CatalogError::Auth` when the session cannot be refreshed
    /// - `CatalogError::Parse` when the body is not JSON
    async fn search(
        &self,
        query: &str,
        filter: Option<SearchFilter>,
    ) -> Result<Vec<CatalogResult>, CatalogError>;
}
