// YouTube Music routes
use axum::{
    Json, Router,
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::controllers::SearchProxy;
use crate::models::search::SearchQuery;

pub fn ytmusic_routes() -> Router<SearchProxy> {
    Router::new().route("/search", get(ytmusic_search_route))
}

/// GET /ytmusic/search - First catalog match for `q`
pub async fn ytmusic_search_route(
    State(proxy): State<SearchProxy>,
    Query(params): Query<SearchQuery>,
) -> Response {
    match proxy.search(&params.q, params.filter).await {
        Ok(response) => Json(response).into_response(),
        Err(e) => {
            error!("YouTube Music search for {:?} failed: {}", params.q, e);
            e.into_response()
        }
    }
}
