pub mod root;
pub mod ytmusic;

use axum::{Router, http::HeaderValue, routing::get};
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controllers::SearchProxy;
pub use root::{health_check_route, root_route};
pub use ytmusic::ytmusic_routes;

/// CORS for browser callers. Credentials are allowed, so the request's own
/// origin, method and headers are echoed back instead of `*`. A non-empty
/// comma-separated `allowed_origins` restricts origins to that list.
pub fn cors_layer(allowed_origins: &str) -> anyhow::Result<CorsLayer> {
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "*")
        .map(HeaderValue::from_str)
        .collect::<Result<Vec<_>, _>>()?;

    let allow_origin = if origins.is_empty() {
        AllowOrigin::mirror_request()
    } else {
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

pub fn app(proxy: SearchProxy, cors: CorsLayer) -> Router {
    Router::new()
        // Core routes
        .route("/", get(root_route))
        .route("/health", get(health_check_route))
        // YouTube Music search
        .nest("/ytmusic", ytmusic_routes())
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(proxy)
}
