use axum::response::{IntoResponse, Json};

pub struct RootController;

impl RootController {
    pub async fn root() -> impl IntoResponse {
        "YTMusic search proxy"
    }

    pub async fn health_check() -> impl IntoResponse {
        Json(serde_json::json!({"status": "ok"}))
    }
}
