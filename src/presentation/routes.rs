// Router construction
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{get_boundaries, get_sidebar, get_view, health_check, stream_view};
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

pub const OVERVIEW_IMAGE_ROUTE: &str = "/assets/overview-image";
pub const BOUNDARIES_ROUTE: &str = "/geo/boundaries";

// JSON bodies are compressed in the response builders, so no CompressionLayer here.
pub fn router(state: Arc<AppState>, image_path: &Path) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/sidebar", get(get_sidebar))
        .route("/views/:view", get(get_view))
        .route("/views/:view/stream", get(stream_view))
        .route(BOUNDARIES_ROUTE, get(get_boundaries))
        .route_service(OVERVIEW_IMAGE_ROUTE, ServeFile::new(image_path))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
