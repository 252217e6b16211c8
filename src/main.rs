// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod test_support;

use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::boundary_source::BoundaryService;
use crate::application::dashboard_service::DashboardService;
use crate::application::sidebar_service::SidebarService;
use crate::application::streaming_service::StreamingDashboardService;
use crate::application::views::ViewSettings;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::csv_dataset::load_records_file;
use crate::infrastructure::http_boundary_fetcher::HttpBoundaryFetcher;
use crate::infrastructure::memory_boundary_store::MemoryBoundaryStore;
use crate::presentation::app_state::AppState;
use crate::presentation::routes::{router, BOUNDARIES_ROUTE, OVERVIEW_IMAGE_ROUTE};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config().context("Failed to load config/dashboard")?;

    // Load the dataset once; it is never mutated afterwards
    let records = Arc::new(
        load_records_file(&config.dataset.path)
            .with_context(|| format!("Failed to load dataset {}", config.dataset.path.display()))?,
    );

    // Boundary data source with an in-process cache
    let fetcher = Arc::new(HttpBoundaryFetcher::new(config.geo.request_timeout())?);
    let boundary_service = BoundaryService::new(
        fetcher,
        Arc::new(MemoryBoundaryStore::default()),
        config.geo.boundary_url.clone(),
        config.geo.cache_ttl(),
        config.geo.failure_ttl(),
    );

    // Create services (application layer)
    let settings = ViewSettings {
        image_path: config.dataset.image_path.clone(),
        image_url: OVERVIEW_IMAGE_ROUTE.to_string(),
        geojson_url: BOUNDARIES_ROUTE.to_string(),
        name_key: config.geo.name_key.clone(),
        color_range_max: config.geo.color_range_max,
    };
    let sidebar_service = SidebarService::new(records.clone()).context("Failed to summarize dataset")?;
    let dashboard_service = DashboardService::new(records.clone(), boundary_service.clone(), settings);
    let streaming_service = StreamingDashboardService::new(dashboard_service.clone());

    // Create application state
    let state = Arc::new(AppState {
        sidebar_service,
        dashboard_service,
        streaming_service,
        boundary_service,
    });

    // Build router (presentation layer)
    let app = router(state, &config.dataset.image_path);

    // Start server
    let addr = config.server.addr;
    tracing::info!("Starting dairy-dashboard on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}
