// Infrastructure layer - External dependencies and adapters
pub mod chunked_json;
pub mod config;
pub mod csv_dataset;
pub mod http_boundary_fetcher;
pub mod http_response;
pub mod memory_boundary_store;
