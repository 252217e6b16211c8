// Application layer - Use cases over the loaded dataset
pub mod boundary_source;
pub mod dashboard_service;
pub mod sidebar_service;
pub mod streaming_service;
pub mod views;
