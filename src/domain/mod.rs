// Domain layer - records, filters, aggregations and dashboard models
pub mod aggregate;
pub mod chart;
pub mod columns;
pub mod dashboard;
pub mod filter;
pub mod geo;
pub mod kpi;
pub mod record;
pub mod view;
