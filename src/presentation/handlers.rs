// HTTP request handlers
use crate::domain::filter::{FilterSelection, FilterValue, ALL};
use crate::domain::view::View;
use crate::infrastructure::chunked_json::stream_from_receiver;
use crate::infrastructure::http_response::{accepts_brotli, json_response};
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

/// Filter selectors as query parameters. Missing or "All" means unconstrained.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    pub brand: Option<String>,
    pub location: Option<String>,
    pub product: Option<String>,
    pub year: Option<String>,
}

impl FilterQuery {
    pub fn selection(&self) -> Result<FilterSelection, ApiError> {
        let year = match self.year.as_deref().map(str::trim) {
            None | Some("") | Some(ALL) => FilterValue::All,
            Some(raw) => FilterValue::Exact(raw.parse::<i32>().map_err(|_| ApiError::InvalidFilter {
                field: "year",
                value: raw.to_string(),
            })?),
        };

        Ok(FilterSelection {
            brand: FilterValue::from_param(self.brand.as_deref()),
            location: FilterValue::from_param(self.location.as_deref()),
            product: FilterValue::from_param(self.product.as_deref()),
            year,
        })
    }
}

fn parse_view(raw: &str) -> Result<View, ApiError> {
    raw.parse::<View>()
        .map_err(|e| ApiError::UnknownView(e.0))
}

fn into_response(result: Result<Response, axum::http::StatusCode>) -> Response {
    match result {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Navigation, filter options and the KPI panel
pub async fn get_sidebar(
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let selection = query.selection()?;
    let sidebar = state.sidebar_service.sidebar(selection);
    Ok(into_response(json_response(&sidebar, accepts_brotli(&headers)).await))
}

/// Render one view over the filtered dataset
pub async fn get_view(
    Path(view): Path<String>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let view = parse_view(&view)?;
    let selection = query.selection()?;

    let page = state.dashboard_service.render(view, &selection).await?;
    Ok(into_response(json_response(&page, accepts_brotli(&headers)).await))
}

/// Stream one view block by block (progressive loading)
pub async fn stream_view(
    Path(view): Path<String>,
    Query(query): Query<FilterQuery>,
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let view = parse_view(&view)?;
    let selection = query.selection()?;

    let rx = state.streaming_service.stream_view(view, selection);
    Ok(stream_from_receiver(rx, accepts_brotli(&headers)).into_response())
}

/// Boundary GeoJSON referenced by the choropleth spec
pub async fn get_boundaries(
    headers: HeaderMap,
    State(state): State<Arc<AppState>>,
) -> Result<Response, ApiError> {
    let data = state.boundary_service.boundaries().await?;
    Ok(into_response(json_response(&*data, accepts_brotli(&headers)).await))
}
