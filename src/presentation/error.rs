// HTTP-facing errors
use crate::application::dashboard_service::DashboardError;
use crate::domain::geo::BoundaryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("unknown view: {0}")]
    UnknownView(String),

    #[error("invalid {field} filter: {value:?}")]
    InvalidFilter { field: &'static str, value: String },

    #[error(transparent)]
    Boundary(#[from] BoundaryError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnknownView(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidFilter { .. } => StatusCode::BAD_REQUEST,
            ApiError::Boundary(_) => StatusCode::BAD_GATEWAY,
            ApiError::Dashboard(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
