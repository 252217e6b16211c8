// HTTP boundary fetcher
use crate::application::boundary_source::BoundaryFetcher;
use crate::domain::geo::BoundaryError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpBoundaryFetcher {
    client: reqwest::Client,
}

impl HttpBoundaryFetcher {
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl BoundaryFetcher for HttpBoundaryFetcher {
    async fn fetch(&self, url: &str) -> Result<Value, BoundaryError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BoundaryError::Fetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(BoundaryError::Status(response.status().as_u16()));
        }

        // raw.githubusercontent.com serves GeoJSON as text/plain, so decode the body ourselves.
        let body = response
            .bytes()
            .await
            .map_err(|e| BoundaryError::Fetch(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| BoundaryError::Malformed(e.to_string()))
    }
}
