// Geographic enrichment: joins per-location totals onto boundary regions
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BoundaryError {
    #[error("failed to fetch boundary data: {0}")]
    Fetch(String),

    #[error("boundary data request returned status {0}")]
    Status(u16),

    #[error("boundary data is not a feature collection: {0}")]
    Malformed(String),

    #[error("boundary feature {index} has no `properties.{key}` name field")]
    MissingNameKey { key: String, index: usize },
}

/// Region names from `features[].properties.<name_key>`, deduplicated, in feature order.
pub fn region_names(boundary: &Value, name_key: &str) -> Result<Vec<String>, BoundaryError> {
    let features = boundary
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| BoundaryError::Malformed("missing `features` array".to_string()))?;

    let mut names: Vec<String> = Vec::with_capacity(features.len());
    for (index, feature) in features.iter().enumerate() {
        let name = feature
            .get("properties")
            .and_then(|p| p.get(name_key))
            .and_then(Value::as_str)
            .ok_or_else(|| BoundaryError::MissingNameKey {
                key: name_key.to_string(),
                index,
            })?;
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    Ok(names)
}

/// Left-joins every boundary region against `location_totals`. Regions without
/// sales get 0; locations that match no region are dropped.
pub fn enrich(
    location_totals: &[(String, f64)],
    boundary: &Value,
    name_key: &str,
) -> Result<Vec<(String, f64)>, BoundaryError> {
    let regions = region_names(boundary, name_key)?;

    Ok(regions
        .into_iter()
        .map(|region| {
            let value: f64 = location_totals
                .iter()
                .filter(|(location, _)| *location == region)
                .map(|(_, v)| v)
                .sum();
            (region, value)
        })
        .collect())
}
