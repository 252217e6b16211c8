// HTTP response utilities for JSON with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{header, HeaderMap, HeaderValue, Response, StatusCode},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

/// Whether the client advertised Brotli support.
pub fn accepts_brotli(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT_ENCODING)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.split(',').any(|enc| enc.trim().starts_with("br")))
        .unwrap_or(false)
}

pub async fn brotli_compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = BrotliEncoder::new(bytes);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Serialize `data` to JSON, optionally compressing it with Brotli.
pub async fn json_response<T: Serialize>(
    data: &T,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let json_bytes = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    let (body_bytes, content_encoding) = if compress {
        let compressed = brotli_compress(&json_bytes).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!(
            "Compressed: {} -> {} bytes ({:.1}% reduction)",
            json_bytes.len(),
            compressed.len(),
            (1.0 - compressed.len() as f64 / json_bytes.len().max(1) as f64) * 100.0
        );
        (compressed, Some("br"))
    } else {
        (json_bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_compression::tokio::bufread::BrotliDecoder;
    use serde_json::json;

    #[test]
    fn test_accepts_brotli() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip, deflate, br"));
        assert!(accepts_brotli(&headers));

        headers.insert(header::ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
        assert!(!accepts_brotli(&headers));
    }

    #[tokio::test]
    async fn test_compressed_body_round_trips() {
        let data = json!({"title": "Sales", "blocks": [1, 2, 3]});
        let response = json_response(&data, true).await.unwrap();
        assert_eq!(response.headers()[header::CONTENT_ENCODING], "br");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let mut decoder = BrotliDecoder::new(&body[..]);
        let mut plain = Vec::new();
        decoder.read_to_end(&mut plain).await.unwrap();

        let decoded: serde_json::Value = serde_json::from_slice(&plain).unwrap();
        assert_eq!(decoded, data);
    }

    #[tokio::test]
    async fn test_uncompressed_body_is_plain_json() {
        let response = json_response(&json!({"ok": true}), false).await.unwrap();
        assert!(response.headers().get(header::CONTENT_ENCODING).is_none());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"ok":true}"#);
    }
}
