// HTTP response utilities for uncached dashboard responses
use axum::{
    body::Body,
    http::{header, HeaderValue, Response, StatusCode},
};
use serde::Serialize;

/// Build a response the browser must not cache, so a reload always re-renders.
pub fn no_store_response(
    status: StatusCode,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<Response<Body>, StatusCode> {
    let content_length = HeaderValue::from_str(&body.len().to_string()).map_err(|e| {
        tracing::error!("Invalid content length header: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CACHE_CONTROL, "no-store")
        .header(header::CONTENT_LENGTH, content_length)
        .body(Body::from(body))
        .map_err(|e| {
            tracing::error!("Response build error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
}

pub fn html_response(body: String) -> Result<Response<Body>, StatusCode> {
    no_store_response(StatusCode::OK, "text/html; charset=utf-8", body.into_bytes())
}

pub fn json_response<T: Serialize>(
    status: StatusCode,
    data: &T,
) -> Result<Response<Body>, StatusCode> {
    let body = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    no_store_response(status, "application/json", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_response_headers() {
        let response = html_response("<p>hi</p>".to_string()).unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/html; charset=utf-8"
        );
        assert_eq!(response.headers()[header::CONTENT_LENGTH], "9");
    }

    #[test]
    fn test_json_response_status() {
        let response =
            json_response(StatusCode::BAD_GATEWAY, &serde_json::json!({"ok": false})).unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    }
}
