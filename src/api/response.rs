use axum::{
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body plus an `X-Total-Count` header carrying the unpaginated total.
pub fn with_total_count<T: Serialize>(data: T, count: i64) -> Response {
    let json = match serde_json::to_string(&data) {
        Ok(json) => json,
        Err(_) => return StatusCode::INTERNAL_SERVER_ERROR.into_response(),
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(
        "x-total-count",
        HeaderValue::from(count),
    );

    (StatusCode::OK, headers, json).into_response()
}
