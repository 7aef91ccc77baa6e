//! Provides constructors for replayable responses, mostly useful in tests

use http::header::CONTENT_TYPE;
use http::{HeaderValue, StatusCode};
use serde::Serialize;

use crate::{BodyError, HttpResponse, ReplayBody};

const JSON_CONTENT_TYPE: &str = "application/json";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Builds a `200 OK` response whose body is `payload` encoded as JSON
pub fn json<T>(payload: &T) -> Result<HttpResponse, BodyError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload)?;
    with_content_type(HeaderValue::from_static(JSON_CONTENT_TYPE), body)
}

/// Builds a `200 OK` response with an HTML body
pub fn html(markup: &str) -> Result<HttpResponse, BodyError> {
    with_content_type(
        HeaderValue::from_static(HTML_CONTENT_TYPE),
        markup.as_bytes().to_vec(),
    )
}

fn with_content_type(content_type: HeaderValue, body: Vec<u8>) -> Result<HttpResponse, BodyError> {
    let response = http::Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, content_type)
        .body(ReplayBody::new(body))?;
    Ok(response)
}
