//! Validation of the GraphQL-over-HTTP response shape

use std::io::{Read, Seek};

use expect_http::{header_line, read_body, reason_phrase, HttpResponse};
use http::{header::CONTENT_TYPE, StatusCode};
use serde_json::{Map, Value};

use crate::{EnvelopeViolation, ResponseError};

const EXPECTED_REASON: &str = "OK";
const JSON_MARKER: &str = "json";
const MAX_TOP_LEVEL_KEYS: usize = 2;

/// Checks that `response` is a GraphQL response and returns its decoded top-level
/// object
///
/// The body is left rewound to its start.
pub fn decode_envelope<B>(response: &mut HttpResponse<B>) -> Result<Map<String, Value>, ResponseError>
where
    B: Read + Seek,
{
    check_head(response)?;

    let body = read_body(response.body_mut())?;
    let decoded: Value = serde_json::from_slice(&body)
        .map_err(|err| EnvelopeViolation::Json(err.to_string()))?;
    let Value::Object(envelope) = decoded else {
        return Err(EnvelopeViolation::NotAnObject.into());
    };

    if envelope.len() > MAX_TOP_LEVEL_KEYS {
        return Err(EnvelopeViolation::TooManyKeys(envelope.len()).into());
    }
    if let Some((key, _)) = envelope
        .iter()
        .find(|(_, value)| !(value.is_array() || value.is_object()))
    {
        return Err(EnvelopeViolation::ScalarValue(key.clone()).into());
    }

    tracing::debug!(keys = ?envelope.keys().collect::<Vec<_>>(), "decoded GraphQL envelope");
    Ok(envelope)
}

fn check_head<B>(response: &HttpResponse<B>) -> Result<(), EnvelopeViolation> {
    if response.status() != StatusCode::OK {
        return Err(EnvelopeViolation::Status(response.status()));
    }

    let reason = reason_phrase(response);
    if reason != EXPECTED_REASON {
        return Err(EnvelopeViolation::ReasonPhrase(reason.to_string()));
    }

    let content_type = header_line(response.headers(), CONTENT_TYPE);
    if !content_type.contains(JSON_MARKER) {
        return Err(EnvelopeViolation::ContentType(content_type));
    }

    Ok(())
}
