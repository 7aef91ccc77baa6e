use expect_http::BodyError;
use http::StatusCode;
use serde_json::Value;

/// Ways a response can fail to look like a GraphQL response
#[derive(thiserror::Error, Debug)]
pub enum EnvelopeViolation {
    /// The status code was not `200`
    #[error("status code {0} is not 200")]
    Status(StatusCode),
    /// The reason phrase was not `OK`
    #[error("reason phrase '{0}' is not 'OK'")]
    ReasonPhrase(String),
    /// The content type did not mention JSON
    #[error("content type '{0}' does not contain 'json'")]
    ContentType(String),
    /// The body was not JSON
    #[error("body is not valid JSON: {0}")]
    Json(String),
    /// The body was JSON, but not an object
    #[error("body is not a JSON object")]
    NotAnObject,
    /// The body had more top-level keys than `data` and `errors`
    #[error("body has {0} top-level keys, at most 2 are allowed")]
    TooManyKeys(usize),
    /// A top-level value was a bare scalar
    #[error("top-level value '{0}' is not an array or object")]
    ScalarValue(String),
}

/// Errors produced by response assertions
#[derive(thiserror::Error, Debug)]
pub enum ResponseError {
    /// The response is not a GraphQL response at all
    #[error("Failed asserting that the response is a GraphQL response: {0}")]
    Envelope(#[from] EnvelopeViolation),
    /// The response body could not be read
    #[error(transparent)]
    Body(#[from] BodyError),
    /// The envelope lacks a top-level key
    #[error("Failed asserting that the response has the key '{0}'")]
    MissingKey(&'static str),
    /// `data` differs from what was expected
    #[error("Failed asserting that the response data matches.\nexpected: {}\nactual: {}", pretty(.expected), pretty(.actual))]
    DataMismatch {
        /// The expected value
        expected: Value,
        /// The value in the response
        actual: Value,
    },
    /// `errors` differs from what was expected
    #[error("Failed asserting that the response errors match.\nexpected: {}\nactual: {}", pretty(.expected), pretty(.actual))]
    ErrorsMismatch {
        /// The expected value
        expected: Value,
        /// The value in the response
        actual: Value,
    },
    /// Nothing exists at a dot-path
    #[error("Failed asserting that the response has the key '{path}'")]
    PathNotFound {
        /// The full path looked up, including the `data.` prefix
        path: String,
    },
    /// Something exists at a dot-path, but not the expected value
    #[error("Failed asserting that '{path}' matches.\nexpected: {}\nactual: {}", pretty(.expected), pretty(.actual))]
    PathValueMismatch {
        /// The full path looked up, including the `data.` prefix
        path: String,
        /// The expected value
        expected: Value,
        /// The value in the response
        actual: Value,
    },
    /// An expected value could not be encoded as JSON
    #[error("Serialization error: {:?}", .0)]
    Serialization(serde_json::Error),
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

impl ResponseError {
    /// Whether the envelope checks failed
    pub const fn is_envelope(&self) -> bool {
        matches!(self, ResponseError::Envelope(_))
    }
    /// Whether `data` or `errors` did not match
    pub const fn is_payload_mismatch(&self) -> bool {
        matches!(
            self,
            ResponseError::DataMismatch { .. } | ResponseError::ErrorsMismatch { .. }
        )
    }
    /// Whether a dot-path lookup failed
    pub const fn is_path(&self) -> bool {
        matches!(
            self,
            ResponseError::PathNotFound { .. } | ResponseError::PathValueMismatch { .. }
        )
    }
}
