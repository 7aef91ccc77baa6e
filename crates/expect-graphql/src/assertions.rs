//! Predicates over GraphQL HTTP responses

use std::io::{Read, Seek};

use expect_http::HttpResponse;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{decode_envelope, path, Equality, GraphQLResponse, ResponseError};

const DATA_KEY: &str = "data";
const ERRORS_KEY: &str = "errors";

/// Predicates over GraphQL HTTP responses
///
/// Every predicate re-validates the envelope before looking at specific keys, and
/// leaves the response body rewound so further assertions can read it again.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResponseAssertions {
    equality: Equality,
}

impl ResponseAssertions {
    /// Constructs a new [`ResponseAssertions`]
    pub const fn new(equality: Equality) -> ResponseAssertions {
        ResponseAssertions { equality }
    }

    /// The comparison used for payloads and path values
    pub const fn equality(&self) -> Equality {
        self.equality
    }

    /// Asserts that `response` is a well-formed GraphQL response
    pub fn is_graphql_response<B>(&self, response: &mut HttpResponse<B>) -> Result<(), ResponseError>
    where
        B: Read + Seek,
    {
        decode_envelope(response).map(|_| ())
    }

    /// Asserts that the response's `data` equals `expected`
    pub fn has_data<B, T>(&self, response: &mut HttpResponse<B>, expected: &T) -> Result<(), ResponseError>
    where
        B: Read + Seek,
        T: Serialize + ?Sized,
    {
        let expected = to_value(expected)?;
        let actual = self.top_level(response, DATA_KEY)?;
        if self.equality.matches(&expected, &actual) {
            Ok(())
        } else {
            Err(ResponseError::DataMismatch { expected, actual })
        }
    }

    /// Asserts that the response's `errors` equals `expected`
    ///
    /// `expected` is usually a slice of [`crate::ErrorRecord`] or a JSON array.
    pub fn has_errors<B, T>(&self, response: &mut HttpResponse<B>, expected: &T) -> Result<(), ResponseError>
    where
        B: Read + Seek,
        T: Serialize + ?Sized,
    {
        let expected = to_value(expected)?;
        let actual = self.top_level(response, ERRORS_KEY)?;
        if self.equality.matches(&expected, &actual) {
            Ok(())
        } else {
            Err(ResponseError::ErrorsMismatch { expected, actual })
        }
    }

    /// Asserts that something exists at `data.<path>`
    pub fn has_path<B>(&self, response: &mut HttpResponse<B>, path: &str) -> Result<(), ResponseError>
    where
        B: Read + Seek,
    {
        let (full_path, tree) = Self::prepare_path(response, path)?;
        lookup(&tree, &full_path).map(|_| ())
    }

    /// Asserts that the value at `data.<path>` equals `expected`
    pub fn has_path_value<B, T>(
        &self,
        response: &mut HttpResponse<B>,
        path: &str,
        expected: &T,
    ) -> Result<(), ResponseError>
    where
        B: Read + Seek,
        T: Serialize + ?Sized,
    {
        let expected = to_value(expected)?;
        let (full_path, tree) = Self::prepare_path(response, path)?;
        let actual = lookup(&tree, &full_path)?;
        if self.equality.matches(&expected, actual) {
            Ok(())
        } else {
            Err(ResponseError::PathValueMismatch {
                path: full_path,
                expected,
                actual: actual.clone(),
            })
        }
    }

    /// Validates the envelope and decodes it into a typed [`GraphQLResponse`]
    pub fn decode<B, T>(&self, response: &mut HttpResponse<B>) -> Result<GraphQLResponse<T>, ResponseError>
    where
        B: Read + Seek,
        T: DeserializeOwned,
    {
        let envelope = decode_envelope(response)?;
        serde_json::from_value(Value::Object(envelope)).map_err(ResponseError::Serialization)
    }

    fn top_level<B>(&self, response: &mut HttpResponse<B>, key: &'static str) -> Result<Value, ResponseError>
    where
        B: Read + Seek,
    {
        let mut envelope = decode_envelope(response)?;
        envelope.remove(key).ok_or(ResponseError::MissingKey(key))
    }

    fn prepare_path<B>(response: &mut HttpResponse<B>, path: &str) -> Result<(String, Value), ResponseError>
    where
        B: Read + Seek,
    {
        let envelope = decode_envelope(response)?;
        Ok((format!("{DATA_KEY}.{path}"), Value::Object(envelope)))
    }
}

fn lookup<'a>(tree: &'a Value, full_path: &str) -> Result<&'a Value, ResponseError> {
    let found = path::get(tree, full_path);
    tracing::debug!(path = full_path, found = found.is_some(), "looked up dot-path");
    found.ok_or_else(|| ResponseError::PathNotFound {
        path: full_path.to_string(),
    })
}

fn to_value<T>(expected: &T) -> Result<Value, ResponseError>
where
    T: Serialize + ?Sized,
{
    serde_json::to_value(expected).map_err(ResponseError::Serialization)
}
