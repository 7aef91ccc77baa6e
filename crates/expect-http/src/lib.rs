#![warn(missing_docs)]

//! Provides the HTTP response model that GraphQL response assertions inspect

pub mod body;
mod error;
pub mod headers;
pub mod respond;

pub use body::{read_body, ReplayBody};
pub use error::BodyError;
pub use headers::header_line;

/// Ease-of-use synonym for the response type this crate operates on
pub type HttpResponse<B = ReplayBody> = http::Response<B>;

/// Reason phrase carried by a response, stored as a response extension
///
/// Responses without this extension report their status code's canonical reason
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonPhrase(pub String);

/// Returns the reason phrase of a response
pub fn reason_phrase<B>(response: &http::Response<B>) -> &str {
    match response.extensions().get::<ReasonPhrase>() {
        Some(ReasonPhrase(phrase)) => phrase.as_str(),
        None => response.status().canonical_reason().unwrap_or_default(),
    }
}
