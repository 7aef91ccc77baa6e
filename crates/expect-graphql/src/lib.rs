#![warn(missing_docs)]

//! Provides assertions over HTTP responses returned by a GraphQL API

pub mod assertions;
pub mod envelope;
pub mod equality;
mod error;
pub mod path;
pub mod record;

pub use assertions::ResponseAssertions;
pub use envelope::decode_envelope;
pub use equality::Equality;
pub use error::{EnvelopeViolation, ResponseError};
pub use record::{ErrorRecord, Location, PathSegment};

/// Re-export / renamed type alias for [`graphql_client::Response`]
pub type GraphQLResponse<T> = graphql_client::Response<T>;
