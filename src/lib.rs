//! Fluent assertions about GraphQL schema documents and GraphQL HTTP responses.
//!
//! ```no_run
//! use graphql_expect::{Expect, respond};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let expect = Expect::from_env()?;
//!
//! expect
//!     .default_schema()?
//!     .is_valid_sdl()?
//!     .has_type("Foo")?
//!     .not()
//!     .has_union("Foo")?;
//!
//! let mut response = respond::json(&json!({"data": {"foo": true}}))?;
//! expect
//!     .response(&mut response)
//!     .is_graphql_response()?
//!     .has_data(&json!({"foo": true}))?
//!     .not()
//!     .has_data(&json!({"foo": false}))?;
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod expect;
mod response;
mod schema;

pub use config::{DEFAULT_SCHEMA_FILE, ExpectConfig};
pub use error::{ConfigError, Failure};
pub use expect::Expect;
pub use response::ResponseExpectation;
pub use schema::SchemaExpectation;

pub use expect_graphql::{
    EnvelopeViolation, Equality, ErrorRecord, GraphQLResponse, Location, PathSegment,
    ResponseAssertions, ResponseError, path,
};
pub use expect_http::{HttpResponse, ReasonPhrase, ReplayBody, respond};
pub use expect_schema::{
    EntityKind, Schema, SchemaAssertions, SchemaDocument, SchemaError, unqualified_name,
};
