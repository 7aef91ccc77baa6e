use std::io::{Read, Seek};

use expect_graphql::ResponseAssertions;
use expect_http::HttpResponse;
use expect_schema::{SchemaAssertions, SchemaDocument};

use crate::{ExpectConfig, Failure, ResponseExpectation, SchemaExpectation};

/// Entry point for schema and response assertions.
///
/// `schema` and `response` start fluent chains. `schemas` and `responses`
/// expose the same predicates as one-shot calls that resolve their subject
/// every time.
#[derive(Debug, Clone)]
pub struct Expect {
    config: ExpectConfig,
    schemas: SchemaAssertions,
    responses: ResponseAssertions,
}

impl Expect {
    pub fn new(config: ExpectConfig) -> Expect {
        let schemas = SchemaAssertions::new(config.schema_path())
            .require_mutation(*config.require_mutation());
        let responses = ResponseAssertions::new(*config.equality());
        Expect {
            config,
            schemas,
            responses,
        }
    }

    /// Builds an [`Expect`] from [`ExpectConfig::from_env`] and initializes
    /// logging from `GRAPHQL_EXPECT_LOG`.
    pub fn from_env() -> Result<Expect, Failure> {
        expect_log::init_from_env();
        let config = ExpectConfig::from_env()?;
        tracing::debug!(schema = %config.schema_path(), "loaded assertion config");
        Ok(Expect::new(config))
    }

    pub const fn config(&self) -> &ExpectConfig {
        &self.config
    }

    pub const fn schemas(&self) -> &SchemaAssertions {
        &self.schemas
    }

    pub const fn responses(&self) -> &ResponseAssertions {
        &self.responses
    }

    /// Resolves `document` and starts a chain against it.
    pub fn schema(&self, document: impl Into<SchemaDocument>) -> Result<SchemaExpectation, Failure> {
        SchemaExpectation::resolve(
            &self.schemas,
            document.into(),
            *self.config.require_mutation(),
        )
    }

    /// Starts a chain against the configured default schema file.
    pub fn default_schema(&self) -> Result<SchemaExpectation, Failure> {
        self.schema(SchemaDocument::Default)
    }

    pub fn response<'r, B>(&self, response: &'r mut HttpResponse<B>) -> ResponseExpectation<'r, B>
    where
        B: Read + Seek,
    {
        ResponseExpectation::new(response, self.responses)
    }
}
