use expect_graphql::ResponseError;
use expect_schema::SchemaError;
use thiserror::Error;

/// ConfigError is the type of Error that occurs while building an [`crate::ExpectConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// ProjectRootNotFound occurs when `CARGO_MANIFEST_DIR` is not set.
    #[error("Could not determine the project root; CARGO_MANIFEST_DIR is not set.")]
    ProjectRootNotFound,

    /// InvalidFlag occurs when a boolean override holds something other than a boolean.
    #[error("'{value}' is not a valid value for {name}; expected true or false.")]
    InvalidFlag {
        /// The environment variable name
        name: &'static str,
        /// The rejected value
        value: String,
    },
}

/// Failure is the type of Error returned by every assertion.
#[derive(Error, Debug)]
pub enum Failure {
    /// A schema could not be resolved, or a schema assertion failed.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// A response assertion failed, or the response could not be read.
    #[error(transparent)]
    Response(#[from] ResponseError),

    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Negated occurs when an assertion preceded by `not()` passed.
    #[error("Expected '{assertion}' to fail, but it passed.")]
    Negated {
        /// The assertion that passed
        assertion: String,
    },
}

impl Failure {
    /// Whether this is a failed assertion rather than a problem reading the subject.
    ///
    /// Only assertion failures are inverted by `not()`.
    pub const fn is_assertion(&self) -> bool {
        match self {
            Failure::Schema(err) => !err.is_parse(),
            Failure::Response(err) => {
                !matches!(err, ResponseError::Body(_) | ResponseError::Serialization(_))
            }
            Failure::Config(_) => false,
            Failure::Negated { .. } => true,
        }
    }
}

/// Applies an optional negation to the outcome of one assertion.
pub(crate) fn settle(negated: bool, assertion: &str, outcome: Result<(), Failure>) -> Result<(), Failure> {
    match (negated, outcome) {
        (false, outcome) => outcome,
        (true, Ok(())) => Err(Failure::Negated {
            assertion: assertion.to_string(),
        }),
        (true, Err(failure)) if failure.is_assertion() => {
            tracing::debug!(assertion, %failure, "negated assertion failed as expected");
            Ok(())
        }
        (true, Err(failure)) => Err(failure),
    }
}
