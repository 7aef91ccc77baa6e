use std::env;

use bon::Builder;
use camino::Utf8PathBuf;
use derive_getters::Getters;
use expect_graphql::Equality;

use crate::ConfigError;

/// Default schema file, relative to the project root.
pub const DEFAULT_SCHEMA_FILE: &str = "schema.graphql";

/// Set by cargo for build scripts, tests, and `cargo run`.
pub const MANIFEST_DIR_ENV: &str = "CARGO_MANIFEST_DIR";
/// Overrides [`ExpectConfig::schema_file`] in [`ExpectConfig::from_env`].
pub const SCHEMA_ENV: &str = "GRAPHQL_EXPECT_SCHEMA";
/// Overrides [`ExpectConfig::require_mutation`] in [`ExpectConfig::from_env`].
pub const REQUIRE_MUTATION_ENV: &str = "GRAPHQL_EXPECT_REQUIRE_MUTATION";

/// Settings shared by every assertion made through an [`crate::Expect`].
#[derive(Debug, Clone, Builder, Getters)]
pub struct ExpectConfig {
    /// Directory that relative schema paths are resolved against.
    #[builder(into)]
    project_root: Utf8PathBuf,

    /// Schema used when an assertion is given no document.
    #[builder(into, default = Utf8PathBuf::from(DEFAULT_SCHEMA_FILE))]
    schema_file: Utf8PathBuf,

    /// Whether valid SDL must also declare a Mutation root.
    #[builder(default)]
    require_mutation: bool,

    /// How response payloads are compared.
    #[builder(default)]
    equality: Equality,
}

impl ExpectConfig {
    /// Reads the project root from `CARGO_MANIFEST_DIR`, then applies any
    /// `GRAPHQL_EXPECT_*` overrides.
    pub fn from_env() -> Result<ExpectConfig, ConfigError> {
        let project_root =
            env::var(MANIFEST_DIR_ENV).map_err(|_| ConfigError::ProjectRootNotFound)?;
        let mut config = ExpectConfig::builder().project_root(project_root).build();

        if let Ok(schema_file) = env::var(SCHEMA_ENV) {
            tracing::debug!(%schema_file, "overriding default schema file");
            config.schema_file = Utf8PathBuf::from(schema_file);
        }
        if let Ok(flag) = env::var(REQUIRE_MUTATION_ENV) {
            config.require_mutation = parse_flag(REQUIRE_MUTATION_ENV, &flag)?;
        }

        Ok(config)
    }

    /// The default schema path. An absolute `schema_file` is used as is.
    pub fn schema_path(&self) -> Utf8PathBuf {
        self.project_root.join(&self.schema_file)
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" | "" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
