use std::borrow::Cow;
use std::fs;

use apollo_compiler::Schema;
use camino::{Utf8Path, Utf8PathBuf};

use crate::SchemaError;

/// Source name given to schemas parsed from inline SDL.
const INLINE_SOURCE_NAME: &str = "schema.graphql";

/// Where a schema comes from.
#[derive(Debug, Clone, Default)]
pub enum SchemaDocument {
    /// The configured default schema file.
    #[default]
    Default,
    /// A path if it names an existing file, otherwise inline SDL.
    Text(String),
    /// A file that must exist.
    Path(Utf8PathBuf),
    /// A schema that has already been parsed.
    Parsed(Schema),
}

impl SchemaDocument {
    /// Produce a schema from this document, parsing it if needed.
    ///
    /// `default_path` is read when the document is [`SchemaDocument::Default`].
    pub fn resolve(&self, default_path: &Utf8Path) -> Result<Cow<'_, Schema>, SchemaError> {
        match self {
            SchemaDocument::Parsed(schema) => {
                tracing::debug!("using pre-parsed schema");
                Ok(Cow::Borrowed(schema))
            }
            SchemaDocument::Default => parse_file(default_path).map(Cow::Owned),
            SchemaDocument::Path(path) => parse_file(path).map(Cow::Owned),
            SchemaDocument::Text(text) => {
                let candidate = Utf8Path::new(text);
                if candidate.is_file() {
                    parse_file(candidate).map(Cow::Owned)
                } else {
                    tracing::debug!("treating document as inline SDL");
                    parse_sdl(text.as_str(), INLINE_SOURCE_NAME).map(Cow::Owned)
                }
            }
        }
    }
}

fn parse_file(path: &Utf8Path) -> Result<Schema, SchemaError> {
    tracing::info!("reading {} from disk", path);
    let sdl = fs::read_to_string(path).map_err(|source| SchemaError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_sdl(sdl, path.as_str())
}

fn parse_sdl(sdl: impl Into<String>, source_name: &str) -> Result<Schema, SchemaError> {
    Schema::parse(sdl, source_name).map_err(|errs| SchemaError::Parse(errs.to_string()))
}

impl From<&str> for SchemaDocument {
    fn from(value: &str) -> Self {
        SchemaDocument::Text(value.to_string())
    }
}

impl From<String> for SchemaDocument {
    fn from(value: String) -> Self {
        SchemaDocument::Text(value)
    }
}

impl From<Utf8PathBuf> for SchemaDocument {
    fn from(value: Utf8PathBuf) -> Self {
        SchemaDocument::Path(value)
    }
}

impl From<&Utf8Path> for SchemaDocument {
    fn from(value: &Utf8Path) -> Self {
        SchemaDocument::Path(value.to_path_buf())
    }
}

impl From<Schema> for SchemaDocument {
    fn from(value: Schema) -> Self {
        SchemaDocument::Parsed(value)
    }
}
