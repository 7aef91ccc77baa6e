use camino::Utf8PathBuf;
use thiserror::Error;

use crate::kind::EntityKind;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to parse schema: {0}")]
    Parse(String),

    #[error("Could not read schema document '{path}': {source}")]
    Unreadable {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Schema is not valid: {0}")]
    Validation(String),

    /// The named entity is missing, or it exists under a different kind.
    #[error("Failed asserting that the schema has {expected} '{name}'{}", found_suffix(.found))]
    KindMismatchOrAbsent {
        name: String,
        expected: EntityKind,
        found: Option<EntityKind>,
    },
}

fn found_suffix(found: &Option<EntityKind>) -> String {
    match found {
        Some(kind) => format!(" (found {kind})"),
        None => String::new(),
    }
}

impl SchemaError {
    pub const fn is_parse(&self) -> bool {
        matches!(self, SchemaError::Parse(_) | SchemaError::Unreadable { .. })
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self, SchemaError::Validation(_))
    }

    pub const fn is_kind_mismatch(&self) -> bool {
        matches!(self, SchemaError::KindMismatchOrAbsent { .. })
    }
}
