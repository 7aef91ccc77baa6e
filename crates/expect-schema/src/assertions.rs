use std::borrow::Cow;

use apollo_compiler::Schema;
use camino::{Utf8Path, Utf8PathBuf};

use crate::{EntityKind, SchemaDocument, SchemaError, util::unqualified_name};

/// Predicates over schema documents.
///
/// Each call resolves its document afresh; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SchemaAssertions {
    default_path: Utf8PathBuf,
    require_mutation: bool,
}

impl SchemaAssertions {
    pub fn new(default_path: impl Into<Utf8PathBuf>) -> Self {
        SchemaAssertions {
            default_path: default_path.into(),
            require_mutation: false,
        }
    }

    /// Also require a Mutation root in [`SchemaAssertions::is_valid_sdl`].
    pub fn require_mutation(mut self, require: bool) -> Self {
        self.require_mutation = require;
        self
    }

    pub fn default_path(&self) -> &Utf8Path {
        &self.default_path
    }

    pub fn resolve_schema<'a>(
        &self,
        document: &'a SchemaDocument,
    ) -> Result<Cow<'a, Schema>, SchemaError> {
        document.resolve(&self.default_path)
    }

    pub fn is_valid_sdl(&self, document: &SchemaDocument) -> Result<(), SchemaError> {
        let schema = self.resolve_schema(document)?;
        check_valid_sdl(&schema, self.require_mutation)
    }

    pub fn has_type(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Object)
    }

    pub fn has_union(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Union)
    }

    pub fn has_scalar(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Scalar)
    }

    pub fn has_enum(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Enum)
    }

    pub fn has_input(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Input)
    }

    pub fn has_interface(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Interface)
    }

    pub fn has_directive(&self, document: &SchemaDocument, name: &str) -> Result<(), SchemaError> {
        self.has_kind(document, name, EntityKind::Directive)
    }

    fn has_kind(
        &self,
        document: &SchemaDocument,
        name: &str,
        expected: EntityKind,
    ) -> Result<(), SchemaError> {
        let schema = self.resolve_schema(document)?;
        check_kind(&schema, name, expected)
    }
}

/// Check that `schema` has an entity called `name` of kind `expected`.
///
/// Namespace prefixes on `name` are ignored.
pub fn check_kind(schema: &Schema, name: &str, expected: EntityKind) -> Result<(), SchemaError> {
    let key = unqualified_name(name);
    let found = lookup_kind(schema, key, expected);
    tracing::debug!(name = key, %expected, ?found, "checking schema entity");
    if found == Some(expected) {
        Ok(())
    } else {
        Err(SchemaError::KindMismatchOrAbsent {
            name: key.to_string(),
            expected,
            found,
        })
    }
}

fn lookup_kind(schema: &Schema, key: &str, expected: EntityKind) -> Option<EntityKind> {
    if expected == EntityKind::Directive {
        schema
            .directive_definitions
            .contains_key(key)
            .then_some(EntityKind::Directive)
    } else {
        schema.types.get(key).map(EntityKind::of)
    }
}

/// Check that `schema` has the required root types and passes the
/// library's own validation.
pub fn check_valid_sdl(schema: &Schema, require_mutation: bool) -> Result<(), SchemaError> {
    check_root(schema, "Query", &query_root_name(schema))?;
    if require_mutation {
        check_root(schema, "Mutation", &mutation_root_name(schema))?;
    }

    schema
        .clone()
        .validate()
        .map(|_| ())
        .map_err(|errs| SchemaError::Validation(errs.to_string()))
}

fn check_root(schema: &Schema, operation: &str, name: &str) -> Result<(), SchemaError> {
    check_kind(schema, name, EntityKind::Object).map_err(|_| {
        SchemaError::Validation(format!("schema has no {operation} root type '{name}'"))
    })
}

fn query_root_name(schema: &Schema) -> String {
    schema
        .schema_definition
        .query
        .as_ref()
        .map_or_else(|| "Query".to_string(), |name| name.to_string())
}

fn mutation_root_name(schema: &Schema) -> String {
    schema
        .schema_definition
        .mutation
        .as_ref()
        .map_or_else(|| "Mutation".to_string(), |name| name.to_string())
}
