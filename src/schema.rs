use expect_schema::{EntityKind, Schema, SchemaAssertions, SchemaDocument, check_kind, check_valid_sdl};

use crate::{Failure, error::settle};

/// A resolved schema that assertions can be chained against.
///
/// Created by [`crate::Expect::schema`]; every predicate consumes the
/// expectation and hands it back on success.
#[derive(Debug, Clone)]
pub struct SchemaExpectation {
    schema: Schema,
    require_mutation: bool,
    negated: bool,
}

impl SchemaExpectation {
    pub(crate) fn resolve(
        assertions: &SchemaAssertions,
        document: SchemaDocument,
        require_mutation: bool,
    ) -> Result<SchemaExpectation, Failure> {
        let schema = match document {
            SchemaDocument::Parsed(schema) => schema,
            document => assertions.resolve_schema(&document)?.into_owned(),
        };
        Ok(SchemaExpectation {
            schema,
            require_mutation,
            negated: false,
        })
    }

    /// Inverts the next assertion only.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    pub fn is_valid_sdl(self) -> Result<Self, Failure> {
        let outcome = check_valid_sdl(&self.schema, self.require_mutation).map_err(Failure::from);
        self.settle("is_valid_sdl".to_string(), outcome)
    }

    pub fn has_type(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Object)
    }

    pub fn has_union(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Union)
    }

    pub fn has_scalar(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Scalar)
    }

    pub fn has_enum(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Enum)
    }

    pub fn has_input(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Input)
    }

    pub fn has_interface(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Interface)
    }

    pub fn has_directive(self, name: &str) -> Result<Self, Failure> {
        self.has_kind(name, EntityKind::Directive)
    }

    pub const fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn into_schema(self) -> Schema {
        self.schema
    }

    fn has_kind(self, name: &str, kind: EntityKind) -> Result<Self, Failure> {
        let outcome = check_kind(&self.schema, name, kind).map_err(Failure::from);
        self.settle(format!("has {kind} '{name}'"), outcome)
    }

    fn settle(mut self, assertion: String, outcome: Result<(), Failure>) -> Result<Self, Failure> {
        let negated = std::mem::take(&mut self.negated);
        settle(negated, &assertion, outcome)?;
        Ok(self)
    }
}
