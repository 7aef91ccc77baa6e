use apollo_compiler::schema::ExtendedType;

/// The kind of schema entity an assertion expects to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Object,
    Union,
    Scalar,
    Enum,
    Input,
    Interface,
    Directive,
}

impl EntityKind {
    /// Kinds stored in the schema's type table, as opposed to its directive table.
    pub const TYPE_KINDS: [EntityKind; 6] = [
        EntityKind::Object,
        EntityKind::Union,
        EntityKind::Scalar,
        EntityKind::Enum,
        EntityKind::Input,
        EntityKind::Interface,
    ];

    pub const fn label(&self) -> &'static str {
        match self {
            EntityKind::Object => "object",
            EntityKind::Union => "union",
            EntityKind::Scalar => "scalar",
            EntityKind::Enum => "enum",
            EntityKind::Input => "input",
            EntityKind::Interface => "interface",
            EntityKind::Directive => "directive",
        }
    }

    pub const fn of(ty: &ExtendedType) -> EntityKind {
        match ty {
            ExtendedType::Object(_) => EntityKind::Object,
            ExtendedType::Union(_) => EntityKind::Union,
            ExtendedType::Scalar(_) => EntityKind::Scalar,
            ExtendedType::Enum(_) => EntityKind::Enum,
            ExtendedType::InputObject(_) => EntityKind::Input,
            ExtendedType::Interface(_) => EntityKind::Interface,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
