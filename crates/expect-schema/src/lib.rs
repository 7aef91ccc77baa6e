pub mod assertions;
pub mod document;
pub mod error;
pub mod kind;
pub mod util;

// Re-export main public types
pub use apollo_compiler::Schema;
pub use assertions::{SchemaAssertions, check_kind, check_valid_sdl};
pub use document::SchemaDocument;
pub use error::SchemaError;
pub use kind::EntityKind;
pub use util::unqualified_name;
