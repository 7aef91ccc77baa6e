//! Expected entries of a response's `errors` list

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single GraphQL error as it appears in a response body
///
/// Absent optional fields are left out when serialized, so a record only has to
/// spell out the keys the response carries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// The human-readable message
    pub message: String,
    /// Where in the operation the error applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Vec<Location>>,
    /// Which response field the error applies to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,
    /// Server-defined extra detail
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Map<String, Value>>,
}

impl ErrorRecord {
    /// Constructs a new [`ErrorRecord`] with only a message
    pub fn new(message: impl Into<String>) -> ErrorRecord {
        ErrorRecord {
            message: message.into(),
            ..ErrorRecord::default()
        }
    }

    /// Adds a location
    pub fn at(mut self, line: u32, column: u32) -> ErrorRecord {
        self.locations
            .get_or_insert_with(Vec::new)
            .push(Location { line, column });
        self
    }

    /// Sets the path
    pub fn path<I, S>(mut self, path: I) -> ErrorRecord
    where
        I: IntoIterator<Item = S>,
        S: Into<PathSegment>,
    {
        self.path = Some(path.into_iter().map(Into::into).collect());
        self
    }
}

/// A line and column within a GraphQL operation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

/// One step of an error path: a field name or a list index
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name or alias
    Key(String),
    /// A list index
    Index(u64),
}

impl From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        PathSegment::Key(value.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(value: String) -> Self {
        PathSegment::Key(value)
    }
}

impl From<u64> for PathSegment {
    fn from(value: u64) -> Self {
        PathSegment::Index(value)
    }
}
