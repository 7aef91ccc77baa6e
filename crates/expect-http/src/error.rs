/// Errors that may occur while reading a response
#[derive(thiserror::Error, Debug)]
pub enum BodyError {
    /// The body stream could not be read or rewound
    #[error("Body error: {:?}", .0)]
    Io(#[from] std::io::Error),
    /// A response could not be assembled
    #[error("HTTP Error: {:?}", .0)]
    Http(#[from] http::Error),
    /// A payload could not be encoded as JSON
    #[error("Serialization error: {:?}", .0)]
    Serialization(#[from] serde_json::Error),
}

impl BodyError {
    /// Whether the error came from the body stream itself
    pub const fn is_io(&self) -> bool {
        matches!(self, BodyError::Io(_))
    }
}
