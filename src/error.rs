use thiserror::Error;

/// Errors produced while generating parser code
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input text is not well-formed JSON
    #[error("Failed to parse JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The parsed document could not be written back as compact JSON
    #[error("Failed to serialize JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GenerateError>;
