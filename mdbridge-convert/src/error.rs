//! Error types for conversion operations

use std::fmt;

/// Errors that can occur during a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Input was empty or whitespace-only
    EmptyInput,
    /// No converter registered for the requested mode
    ConverterNotFound(String),
    /// Error while serializing an HTML DOM back to text
    SerializationError(String),
    /// Unexpected failure inside the pipeline (a caught panic)
    Internal(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::EmptyInput => write!(f, "Please provide content to convert"),
            ConvertError::ConverterNotFound(name) => write!(f, "Converter '{name}' not found"),
            ConvertError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            ConvertError::Internal(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ConvertError {}
