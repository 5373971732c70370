//! Error types for export operations

use thiserror::Error;

/// Errors that can occur while selecting a format or producing an artifact
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// A format option had a value the format does not understand
    #[error("Invalid option: {0}")]
    InvalidOption(String),
    /// Error while rendering or writing an artifact
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Error while assembling a packaged (zip based) artifact
    #[error("Packaging error: {0}")]
    Packaging(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        assert_eq!(
            FormatError::FormatNotFound("rtf".to_string()).to_string(),
            "Format 'rtf' not found"
        );
        assert_eq!(
            FormatError::Packaging("zip closed".to_string()).to_string(),
            "Packaging error: zip closed"
        );
    }
}
