//! Error types for folio-core
//!
//! Storage errors are recovered inside the theme store; content errors are
//! fatal at startup; theme errors only surface from explicit parsing.

use thiserror::Error;

/// Errors raised by a preference storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error reading or writing the preference file
    #[error("I/O error: {0}")]
    Io(String),

    /// Backend exists but cannot be used (disabled, no config dir, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Error encoding preferences
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored preferences could not be decoded
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            StorageError::Io(err.to_string())
        } else {
            StorageError::Deserialization(err.to_string())
        }
    }
}

impl StorageError {
    /// Create a new Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Create a new Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a new I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }
}

/// Errors from parsing theme names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Unknown theme: {0:?}")]
    UnknownTheme(String),
}

/// Errors loading the embedded portfolio content
#[derive(Debug, Error)]
pub enum ContentError {
    /// A content file is not valid JSON for its schema
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Content parsed but breaks a cross-reference or range rule
    #[error("Invalid content: {0}")]
    Invalid(String),
}

impl ContentError {
    /// Create a new Invalid error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Contact form validation failures, shown inline under the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a message")]
    MissingMessage,
}
