//! Core error types for hackhub-core.
//!
//! This module defines the error hierarchy using thiserror. Library code
//! propagates these with `?`; the CLI maps them to a non-zero exit.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for hackhub-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Authentication-related errors
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Board-related errors
    #[error("Board error: {0}")]
    Board(#[from] BoardError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The data directory could not be created or resolved
    #[error("Failed to prepare data directory {path}: {source}")]
    DataDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A persisted document could not be written
    #[error("Failed to write {name}: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A persisted document could not be serialized
    #[error("Failed to encode {name}: {source}")]
    EncodeFailed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Config file parse failure
    #[error("Failed to parse config: {0}")]
    ConfigParse(String),
}

/// Authentication-specific errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Operation requires an authenticated session
    #[error("Not signed in")]
    NotAuthenticated,

    /// The backend rejected the credentials
    #[error("Authentication rejected: {0}")]
    Rejected(String),
}

/// Board-specific errors.
#[derive(Error, Debug)]
pub enum BoardError {
    /// Referenced column does not exist
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// Card not found in the given source column
    #[error("Card '{card}' not found in column '{column}'")]
    CardNotInColumn { card: String, column: String },
}

/// Validation errors for user-supplied input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field was left empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// An email address failed the basic shape check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Referenced entity does not exist
    #[error("Unknown {kind}: {id}")]
    UnknownEntity { kind: &'static str, id: String },

    /// The requested slot/value is not offered
    #[error("Unavailable {kind}: {value}")]
    Unavailable { kind: &'static str, value: String },
}
