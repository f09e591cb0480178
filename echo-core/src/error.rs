//! Error types for the Echo core library.

use thiserror::Error;

/// Top-level error type for all Echo operations.
///
/// The engine itself is total over its inputs: empty strings, arbitrary
/// text, and arbitrary participant names are all valid. Errors arise only
/// at the configuration boundary.
#[derive(Error, Debug)]
pub enum EchoError {
    /// Persona seed could not be parsed or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, EchoError>;
