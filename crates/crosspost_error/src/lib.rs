//! Error types for the Crosspost workspace.
//!
//! Every error records the file and line where it was created. The
//! composition engine is total over its inputs, so these types only surface
//! at the edges: configuration loading, reading and parsing input files, and
//! the caller-side precondition checks.

#![warn(missing_docs)]

mod config;
mod io;
mod json;
mod validation;

pub use config::ConfigError;
pub use io::IoError;
pub use json::JsonError;
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum CrosspostErrorKind {
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// File I/O error
    #[display("{}", _0)]
    Io(IoError),
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Request precondition failure
    #[display("{}", _0)]
    Validation(ValidationError),
}

/// Crosspost error with kind discrimination.
#[derive(Debug, derive_more::Display)]
#[display("Crosspost Error: {}", _0)]
pub struct CrosspostError(Box<CrosspostErrorKind>);

impl CrosspostError {
    /// Create a new error from a kind.
    pub fn new(kind: CrosspostErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CrosspostErrorKind {
        &self.0
    }
}

impl std::error::Error for CrosspostError {}

// Generic From implementation for any type that converts to CrosspostErrorKind
impl<T> From<T> for CrosspostError
where
    T: Into<CrosspostErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Crosspost operations.
pub type CrosspostResult<T> = std::result::Result<T, CrosspostError>;
