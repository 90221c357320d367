//! Request precondition error types.

/// Kinds of request validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ValidationErrorKind {
    /// The request carries no destination account group
    #[display("Missing accountGroupId")]
    MissingAccountGroup,
    /// Neither `platforms` nor `variants` names a platform
    #[display("No target platform in platforms or variants")]
    NoTargetPlatform,
    /// The profile key to attach is empty
    #[display("Profile key is empty")]
    EmptyProfileKey,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use crosspost_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoTargetPlatform);
/// assert!(format!("{}", err).contains("No target platform"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
