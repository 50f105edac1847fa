//! Guild configuration field errors.

/// Reasons a configuration field update was rejected before reaching the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum InvalidFieldErrorKind {
    /// Name is not a recognized setting
    #[display("Not a valid guild config setting: '{}'", _0)]
    UnknownField(String),
    /// Setting exists but is managed by the store
    #[display("Setting '{}' cannot be changed", _0)]
    ReadOnlyField(String),
    /// Value does not fit the setting
    #[display("Invalid value for '{}': {}", field, reason)]
    InvalidValue {
        /// Setting name
        field: String,
        /// Why the value was rejected
        reason: String,
    },
}

/// Invalid field error with source location tracking.
///
/// # Examples
///
/// ```
/// use warden_error::{InvalidFieldError, InvalidFieldErrorKind};
///
/// let err = InvalidFieldError::new(InvalidFieldErrorKind::UnknownField("colour".into()));
/// assert!(format!("{}", err).contains("colour"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Field: {} at line {} in {}", kind, line, file)]
pub struct InvalidFieldError {
    /// The kind of error that occurred
    pub kind: InvalidFieldErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl InvalidFieldError {
    /// Create a new InvalidFieldError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: InvalidFieldErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
