//! Top-level error wrapper types.

use crate::{CommandError, ConfigError, InvalidFieldError, StoreError};

/// Every error condition the Warden crates surface.
///
/// # Examples
///
/// ```
/// use warden_error::{ConfigError, WardenError};
///
/// let err: WardenError = ConfigError::new("bad toml").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum WardenErrorKind {
    /// Record store error
    #[from(StoreError)]
    Store(StoreError),
    /// Rejected configuration field update
    #[from(InvalidFieldError)]
    InvalidField(InvalidFieldError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// User-facing command error
    #[from(CommandError)]
    Command(CommandError),
}

/// Warden error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Warden Error: {}", _0)]
pub struct WardenError(Box<WardenErrorKind>);

impl WardenError {
    /// Create a new error from a kind.
    pub fn new(kind: WardenErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &WardenErrorKind {
        &self.0
    }

    /// Text suitable for showing to a chat user.
    ///
    /// Command and field errors carry their own message; anything else is
    /// reported generically so store internals never leak into a channel.
    pub fn user_message(&self) -> String {
        match self.kind() {
            WardenErrorKind::Command(e) => e.kind.to_string(),
            WardenErrorKind::InvalidField(e) => e.kind.to_string(),
            WardenErrorKind::Store(_) | WardenErrorKind::Config(_) => {
                "Something went wrong, try again later.".to_string()
            }
        }
    }
}

// Generic From implementation for any type that converts to WardenErrorKind
impl<T> From<T> for WardenError
where
    T: Into<WardenErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Warden operations.
pub type WardenResult<T> = std::result::Result<T, WardenError>;
