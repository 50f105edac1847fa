//! User-facing command errors.

/// Command failure conditions that are reported back to the invoking user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CommandErrorKind {
    /// Required argument missing
    #[display("Missing argument: {}", _0)]
    MissingArgument(String),
    /// Argument could not be parsed
    #[display("Invalid argument: {}", _0)]
    InvalidArgument(String),
    /// Member tracking is not enabled for this guild
    #[display("This command is not available in this server.")]
    NotTracked,
    /// Target member is a bot
    #[display("I'm not paying attention to bots.")]
    BotTarget,
    /// Nothing stored for the member
    #[display("No nicks stored yet.")]
    NoNicks,
    /// Invoker lacks the required role
    #[display("You are not allowed to do that.")]
    PermissionDenied,
}

/// Command error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Command Error: {} at line {} in {}", kind, line, file)]
pub struct CommandError {
    /// The kind of error that occurred
    pub kind: CommandErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CommandError {
    /// Create a new CommandError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CommandErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
