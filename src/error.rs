//! Error types for password generation and persistence.

/// Specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ErrorKind {
    /// Request parameter rejected before generation started.
    #[display("Invalid argument: {_0}")]
    InvalidArgument(String),
    /// A character class has no symbols to draw from.
    #[display("Empty character table: {_0}")]
    EmptyCharset(String),
    /// The secure random source failed. Never retried or substituted.
    #[display("Secure random source failed: {_0}")]
    Entropy(String),
    /// Reading or writing a file failed.
    #[display("I/O error: {_0}")]
    Io(String),
    /// Clipboard unavailable or rejected the contents.
    #[display("Clipboard error: {_0}")]
    Clipboard(String),
    /// Settings file could not be read or written.
    #[display("Settings error: {_0}")]
    Settings(String),
}

/// Error with the source location that raised it.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("{kind}")]
pub struct Error {
    kind: ErrorKind,
    line: u32,
    file: &'static str,
}

impl Error {
    /// Create a new error, recording the caller's location.
    #[track_caller]
    pub fn new(kind: ErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// `file:line` where the error was raised.
    pub fn location(&self) -> String {
        format!("{}:{}", self.file, self.line)
    }

    #[track_caller]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument(msg.into()))
    }
}

impl From<ErrorKind> for Error {
    #[track_caller]
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<std::io::Error> for Error {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err.to_string()))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
