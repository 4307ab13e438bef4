use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for tocify operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for tocify operations
#[derive(Debug)]
pub enum TocifyError {
    /// IO error wrapper
    Io(io::Error),
    /// Input handling error
    Input(String),
    /// Heading pattern error
    Pattern(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for TocifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TocifyError::Io(err) => write!(f, "IO error: {}", err),
            TocifyError::Input(msg) => write!(f, "Input error: {}", msg),
            TocifyError::Pattern(msg) => write!(f, "Pattern error: {}", msg),
            TocifyError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for TocifyError {}

impl From<io::Error> for TocifyError {
    fn from(err: io::Error) -> Self {
        TocifyError::Io(err)
    }
}

impl From<String> for TocifyError {
    fn from(msg: String) -> Self {
        TocifyError::Generic(msg)
    }
}

impl From<&str> for TocifyError {
    fn from(msg: &str) -> Self {
        TocifyError::Generic(msg.to_string())
    }
}
