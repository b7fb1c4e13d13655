use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while loading or playing lyrics
#[derive(Debug)]
pub enum LyricError {
    Parse(ParseError),
    InvalidArgument(InvalidArgumentError),
    Config(ConfigError),
    Other(io::Error),
}

/// Subtitle content that could not be turned into any timed line
#[derive(Debug)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A command received a value outside its accepted domain
#[derive(Debug)]
pub struct InvalidArgumentError {
    pub message: String,
}

impl InvalidArgumentError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Player configuration errors
#[derive(Debug)]
pub struct ConfigError {
    pub message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for LyricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LyricError::Other(err) => write!(f, "I/O error: {}", err),
            LyricError::Parse(err) => write!(f, "Parse error: {}", err),
            LyricError::InvalidArgument(err) => write!(f, "Invalid argument: {}", err),
            LyricError::Config(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for InvalidArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl Error for LyricError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LyricError::Other(err) => Some(err),
            _ => None,
        }
    }
}
impl Error for ParseError {}
impl Error for InvalidArgumentError {}
impl Error for ConfigError {}

// Conversion implementations
impl From<io::Error> for LyricError {
    fn from(err: io::Error) -> Self {
        LyricError::Other(err)
    }
}

impl From<ParseError> for LyricError {
    fn from(err: ParseError) -> Self {
        LyricError::Parse(err)
    }
}

impl From<InvalidArgumentError> for LyricError {
    fn from(err: InvalidArgumentError) -> Self {
        LyricError::InvalidArgument(err)
    }
}

impl From<ConfigError> for LyricError {
    fn from(err: ConfigError) -> Self {
        LyricError::Config(err)
    }
}

impl From<serde_json::Error> for LyricError {
    fn from(err: serde_json::Error) -> Self {
        LyricError::Config(ConfigError::new(err.to_string()))
    }
}

// Conversion to io::Error so callers on plain io::Result can use `?`
impl From<LyricError> for io::Error {
    fn from(err: LyricError) -> Self {
        match err {
            LyricError::Other(inner) => inner,
            other => io::Error::other(other),
        }
    }
}

impl From<ParseError> for io::Error {
    fn from(err: ParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

impl From<InvalidArgumentError> for io::Error {
    fn from(err: InvalidArgumentError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

// Type alias for Result with LyricError
pub type LyricResult<T> = Result<T, LyricError>;
