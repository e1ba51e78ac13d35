use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum UIError {
    IoError(io::Error),
    /// Raw mode or event reading failed.
    TerminalError(String),
    NoOptions,
}

impl fmt::Display for UIError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UIError::IoError(e) => write!(f, "I/O error: {}", e),
            UIError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
            UIError::NoOptions => write!(f, "nothing to select from"),
        }
    }
}

impl Error for UIError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UIError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for UIError {
    fn from(error: io::Error) -> Self {
        UIError::IoError(error)
    }
}
