//! Logging-related error types

use std::{error::Error, fmt, io};

/// Errors that can occur during logging operations
#[derive(Debug)]
pub enum LogError {
    /// I/O error when writing to the log file
    IoError(io::Error),
    /// Failed to create the log directory
    DirectoryCreationError(String),
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogError::IoError(err) => write!(f, "I/O error: {}", err),
            LogError::DirectoryCreationError(msg) => {
                write!(f, "Failed to create directory: {}", msg)
            }
        }
    }
}

impl Error for LogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LogError::IoError(err) => Some(err),
            LogError::DirectoryCreationError(_) => None,
        }
    }
}

impl From<io::Error> for LogError {
    fn from(err: io::Error) -> Self {
        LogError::IoError(err)
    }
}
