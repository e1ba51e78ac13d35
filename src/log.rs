mod debug;
mod errors;
mod formatter;
mod macros;

pub use errors::LogError;
pub use formatter::LogFormatter;

use debug::DebugLogger;
use once_cell::sync::Lazy;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Process-wide logger used by the logging macros.
pub static LOGGER: Lazy<Logger> = Lazy::new(Logger::new);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

pub struct Logger {
    debug_mode: AtomicBool,
    debug_logger: DebugLogger,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    pub fn new() -> Self {
        Self {
            debug_mode: AtomicBool::new(false),
            debug_logger: DebugLogger::new(),
        }
    }

    /// Logger writing to an explicit file instead of `~/.sshctx/logs/sshctx.log`.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            debug_mode: AtomicBool::new(false),
            debug_logger: DebugLogger::with_path(path),
        }
    }

    pub fn enable_debug(&self) {
        self.debug_mode.store(true, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub(crate) fn disable_debug(&self) {
        self.debug_mode.store(false, Ordering::SeqCst);
    }

    pub fn is_debug_enabled(&self) -> bool {
        self.debug_mode.load(Ordering::SeqCst)
    }

    pub fn log_debug(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Debug, message)
    }

    pub fn log_info(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Info, message)
    }

    pub fn log_warn(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Warning, message)
    }

    pub fn log_error(&self, message: &str) -> Result<(), LogError> {
        self.log(LogLevel::Error, message)
    }

    pub fn flush(&self) -> Result<(), LogError> {
        self.debug_logger.flush()
    }

    fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        if self.is_debug_enabled() {
            self.debug_logger.log(level, message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "test/log.rs"]
mod tests;
