use crate::log::LogLevel;
use chrono::Local;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Renders one log line as `<timestamp> [LEVEL] message`.
#[derive(Debug, Clone)]
pub struct LogFormatter {
    include_timestamp: bool,
    include_level: bool,
}

impl LogFormatter {
    pub fn new(include_timestamp: bool, include_level: bool) -> Self {
        Self {
            include_timestamp,
            include_level,
        }
    }

    pub fn format(&self, level: Option<LogLevel>, message: &str) -> String {
        let mut line = String::with_capacity(message.len() + 32);

        // writing into a String cannot fail
        if self.include_timestamp {
            let _ = write!(line, "{} ", Local::now().format(TIMESTAMP_FORMAT));
        }
        if self.include_level
            && let Some(level) = level
        {
            let _ = write!(line, "[{}] ", level.as_str());
        }

        line.push_str(message);
        line
    }
}

impl Default for LogFormatter {
    fn default() -> Self {
        Self::new(true, true)
    }
}
