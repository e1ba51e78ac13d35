//! Colored status lines for stdout and stderr.

use crate::config::Settings;
use crate::log_warn;
use std::fmt;
use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const BOLD_GREEN: &str = "\x1b[1;32m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Printer {
    color: bool,
}

impl Printer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Printer for a stream, honoring `NO_COLOR` and `_SSHCTX_FORCE_COLOR`.
    pub fn for_stream(settings: &Settings, is_tty: bool) -> Self {
        Self::new(settings.color_enabled(is_tty))
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.color { format!("{}{}{}", color, text, RESET) } else { text.to_string() }
    }

    /// Highlight for the previously connected host.
    pub fn active(&self, text: &str) -> String {
        self.paint(BOLD_GREEN, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    pub fn success(&self, out: &mut dyn Write, message: impl fmt::Display) -> io::Result<()> {
        writeln!(out, "{}{}", self.paint(GREEN, "✔ "), message)
    }

    pub fn warning(&self, out: &mut dyn Write, message: impl fmt::Display) -> io::Result<()> {
        writeln!(out, "{}{}", self.paint(YELLOW, "warning: "), message)
    }

    pub fn error(&self, out: &mut dyn Write, message: impl fmt::Display) -> io::Result<()> {
        writeln!(out, "{}{}", self.paint(RED, "error: "), message)
    }
}

/// Log a warning and print it to stderr.
pub fn warn(message: impl fmt::Display) {
    log_warn!("{}", message);
    let stderr = io::stderr();
    let printer = Printer::for_stream(&Settings::from_env(), stderr.is_terminal());
    let _ = printer.warning(&mut stderr.lock(), message);
}

#[cfg(test)]
#[path = "../test/ui/printer.rs"]
mod tests;
