//! Runtime settings read from environment variables.

use std::env;

pub const SSH_CONFIG_ENV: &str = "SSHCONFIG";
pub const STORE_ENV: &str = "SSHCTX";
pub const IGNORE_FZF_ENV: &str = "SSHCTX_IGNORE_FZF";
pub const NO_COLOR_ENV: &str = "NO_COLOR";
pub const FORCE_COLOR_ENV: &str = "_SSHCTX_FORCE_COLOR";
pub const DEBUG_ENV: &str = "DEBUG";
pub const STRICT_MODE_ENV: &str = "STRICT_MODE";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Never use fzf for interactive selection.
    pub ignore_fzf: bool,
    pub no_color: bool,
    /// Set when listing under fzf, whose input is a pipe.
    pub force_color: bool,
    pub debug: bool,
    /// Skip hosts whose target is not `user@host[:port]`.
    pub strict_mode: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| lookup(name).is_some_and(|value| !value.is_empty());
        let present = |name: &str| lookup(name).is_some();

        Self {
            ignore_fzf: non_empty(IGNORE_FZF_ENV),
            no_color: present(NO_COLOR_ENV),
            force_color: non_empty(FORCE_COLOR_ENV),
            debug: present(DEBUG_ENV),
            strict_mode: present(STRICT_MODE_ENV),
        }
    }

    pub fn color_enabled(&self, is_tty: bool) -> bool {
        if self.force_color {
            return true;
        }
        if self.no_color {
            return false;
        }
        is_tty
    }
}

#[cfg(test)]
#[path = "test/config.rs"]
mod tests;
