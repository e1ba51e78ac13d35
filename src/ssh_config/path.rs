//! Path helpers for SSH config and previous-host store discovery.

use super::errors::SshConfigError;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Directory under the home directory that holds sshctx state.
pub const STATE_DIR_NAME: &str = ".sshctx";
pub const STORE_FILE_NAME: &str = "config.yaml";

/// Expand a leading `~/` against `home`.
pub(super) fn expand_tilde(path: &Path, home: Option<&Path>) -> PathBuf {
    if let (Ok(rest), Some(home)) = (path.strip_prefix("~"), home) {
        return home.join(rest);
    }

    path.to_path_buf()
}

/// `<home>/.ssh/config`
pub fn default_ssh_config_path(home: &Path) -> PathBuf {
    home.join(".ssh").join("config")
}

/// `<home>/.sshctx`
pub fn state_dir(home: &Path) -> PathBuf {
    home.join(STATE_DIR_NAME)
}

/// `<home>/.sshctx/config.yaml`
pub fn default_store_path(home: &Path) -> PathBuf {
    state_dir(home).join(STORE_FILE_NAME)
}

/// Interpret the value of a path override variable.
///
/// Unset or empty means no override. A platform path list with more than one entry is rejected.
pub(super) fn resolve_override(var: &'static str, value: Option<&OsStr>, home: Option<&Path>) -> Result<Option<PathBuf>, SshConfigError> {
    let Some(value) = value.filter(|value| !value.is_empty()) else {
        return Ok(None);
    };

    let mut entries = env::split_paths(value).filter(|entry| !entry.as_os_str().is_empty());
    let first = entries.next();
    if entries.next().is_some() {
        return Err(SshConfigError::MultiplePaths(var));
    }

    Ok(first.map(|path| expand_tilde(&path, home)))
}

#[cfg(test)]
#[path = "../test/ssh_config/path.rs"]
mod tests;
