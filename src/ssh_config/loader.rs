//! Locating and opening the SSH config and the previous-host store.

use super::errors::SshConfigError;
use super::path::{default_ssh_config_path, default_store_path, resolve_override, state_dir};
use crate::config::{SSH_CONFIG_ENV, STORE_ENV};
use crate::{log_debug, log_info, ui};
use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

pub const SSH_CONFIG_NAME: &str = "ssh config";
pub const STORE_NAME: &str = "previous-host store";

/// A readable source with an explicit, fallible release.
pub trait Handle: Read {
    fn close(self: Box<Self>) -> io::Result<()>;
}

impl Handle for File {
    fn close(self: Box<Self>) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

/// An opened source and the path it came from.
pub struct Opened {
    pub path: PathBuf,
    pub handle: Box<dyn Handle>,
}

impl std::fmt::Debug for Opened {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Opened").field("path", &self.path).finish_non_exhaustive()
    }
}

pub trait Loader {
    fn load_ssh_config(&self) -> Result<Opened, SshConfigError>;
    fn load_store(&self) -> Result<Opened, SshConfigError>;
}

/// Filesystem loader honoring the `SSHCONFIG` and `SSHCTX` overrides.
#[derive(Debug, Clone, Default)]
pub struct StandardLoader {
    home: Option<PathBuf>,
    ssh_config_override: Option<OsString>,
    store_override: Option<OsString>,
}

impl StandardLoader {
    /// Override values are raw variable contents and are validated on load.
    pub fn new(home: Option<PathBuf>, ssh_config_override: Option<OsString>, store_override: Option<OsString>) -> Self {
        Self {
            home,
            ssh_config_override,
            store_override,
        }
    }

    pub fn from_env() -> Self {
        Self::new(dirs::home_dir(), std::env::var_os(SSH_CONFIG_ENV), std::env::var_os(STORE_ENV))
    }

    fn home(&self) -> Result<&Path, SshConfigError> {
        self.home.as_deref().ok_or(SshConfigError::NoHomeDir)
    }

    pub fn ssh_config_path(&self) -> Result<PathBuf, SshConfigError> {
        match resolve_override(SSH_CONFIG_ENV, self.ssh_config_override.as_deref(), self.home.as_deref())? {
            Some(path) => Ok(path),
            None => Ok(default_ssh_config_path(self.home()?)),
        }
    }

    /// Resolved store path, and whether it came from the override.
    pub fn store_path(&self) -> Result<(PathBuf, bool), SshConfigError> {
        match resolve_override(STORE_ENV, self.store_override.as_deref(), self.home.as_deref())? {
            Some(path) => Ok((path, true)),
            None => Ok((default_store_path(self.home()?), false)),
        }
    }
}

impl Loader for StandardLoader {
    fn load_ssh_config(&self) -> Result<Opened, SshConfigError> {
        let path = self.ssh_config_path()?;
        log_debug!("Opening ssh config: {:?}", path);
        open_file(SSH_CONFIG_NAME, path)
    }

    fn load_store(&self) -> Result<Opened, SshConfigError> {
        let (path, overridden) = self.store_path()?;
        log_debug!("Opening previous-host store: {:?}", path);
        match open_file(STORE_NAME, path) {
            Ok(opened) => return Ok(opened),
            Err(err) => ui::warn(&err),
        }

        let home = self.home()?;
        let default_path = default_store_path(home);
        if overridden {
            log_debug!("Falling back to default previous-host store: {:?}", default_path);
            match open_file(STORE_NAME, default_path.clone()) {
                Ok(opened) => return Ok(opened),
                Err(err) => ui::warn(&err),
            }
        }

        create_store(&state_dir(home), default_path)
    }
}

fn open_file(name: &'static str, path: PathBuf) -> Result<Opened, SshConfigError> {
    match File::open(&path) {
        Ok(file) => Ok(Opened { path, handle: Box::new(file) }),
        Err(source) => Err(SshConfigError::Open { name, path, source }),
    }
}

fn create_store(dir: &Path, path: PathBuf) -> Result<Opened, SshConfigError> {
    fs::create_dir_all(dir).map_err(|source| SshConfigError::Create {
        path: dir.to_path_buf(),
        source,
    })?;

    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .map_err(|source| SshConfigError::Create { path: path.clone(), source })?;

    log_info!("Created previous-host store at {:?}", path);
    Ok(Opened { path, handle: Box::new(file) })
}

#[cfg(test)]
#[path = "../test/ssh_config/loader.rs"]
mod tests;
