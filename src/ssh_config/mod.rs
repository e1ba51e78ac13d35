//! SSH config scanning and the previous-host store.
//!
//! [`SshConfig`] ties a [`Loader`] to the scanner and the store decoder and owns
//! the opened handles until [`SshConfig::close`] or drop.

mod errors;
mod loader;
mod model;
mod parser;
mod path;
pub mod store;
mod target;
mod user;

pub use errors::{SshConfigError, StoreError};
pub use loader::{Handle, Loader, Opened, SSH_CONFIG_NAME, STORE_NAME, StandardLoader};
pub use model::{ConfigSnapshot, DEFAULT_PORT, Host};
pub use parser::{scan, scan_reader};
pub use path::{default_ssh_config_path, default_store_path, state_dir};
pub use store::PreviousHost;
pub use target::Target;
pub use user::current_username;

use crate::{log_debug, log_warn, ui};
use std::io::{self, BufReader};
use std::path::Path;

const SSH_CONFIG_CONTEXT: &str = "failed to load ssh config";
const STORE_CONTEXT: &str = "failed to load previous-host store";
const SCAN_CONTEXT: &str = "can not parse ssh config";

/// Parses the SSH config and the previous-host store obtained from a [`Loader`].
#[derive(Default)]
pub struct SshConfig<'a> {
    loader: Option<&'a dyn Loader>,
    default_user: Option<String>,
    ssh_config: Option<Box<dyn Handle>>,
    store: Option<Box<dyn Handle>>,
}

impl<'a> SshConfig<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loader(mut self, loader: &'a dyn Loader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Username for host blocks without `User`. Defaults to the OS user.
    pub fn with_default_user(mut self, username: impl Into<String>) -> Self {
        self.default_user = Some(username.into());
        self
    }

    pub fn parse(&mut self) -> Result<ConfigSnapshot, SshConfigError> {
        let loader = self.loader.ok_or(SshConfigError::MissingLoader)?;
        self.release();

        let config = loader.load_ssh_config().map_err(|err| err.context(SSH_CONFIG_CONTEXT))?;
        log_debug!("Loaded ssh config from {:?}", config.path);
        let config_handle = self.ssh_config.insert(config.handle);

        let store = loader.load_store().map_err(|err| err.context(STORE_CONTEXT))?;
        let store_path = store.path;
        let store_handle = self.store.insert(store.handle);
        let previous = read_previous(store_handle.as_mut(), &store_path);

        let default_user = match &self.default_user {
            Some(username) => username.clone(),
            None => current_username(),
        };
        let hosts = scan_reader(BufReader::new(config_handle.as_mut()), &default_user).map_err(|err| err.context(SCAN_CONTEXT))?;

        Ok(ConfigSnapshot { hosts, previous, store_path })
    }

    /// Release both handles.
    ///
    /// Returns nothing when no handle is open, otherwise one slot per handle in
    /// `[ssh_config, store]` order, `None` for a handle that closed cleanly or was never opened.
    pub fn close(&mut self) -> Vec<Option<io::Error>> {
        if self.ssh_config.is_none() && self.store.is_none() {
            return Vec::new();
        }

        vec![close_handle(self.ssh_config.take()), close_handle(self.store.take())]
    }

    fn release(&mut self) {
        for err in self.close().into_iter().flatten() {
            log_warn!("Failed to close handle: {}", err);
        }
    }
}

impl Drop for SshConfig<'_> {
    fn drop(&mut self) {
        self.release();
    }
}

fn close_handle(handle: Option<Box<dyn Handle>>) -> Option<io::Error> {
    handle.and_then(|handle| handle.close().err())
}

fn read_previous(store: &mut dyn Handle, path: &Path) -> Option<Host> {
    let mut raw = Vec::new();
    if let Err(err) = store.read_to_end(&mut raw) {
        ui::warn(format!("can not read {} {}: {}", STORE_NAME, path.display(), err));
        return None;
    }

    let decoded = store::decode(&raw);
    if let Some(warning) = store_warning(&decoded, path) {
        ui::warn(warning);
    }
    decoded.into_option()
}

/// Warning for a store that yields no previous host.
fn store_warning(decoded: &PreviousHost, path: &Path) -> Option<String> {
    match decoded {
        PreviousHost::Recorded(_) => None,
        PreviousHost::Absent => Some(format!("no previous host in {} {}", STORE_NAME, path.display())),
        PreviousHost::Malformed(reason) => Some(format!("ignoring malformed {} {}: {}", STORE_NAME, path.display(), reason)),
    }
}

#[cfg(test)]
#[path = "../test/ssh_config.rs"]
mod tests;
