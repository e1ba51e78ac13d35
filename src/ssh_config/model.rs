//! SSH config domain models.

use super::target::Target;
use std::fmt;
use std::path::PathBuf;

/// Port used when a host block has no usable `Port` directive.
pub const DEFAULT_PORT: u16 = 22;

/// A connectable host extracted from an SSH config block or from the previous-host store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Host {
    /// Connection target: the `Hostname` value, or the alias when there is none.
    pub hostname: String,
    /// The `Host` alias shown to users.
    pub display_name: String,
    pub username: String,
    pub port: u16,
}

impl Host {
    pub fn new(hostname: impl Into<String>, display_name: impl Into<String>, username: impl Into<String>, port: u16) -> Self {
        Self {
            hostname: hostname.into(),
            display_name: display_name.into(),
            username: username.into(),
            port,
        }
    }

    /// Canonical `user@host:port` target string.
    pub fn target(&self) -> String {
        self.to_target().to_string()
    }

    pub fn to_target(&self) -> Target {
        Target {
            username: self.username.clone(),
            host: self.hostname.clone(),
            port: Some(self.port),
        }
    }

    /// `alias#user@host:port`, the line format used by the selection menu.
    pub fn menu_line(&self) -> String {
        format!("{}#{}", self.display_name, self.target())
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display_name.is_empty() || self.display_name == self.hostname {
            write!(f, "{}", self.target())
        } else {
            write!(f, "{} ({})", self.display_name, self.target())
        }
    }
}

/// Result of one `SshConfig::parse` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSnapshot {
    /// Hosts in source-file order.
    pub hosts: Vec<Host>,
    pub previous: Option<Host>,
    /// Store file that was read, and that a save should overwrite.
    pub store_path: PathBuf,
}

impl ConfigSnapshot {
    /// Whether `host` connects to the same `user@host:port` as the recorded previous host.
    pub fn is_previous(&self, host: &Host) -> bool {
        self.previous
            .as_ref()
            .is_some_and(|previous| previous.hostname == host.hostname && previous.username == host.username && previous.port == host.port)
    }

    /// Finds a host by alias, then by its target string.
    pub fn find(&self, name: &str) -> Option<&Host> {
        self.hosts
            .iter()
            .find(|host| host.display_name == name)
            .or_else(|| self.hosts.iter().find(|host| host.target() == name))
    }
}
