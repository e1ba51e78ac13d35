//! Previous-host record: YAML decode, encode and save.
//!
//! ```yaml
//! previous:
//!   host: 10.0.0.1
//!   displayName: foo
//!   username: alice
//!   port: 2222
//! ```

use super::errors::StoreError;
use super::model::{DEFAULT_PORT, Host};
use super::target::Target;
use crate::log_info;
use serde::Serialize;
use serde_yml::Value;
use std::fs;
use std::path::Path;

/// Outcome of decoding the store contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousHost {
    Recorded(Host),
    /// Nothing recorded yet.
    Absent,
    /// The store holds something that is not a previous-host record.
    Malformed(String),
}

impl PreviousHost {
    pub fn into_option(self) -> Option<Host> {
        match self {
            PreviousHost::Recorded(host) => Some(host),
            PreviousHost::Absent | PreviousHost::Malformed(_) => None,
        }
    }
}

#[derive(Serialize)]
struct PersistedHost<'a> {
    host: &'a str,
    #[serde(rename = "displayName")]
    display_name: &'a str,
    username: &'a str,
    port: u16,
}

#[derive(Serialize)]
struct Persisted<'a> {
    previous: PersistedHost<'a>,
}

/// Decode raw store contents. Never fails; problems are reported as [`PreviousHost::Malformed`].
pub fn decode(raw: &[u8]) -> PreviousHost {
    let text = match std::str::from_utf8(raw) {
        Ok(text) => text,
        Err(err) => return PreviousHost::Malformed(format!("not valid UTF-8: {}", err)),
    };
    if text.trim().is_empty() {
        return PreviousHost::Absent;
    }

    let document: Value = match serde_yml::from_str(text) {
        Ok(document) => document,
        Err(err) => return PreviousHost::Malformed(format!("invalid YAML: {}", err)),
    };

    let previous = match &document {
        Value::Null => return PreviousHost::Absent,
        Value::Mapping(_) => match document.get("previous") {
            None => return PreviousHost::Malformed("no `previous` entry".to_string()),
            Some(Value::Null) => return PreviousHost::Absent,
            Some(previous @ Value::Mapping(_)) => previous,
            Some(_) => return PreviousHost::Malformed("`previous` is not a mapping".to_string()),
        },
        _ => return PreviousHost::Malformed("document root is not a mapping".to_string()),
    };

    match decode_host(previous) {
        Ok(host) => PreviousHost::Recorded(host),
        Err(reason) => PreviousHost::Malformed(reason),
    }
}

fn decode_host(previous: &Value) -> Result<Host, String> {
    let hostname = required_str(previous, "host")?;
    let username = required_str(previous, "username")?;
    let display_name = previous.get("displayName").and_then(Value::as_str).unwrap_or_default();

    let port = match previous.get("port") {
        Some(Value::Number(number)) => number.as_u64().and_then(|port| u16::try_from(port).ok()),
        Some(Value::String(text)) => text.trim().parse::<u16>().ok(),
        _ => None,
    }
    .ok_or_else(|| "`port` is missing or not a port number".to_string())?;

    Ok(Host::new(
        hostname,
        display_name,
        username,
        if port == 0 { DEFAULT_PORT } else { port },
    ))
}

fn required_str<'a>(mapping: &'a Value, key: &str) -> Result<&'a str, String> {
    match mapping.get(key).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(format!("`{}` is missing or not a string", key)),
    }
}

/// Serialize a previous-host record for `target` (`user@host[:port]`).
pub fn encode(target: &str, display_name: &str) -> Result<String, StoreError> {
    let target: Target = target.parse()?;
    let record = Persisted {
        previous: PersistedHost {
            host: &target.host,
            display_name,
            username: &target.username,
            port: target.port_or_default(),
        },
    };

    Ok(serde_yml::to_string(&record)?)
}

/// Overwrite the store at `path` with a record for `target`. Nothing is written when encoding fails.
pub fn save(path: &Path, target: &str, display_name: &str) -> Result<(), StoreError> {
    let yaml = encode(target, display_name)?;
    fs::write(path, yaml).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    log_info!("Saved previous host {} to {:?}", target, path);
    Ok(())
}

pub fn save_host(path: &Path, host: &Host) -> Result<(), StoreError> {
    save(path, &host.target(), &host.display_name)
}

#[cfg(test)]
#[path = "../test/ssh_config/store.rs"]
mod tests;
