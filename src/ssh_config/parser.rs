//! SSH config scanner.
//!
//! Splits the config text into host blocks (a `Host` line up to the next one,
//! the last block running to end of input) and extracts one [`Host`] per block.

use super::errors::SshConfigError;
use super::model::{DEFAULT_PORT, Host};
use crate::log_debug;
use std::io::BufRead;

const HOST_KEYWORD: &str = "Host";
const HOSTNAME_KEYWORD: &str = "Hostname";
const USER_KEYWORD: &str = "User";
const PORT_KEYWORD: &str = "Port";

/// Targets that never name a connectable machine.
const IGNORED_TARGETS: [&str; 3] = ["", "*", "name"];

/// Scan raw config lines into hosts, in source order.
///
/// `default_user` fills in blocks without a `User` directive.
pub fn scan<I, S>(lines: I, default_user: &str) -> Result<Vec<Host>, SshConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (rows, block_starts) = segment(lines);
    if rows.is_empty() || block_starts.is_empty() {
        return Err(SshConfigError::NoHostsFound);
    }

    let mut hosts = Vec::with_capacity(block_starts.len());
    for (idx, &begin) in block_starts.iter().enumerate() {
        let end = block_starts.get(idx + 1).copied().unwrap_or(rows.len());
        match extract_host(&rows[begin..end], default_user) {
            Some(host) => hosts.push(host),
            None => log_debug!("Discarding host block {:?} (lines {}..{})", rows[begin], begin, end),
        }
    }

    if hosts.is_empty() {
        return Err(SshConfigError::NoHostsFound);
    }

    log_debug!("Scanned {} host(s) from {} block(s)", hosts.len(), block_starts.len());
    Ok(hosts)
}

/// Scan an SSH config from a reader.
pub fn scan_reader<R: BufRead>(reader: R, default_user: &str) -> Result<Vec<Host>, SshConfigError> {
    let lines = reader.lines().collect::<Result<Vec<String>, _>>().map_err(SshConfigError::Read)?;
    scan(lines, default_user)
}

/// Drops blank lines, trims the rest and records the row index of every unindented `Host` line.
fn segment<I, S>(lines: I) -> (Vec<String>, Vec<usize>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut rows = Vec::new();
    let mut block_starts = Vec::new();

    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }

        if !line.starts_with(char::is_whitespace) && split_directive(line).0 == HOST_KEYWORD {
            block_starts.push(rows.len());
        }
        rows.push(line.trim().to_string());
    }

    (rows, block_starts)
}

fn split_directive(row: &str) -> (&str, &str) {
    match row.trim().split_once(char::is_whitespace) {
        Some((keyword, value)) => (keyword, value.trim()),
        None => (row.trim(), ""),
    }
}

fn extract_host(rows: &[String], default_user: &str) -> Option<Host> {
    let mut alias = "";
    let mut hostname = "";
    let mut username = "";
    let mut port = 0;

    for row in rows {
        let (keyword, value) = split_directive(row);
        match keyword {
            HOST_KEYWORD => alias = value,
            HOSTNAME_KEYWORD => hostname = value,
            USER_KEYWORD => username = value,
            PORT_KEYWORD => port = value.parse::<u16>().unwrap_or(0),
            _ => {}
        }
    }

    let target = if hostname.is_empty() { alias } else { hostname };
    if IGNORED_TARGETS.contains(&target) {
        return None;
    }

    Some(Host {
        hostname: target.to_string(),
        display_name: if alias.is_empty() { target.to_string() } else { alias.to_string() },
        username: if username.is_empty() { default_user.to_string() } else { username.to_string() },
        port: if port == 0 { DEFAULT_PORT } else { port },
    })
}

#[cfg(test)]
#[path = "../test/ssh_config/parser.rs"]
mod tests;
