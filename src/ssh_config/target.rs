//! The `user@host[:port]` connection target grammar.

use super::errors::StoreError;
use super::model::DEFAULT_PORT;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

// host is a dotted-quad IPv4 literal or a domain-like token containing a dot
static TARGET_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<user>\w[\w.-]*)@(?P<host>(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])|\w[^\s:@]*\.[^\s:@]+)(?::(?P<port>\d+))?$",
    )
    .expect("target pattern should compile")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub username: String,
    pub host: String,
    pub port: Option<u16>,
}

impl Target {
    /// Parses a target string, returning `None` when it does not match the grammar.
    pub fn parse(input: &str) -> Option<Self> {
        let captures = TARGET_REGEX.captures(input.trim())?;
        let port = match captures.name("port") {
            Some(port) => Some(port.as_str().parse::<u16>().ok()?),
            None => None,
        };

        Some(Self {
            username: captures["user"].to_string(),
            host: captures["host"].to_string(),
            port,
        })
    }

    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_some()
    }

    pub fn port_or_default(&self) -> u16 {
        match self.port {
            Some(0) | None => DEFAULT_PORT,
            Some(port) => port,
        }
    }

    /// Arguments for `ssh`: `-p <port> <user>@<host>`.
    pub fn ssh_args(&self) -> Vec<String> {
        vec!["-p".to_string(), self.port_or_default().to_string(), format!("{}@{}", self.username, self.host)]
    }
}

impl FromStr for Target {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StoreError::IllegalParameter(s.to_string()))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.username, self.host)?;
        if let Some(port) = self.port {
            write!(f, ":{}", port)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../test/ssh_config/target.rs"]
mod tests;
