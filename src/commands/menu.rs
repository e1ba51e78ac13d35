use super::switch::connect;
use super::{CommandError, Context};
use crate::{Result, log_debug};
use std::process::ExitCode;

const QUESTION: &str = "Select a host to connect";
const PREVIOUS_MARK: &str = " (previous)";

/// Offer `alias#user@host:port` lines in the built-in menu, then connect.
pub(super) fn run(ctx: &mut Context<'_>) -> Result<ExitCode> {
    let snapshot = ctx.snapshot()?;
    let hosts = ctx.listed_hosts(&snapshot)?;
    if hosts.is_empty() {
        return Err(CommandError::NoSelection.into());
    }

    let lines: Vec<String> = hosts
        .iter()
        .map(|host| {
            let line = host.menu_line();
            if snapshot.is_previous(host) { line + PREVIOUS_MARK } else { line }
        })
        .collect();
    let options: Vec<&str> = lines.iter().map(String::as_str).collect();

    let Some(index) = ctx.selector.select(QUESTION, &options)? else {
        return Err(CommandError::NoSelection.into());
    };
    log_debug!("Menu selection: {}", lines[index]);

    connect(ctx, &snapshot.store_path, &hosts[index])
}

#[cfg(test)]
#[path = "../test/commands/menu.rs"]
mod tests;
