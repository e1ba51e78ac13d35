use super::Context;
use crate::{Result, log_debug};
use std::process::ExitCode;

/// Print one `user@host:port` line per host, highlighting the previous host.
pub(super) fn run(ctx: &mut Context<'_>) -> Result<ExitCode> {
    let snapshot = ctx.snapshot()?;
    let hosts = ctx.listed_hosts(&snapshot)?;
    log_debug!("Listing {} host(s)", hosts.len());

    for host in &hosts {
        let line = host.target();
        if snapshot.is_previous(host) {
            writeln!(ctx.stdout, "{}", ctx.stdout_printer.active(&line))?;
        } else {
            writeln!(ctx.stdout, "{}", line)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "../test/commands/list.rs"]
mod tests;
