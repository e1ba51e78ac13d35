use super::{CommandError, Context};
use crate::args::PREVIOUS_HOST_ARG;
use crate::process::{build_ssh_command, ssh_connected};
use crate::ssh_config::{ConfigSnapshot, Host, Target, store};
use crate::{Result, log_debug, log_info};
use std::path::Path;
use std::process::ExitCode;

pub(super) fn run(ctx: &mut Context<'_>, name: &str) -> Result<ExitCode> {
    let snapshot = ctx.snapshot()?;
    let host = if name == PREVIOUS_HOST_ARG {
        snapshot.previous.clone().ok_or(CommandError::NoPreviousHost)?
    } else {
        resolve_host(&snapshot, name)?
    };

    connect(ctx, &snapshot.store_path, &host)
}

/// Resolve a user-supplied name or a selected line to a host.
///
/// Tries the alias, then the target string, then the `alias#target` menu form,
/// and finally accepts any `user@host[:port]` target that is not in the config.
pub(super) fn resolve_host(snapshot: &ConfigSnapshot, choice: &str) -> std::result::Result<Host, CommandError> {
    let choice = choice.trim();
    if let Some(host) = snapshot.find(choice) {
        return Ok(host.clone());
    }

    if let Some((alias, target)) = choice.split_once('#')
        && let Some(host) = snapshot.find(target.trim()).or_else(|| snapshot.find(alias.trim()))
    {
        return Ok(host.clone());
    }

    match Target::parse(choice) {
        Some(target) => Ok(Host::new(target.host.clone(), target.host.clone(), target.username.clone(), target.port_or_default())),
        None => Err(CommandError::UnknownHost(choice.to_string())),
    }
}

/// Run `ssh` for `host` and record it as the previous host once connected.
///
/// The exit status mirrors ssh's. A failed save only warns.
pub(super) fn connect(ctx: &mut Context<'_>, store_path: &Path, host: &Host) -> Result<ExitCode> {
    let target = host.target();
    ctx.stderr_printer
        .success(ctx.stderr, format!("Switched to target \"{}\".", ctx.stderr_printer.success_text(&target)))?;

    let command = build_ssh_command(&host.to_target());
    let outcome = ctx.runner.run(&command).map_err(|source| CommandError::Spawn { program: "ssh", source })?;
    log_info!("ssh to {} finished with {:?}", target, outcome.code);

    if ssh_connected(&outcome) {
        if let Err(err) = store::save_host(store_path, host) {
            ctx.warn(format!("failed to save previous host: {}", err))?;
        }
    } else {
        log_debug!("Not recording {} as previous host", target);
    }

    Ok(outcome.exit_code())
}

#[cfg(test)]
#[path = "../test/commands/switch.rs"]
mod tests;
