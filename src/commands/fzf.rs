use super::switch::{connect, resolve_host};
use super::{CommandError, Context};
use crate::process::build_fzf_command;
use crate::command_path::{self, Program};
use crate::{Result, log_debug};
use std::process::ExitCode;

/// Let fzf pick from the list printed by `sshctx` itself, then connect.
pub(super) fn run(ctx: &mut Context<'_>) -> Result<ExitCode> {
    // fail early on a broken config instead of inside fzf
    let snapshot = ctx.snapshot()?;

    let self_path = match &ctx.self_path {
        Some(path) => path.clone(),
        None => command_path::resolve(Program::Sshctx)?,
    };

    let outcome = ctx
        .runner
        .run(&build_fzf_command(&self_path))
        .map_err(|source| CommandError::Spawn { program: "fzf", source })?;
    log_debug!("fzf finished with {:?}", outcome.code);

    let choice = outcome.stdout.trim();
    if choice.is_empty() {
        return Err(CommandError::NoSelection.into());
    }

    let host = resolve_host(&snapshot, choice)?;
    connect(ctx, &snapshot.store_path, &host)
}

#[cfg(test)]
#[path = "../test/commands/fzf.rs"]
mod tests;
