use super::{CommandError, Context};
use crate::Result;
use std::process::ExitCode;

pub(super) fn run(ctx: &mut Context<'_>) -> Result<ExitCode> {
    let snapshot = ctx.snapshot()?;
    let previous = snapshot.previous.ok_or(CommandError::NoPreviousHost)?;

    ctx.stdout_printer.success(ctx.stdout, format!("Previous host: {}", previous.target()))?;
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "../test/commands/previous.rs"]
mod tests;
