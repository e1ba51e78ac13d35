//! External processes: `ssh` for connections and `fzf` for interactive selection.

use crate::command_path::{self, Program};
use crate::config::FORCE_COLOR_ENV;
use crate::ssh_config::Target;
use crate::{log_debug, log_error, log_info};
use std::{
    io,
    path::Path,
    process::{Command, ExitCode, Stdio},
};

/// `ssh` exits with this status when the connection itself failed.
pub const SSH_CONNECTION_FAILURE: i32 = 255;

/// A command to run. `program` is resolved to a validated path at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCommand {
    pub program: Program,
    pub args: Vec<String>,
    pub env: Vec<(String, String)>,
    /// Capture stdout instead of inheriting it.
    pub capture_stdout: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub success: bool,
    pub code: Option<i32>,
    /// Captured stdout, empty unless requested.
    pub stdout: String,
}

impl ProcessOutcome {
    pub fn exit_code(&self) -> ExitCode {
        map_exit_code(self.success, self.code)
    }
}

/// Runs prepared commands. stdin and stderr are always inherited.
pub trait ProcessRunner {
    fn run(&self, command: &PreparedCommand) -> io::Result<ProcessOutcome>;
}

/// Runs commands as child processes of the current process and waits for them.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, prepared: &PreparedCommand) -> io::Result<ProcessOutcome> {
        let program = command_path::resolve(prepared.program).map_err(|err| {
            log_error!("Failed to resolve {}: {}", prepared.program, err);
            err
        })?;
        log_debug!("Running {:?} with args: {:?}", program, prepared.args);

        let mut command = command_from_prepared(&program, prepared);
        command.stdin(Stdio::inherit()).stderr(Stdio::inherit());

        let outcome = if prepared.capture_stdout {
            let output = command.stdout(Stdio::piped()).output()?;
            ProcessOutcome {
                success: output.status.success(),
                code: output.status.code(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }
        } else {
            let status = command.stdout(Stdio::inherit()).status()?;
            ProcessOutcome {
                success: status.success(),
                code: status.code(),
                stdout: String::new(),
            }
        };

        log_info!("{} exited with code: {:?}", prepared.program, outcome.code);
        Ok(outcome)
    }
}

fn command_from_prepared(program: &Path, prepared: &PreparedCommand) -> Command {
    let mut command = Command::new(program);
    command.args(&prepared.args);
    for (key, value) in &prepared.env {
        command.env(key, value);
    }
    command
}

pub fn map_exit_code(success: bool, code: Option<i32>) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        // Clamp exit code to valid u8 range (0-255)
        let clamped_code = code.map_or(1, |status_code| u8::try_from(status_code).unwrap_or(255));
        ExitCode::from(clamped_code)
    }
}

/// Whether a finished `ssh` run counts as a successful connection.
pub fn ssh_connected(outcome: &ProcessOutcome) -> bool {
    outcome.success || outcome.code.is_some_and(|code| code != SSH_CONNECTION_FAILURE)
}

pub fn build_ssh_command(target: &Target) -> PreparedCommand {
    PreparedCommand {
        program: Program::Ssh,
        args: target.ssh_args(),
        env: Vec::new(),
        capture_stdout: false,
    }
}

/// fzf lists the output of `sshctx` itself, forced to color since fzf reads it through a pipe.
pub fn build_fzf_command(self_path: &Path) -> PreparedCommand {
    PreparedCommand {
        program: Program::Fzf,
        args: vec!["--ansi".to_string(), "--no-preview".to_string()],
        env: vec![
            ("FZF_DEFAULT_COMMAND".to_string(), shell_quote(&self_path.to_string_lossy())),
            (FORCE_COLOR_ENV.to_string(), "1".to_string()),
        ],
        capture_stdout: true,
    }
}

/// fzf runs its default command through `$SHELL -c`.
fn shell_quote(value: &str) -> String {
    if !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || "/._-+:@".contains(c)) {
        return value.to_string();
    }
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "test/process.rs"]
mod tests;
