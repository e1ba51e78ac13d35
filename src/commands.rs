//! The sshctx operations: list, connect, show previous and interactive selection.

mod errors;
mod fzf;
mod list;
mod menu;
mod previous;
mod switch;

pub use errors::CommandError;

use crate::args::MainArgs;
use crate::config::Settings;
use crate::process::ProcessRunner;
use crate::ssh_config::{ConfigSnapshot, Host, Loader, SshConfig, Target};
use crate::ui::{Printer, Prompt, UIError};
use crate::{Result, log_debug, log_warn};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

/// What a single invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    List,
    /// Connect to a host; `-` means the previous host.
    Switch(String),
    ShowPrevious,
    FzfSelect,
    MenuSelect,
}

/// Picks the operation for the parsed arguments.
///
/// Without a host, a terminal gets fzf when it is installed and not disabled, then the built-in menu.
/// Anything else (fzf reading our output included) gets the plain list.
pub fn select_op(args: &MainArgs, settings: &Settings, is_tty: bool, fzf_installed: bool) -> Op {
    if args.previous {
        return Op::ShowPrevious;
    }
    if let Some(host) = &args.host {
        return Op::Switch(host.clone());
    }

    match (is_tty, fzf_installed && !settings.ignore_fzf) {
        (true, true) => Op::FzfSelect,
        (true, false) => Op::MenuSelect,
        (false, _) => Op::List,
    }
}

/// Interactive choice among host lines.
pub trait HostSelector {
    fn select(&self, question: &str, options: &[&str]) -> std::result::Result<Option<usize>, UIError>;
}

impl HostSelector for Prompt {
    fn select(&self, question: &str, options: &[&str]) -> std::result::Result<Option<usize>, UIError> {
        self.selectable_prompt(question, options, true)
    }
}

/// Everything an operation needs from the outside world.
pub struct Context<'a> {
    pub loader: &'a dyn Loader,
    pub runner: &'a dyn ProcessRunner,
    pub selector: &'a dyn HostSelector,
    pub settings: Settings,
    /// Binary fzf runs to list hosts. Resolved from the running executable when unset.
    pub self_path: Option<PathBuf>,
    /// Username for host blocks without `User`. The OS user when unset.
    pub default_user: Option<String>,
    pub stdout_printer: Printer,
    pub stderr_printer: Printer,
    pub stdout: &'a mut dyn Write,
    pub stderr: &'a mut dyn Write,
}

impl Context<'_> {
    /// Parse the SSH config and the store, releasing both files before returning.
    fn snapshot(&self) -> Result<ConfigSnapshot> {
        let mut config = SshConfig::new().with_loader(self.loader);
        if let Some(username) = &self.default_user {
            config = config.with_default_user(username.clone());
        }

        let snapshot = config.parse();
        for err in config.close().into_iter().flatten() {
            log_warn!("Failed to close config handle: {}", err);
        }
        Ok(snapshot?)
    }

    /// Log a warning and print it to the command's stderr.
    fn warn(&mut self, message: impl std::fmt::Display) -> Result<()> {
        log_warn!("{}", message);
        self.stderr_printer.warning(self.stderr, message)?;
        Ok(())
    }

    /// Hosts offered for listing and selection: natural order by display name,
    /// without invalid targets when `STRICT_MODE` is set.
    fn listed_hosts(&mut self, snapshot: &ConfigSnapshot) -> Result<Vec<Host>> {
        let mut hosts = snapshot.hosts.clone();
        hosts.sort_by(|a, b| crate::utils::natural_cmp(&a.display_name, &b.display_name));

        if !self.settings.strict_mode {
            return Ok(hosts);
        }

        let mut kept = Vec::with_capacity(hosts.len());
        for host in hosts {
            let target = host.target();
            if Target::is_valid(&target) {
                kept.push(host);
            } else {
                self.warn(format!("{} is an illegal ssh parameter", target))?;
            }
        }
        Ok(kept)
    }
}

pub fn run(op: &Op, ctx: &mut Context<'_>) -> Result<ExitCode> {
    log_debug!("Running operation: {:?}", op);
    match op {
        Op::List => list::run(ctx),
        Op::Switch(name) => switch::run(ctx, name),
        Op::ShowPrevious => previous::run(ctx),
        Op::FzfSelect => fzf::run(ctx),
        Op::MenuSelect => menu::run(ctx),
    }
}

#[cfg(test)]
#[path = "test/commands.rs"]
mod tests;
