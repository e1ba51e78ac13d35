use sshctx::{
    args::{self, MainArgs},
    command_path,
    commands::{self, Context},
    config::Settings,
    log, log_debug, log_error,
    process::SystemRunner,
    ssh_config::StandardLoader,
    ui::{Printer, Prompt},
};

use std::io::{self, IsTerminal};
use std::process::ExitCode;

/// `--debug` or a set `DEBUG` variable turns on the debug log.
fn resolve_debug(args: &MainArgs, settings: &Settings) -> bool {
    args.debug || settings.debug
}

fn main() -> ExitCode {
    let args = args::main_args();
    let settings = Settings::from_env();
    let stderr_printer = Printer::for_stream(&settings, io::stderr().is_terminal());

    // Initialize logging
    if resolve_debug(&args, &settings) {
        log::LOGGER.enable_debug();
        if let Err(err) = log::LOGGER.log_debug("Debug mode enabled") {
            let _ = stderr_printer.error(&mut io::stderr(), format!("failed to initialize debug logging: {}", err));
            return ExitCode::FAILURE;
        }
    }
    log_debug!("Parsed arguments: {:?}", args);

    let stdout_is_tty = io::stdout().is_terminal();
    let op = commands::select_op(&args, &settings, stdout_is_tty, stdout_is_tty && command_path::fzf_installed());

    let loader = StandardLoader::from_env();
    let runner = SystemRunner;
    let prompt = Prompt::default();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let result = {
        let mut ctx = Context {
            loader: &loader,
            runner: &runner,
            selector: &prompt,
            settings,
            self_path: None,
            default_user: None,
            stdout_printer: Printer::for_stream(&settings, stdout_is_tty),
            stderr_printer,
            stdout: &mut stdout,
            stderr: &mut stderr,
        };
        commands::run(&op, &mut ctx)
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(err) => {
            log_error!("{}", err);
            let _ = stderr_printer.error(&mut stderr, &err);
            ExitCode::FAILURE
        }
    };

    let _ = log::LOGGER.flush();
    exit_code
}

#[cfg(test)]
#[path = "test/main.rs"]
mod tests;
