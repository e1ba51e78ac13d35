use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

/// Host argument that selects the previously connected host.
pub const PREVIOUS_HOST_ARG: &str = "-";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MainArgs {
    pub debug: bool,
    /// Show the previous host instead of connecting.
    pub previous: bool,
    /// Alias, `user@host[:port]` target, menu line, or `-`.
    pub host: Option<String>,
}

pub fn build_cli_command() -> Command {
    Command::new("sshctx")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Switch between the hosts of your SSH config.")
        .disable_version_flag(true)
        .after_help(
            "With no HOST the hosts are listed, or offered for interactive selection (fzf when installed) on a terminal.\n\
             Set SSHCTX_IGNORE_FZF to use the built-in menu instead of fzf.",
        )
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Show version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug logging to ~/.sshctx/logs/sshctx.log")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("previous")
                .short('p')
                .long("previous")
                .help("Show the previous successfully connected host")
                .action(ArgAction::SetTrue)
                .conflicts_with("host"),
        )
        .arg(
            Arg::new("host")
                .value_name("HOST")
                .help("Host to connect to: an alias, user@host[:port], or '-' for the previous host"),
        )
}

fn main_args_from_matches(matches: &ArgMatches) -> MainArgs {
    MainArgs {
        debug: matches.get_flag("debug"),
        previous: matches.get_flag("previous"),
        host: matches.get_one::<String>("host").cloned(),
    }
}

pub fn try_parse_main_args_from<I, T>(cmd: &Command, args: I) -> Result<MainArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().try_get_matches_from(args)?;
    Ok(main_args_from_matches(&matches))
}

/// Parses `args`, exiting with clap's message on `--help`, `--version` or invalid input.
pub fn parse_main_args_from<I, T>(cmd: &Command, args: I) -> MainArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = cmd.clone().get_matches_from(args);
    main_args_from_matches(&matches)
}

/// Parses the process command line.
pub fn main_args() -> MainArgs {
    parse_main_args_from(&build_cli_command(), std::env::args_os())
}

#[cfg(test)]
#[path = "test/args.rs"]
mod tests;
