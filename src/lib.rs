// Imports sshctx specific modules
pub mod args;
pub mod command_path;
pub mod commands;
pub mod config;
pub mod log;
pub mod process;
pub mod ssh_config;
pub mod ui;
pub mod utils;


use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    SshConfig(ssh_config::SshConfigError),
    Store(ssh_config::StoreError),
    Command(commands::CommandError),
    Log(log::LogError),
    UI(ui::UIError),
}

// config, store and command errors already read as user-facing messages
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::SshConfig(err) => write!(f, "{}", err),
            Error::Store(err) => write!(f, "{}", err),
            Error::Command(err) => write!(f, "{}", err),
            Error::Log(err) => write!(f, "Logging error: {}", err),
            Error::UI(err) => write!(f, "UI error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::SshConfig(err) => Some(err),
            Error::Store(err) => Some(err),
            Error::Command(err) => Some(err),
            Error::Log(err) => Some(err),
            Error::UI(err) => Some(err),
        }
    }
}

// Implement From for each error type
impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<ssh_config::SshConfigError> for Error {
    fn from(err: ssh_config::SshConfigError) -> Self {
        Error::SshConfig(err)
    }
}

impl From<ssh_config::StoreError> for Error {
    fn from(err: ssh_config::StoreError) -> Self {
        Error::Store(err)
    }
}

impl From<commands::CommandError> for Error {
    fn from(err: commands::CommandError) -> Self {
        Error::Command(err)
    }
}

impl From<log::LogError> for Error {
    fn from(err: log::LogError) -> Self {
        Error::Log(err)
    }
}

impl From<ui::UIError> for Error {
    fn from(err: ui::UIError) -> Self {
        Error::UI(err)
    }
}
