use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CommandError {
    NoPreviousHost,
    /// The interactive selection ended without a choice.
    NoSelection,
    UnknownHost(String),
    Spawn { program: &'static str, source: io::Error },
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::NoPreviousHost => write!(f, "no previous host in sshctx"),
            CommandError::NoSelection => write!(f, "you did not choose any of the options"),
            CommandError::UnknownHost(name) => write!(f, "unknown host {:?}: not in ssh config and not user@host[:port]", name),
            CommandError::Spawn { program, source } => write!(f, "failed to run {}: {}", program, source),
        }
    }
}

impl Error for CommandError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CommandError::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}
