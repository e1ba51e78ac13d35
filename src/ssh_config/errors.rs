use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while locating, opening or scanning the SSH config and the previous-host store.
#[derive(Debug)]
pub enum SshConfigError {
    /// `SshConfig::parse` was called without a loader.
    MissingLoader,
    /// Neither `HOME` nor `USERPROFILE` resolved to a directory.
    NoHomeDir,
    /// A path override variable listed more than one file.
    MultiplePaths(&'static str),
    Open {
        name: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    Create {
        path: PathBuf,
        source: io::Error,
    },
    Read(io::Error),
    NoHostsFound,
    Context(&'static str, Box<SshConfigError>),
}

impl SshConfigError {
    pub fn context(self, context: &'static str) -> Self {
        SshConfigError::Context(context, Box::new(self))
    }

    /// The innermost error, skipping any context layers.
    #[cfg(test)]
    pub(crate) fn root_cause(&self) -> &SshConfigError {
        match self {
            SshConfigError::Context(_, inner) => inner.root_cause(),
            other => other,
        }
    }

    /// I/O error kind of the root cause, if it is an I/O failure.
    #[cfg(test)]
    pub(crate) fn io_kind(&self) -> Option<io::ErrorKind> {
        match self.root_cause() {
            SshConfigError::Open { source, .. } | SshConfigError::Create { source, .. } | SshConfigError::Read(source) => Some(source.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for SshConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SshConfigError::MissingLoader => write!(f, "missing loader"),
            SshConfigError::NoHomeDir => write!(f, "HOME or USERPROFILE environment variable not set"),
            SshConfigError::MultiplePaths(var) => write!(f, "multiple files in {} are currently not supported", var),
            SshConfigError::Open { name, path, source } if source.kind() == io::ErrorKind::NotFound => {
                write!(f, "{} doesn't exist: {}", name, path.display())
            }
            SshConfigError::Open { name, path, source } => write!(f, "fail to open {} {}: {}", name, path.display(), source),
            SshConfigError::Create { path, source } => write!(f, "can't create {}: {}", path.display(), source),
            SshConfigError::Read(err) => write!(f, "can not scan ssh config: {}", err),
            SshConfigError::NoHostsFound => write!(f, "no host found in ssh config"),
            SshConfigError::Context(context, inner) => write!(f, "{}: {}", context, inner),
        }
    }
}

impl Error for SshConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SshConfigError::Open { source, .. } | SshConfigError::Create { source, .. } => Some(source),
            SshConfigError::Read(err) => Some(err),
            SshConfigError::Context(_, inner) => Some(inner.as_ref()),
            _ => None,
        }
    }
}

/// Errors raised while writing the previous-host record.
#[derive(Debug)]
pub enum StoreError {
    /// The target string does not match `user@host[:port]`.
    IllegalParameter(String),
    Marshal(serde_yml::Error),
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IllegalParameter(target) => write!(f, "illegal parameter: {:?} is not user@host[:port]", target),
            StoreError::Marshal(err) => write!(f, "failed to marshal host: {}", err),
            StoreError::Write { path, source } => write!(f, "failed to write host to {}: {}", path.display(), source),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StoreError::IllegalParameter(_) => None,
            StoreError::Marshal(err) => Some(err),
            StoreError::Write { source, .. } => Some(source),
        }
    }
}

impl From<serde_yml::Error> for StoreError {
    fn from(err: serde_yml::Error) -> Self {
        StoreError::Marshal(err)
    }
}
