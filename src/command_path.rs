//! Locating the external programs sshctx runs.
//!
//! Each program is looked up once per process. A failed lookup is cached too,
//! so `fzf_installed()` and a later `fzf` run agree.

use once_cell::sync::OnceCell;
use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

#[cfg(unix)]
use std::os::unix::fs::{MetadataExt, PermissionsExt};

#[cfg(unix)]
const EXECUTE_BITS: u32 = 0o111;
#[cfg(unix)]
const WORLD_WRITABLE_BIT: u32 = 0o002;

/// A program sshctx knows how to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Program {
    Ssh,
    Fzf,
    /// The running binary, listed by fzf.
    Sshctx,
}

impl Program {
    pub fn name(self) -> &'static str {
        match self {
            Program::Ssh => "ssh",
            Program::Fzf => "fzf",
            Program::Sshctx => "sshctx",
        }
    }

    fn cell(self) -> &'static OnceCell<Lookup> {
        static SSH: OnceCell<Lookup> = OnceCell::new();
        static FZF: OnceCell<Lookup> = OnceCell::new();
        static SSHCTX: OnceCell<Lookup> = OnceCell::new();

        match self {
            Program::Ssh => &SSH,
            Program::Fzf => &FZF,
            Program::Sshctx => &SSHCTX,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// io::Error is not Clone, so the cache keeps its parts
type Lookup = Result<PathBuf, (io::ErrorKind, String)>;

/// Validated absolute path of `program`.
pub fn resolve(program: Program) -> io::Result<PathBuf> {
    let cached = program.cell().get_or_init(|| locate(program).map_err(|err| (err.kind(), err.to_string())));
    match cached {
        Ok(path) => Ok(path.clone()),
        Err((kind, message)) => Err(io::Error::new(*kind, format!("{program}: {message}"))),
    }
}

pub fn fzf_installed() -> bool {
    resolve(Program::Fzf).is_ok()
}

fn locate(program: Program) -> io::Result<PathBuf> {
    let found = match program {
        Program::Sshctx => std::env::current_exe()
            .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("unable to resolve current executable path: {err}")))?,
        _ => which::which(program.name())
            .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("{program} not found in PATH: {err}")))?,
    };
    validate_executable_path(&found, program.name())
}

/// Canonicalize `path` and check it is a regular file that is safe to execute.
fn validate_executable_path(path: &Path, label: &str) -> io::Result<PathBuf> {
    let canonical = fs::canonicalize(path)
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("unable to canonicalize {label} path '{}': {err}", path.display())))?;

    let metadata = fs::metadata(&canonical)
        .map_err(|err| io::Error::new(io::ErrorKind::NotFound, format!("unable to inspect {label} path '{}': {err}", canonical.display())))?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{label} path '{}' is not a regular file", canonical.display()),
        ));
    }

    #[cfg(unix)]
    {
        if let Some(reason) = unsafe_to_execute(&metadata) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{label} path '{}' {reason}", canonical.display()),
            ));
        }
    }

    Ok(canonical)
}

#[cfg(unix)]
fn unsafe_to_execute(metadata: &fs::Metadata) -> Option<&'static str> {
    let mode = metadata.permissions().mode();
    if mode & WORLD_WRITABLE_BIT != 0 {
        return Some("is world-writable");
    }
    if mode & EXECUTE_BITS == 0 {
        return Some("is not executable");
    }

    let owner = metadata.uid();
    if owner != 0 && owner != nix::unistd::Uid::effective().as_raw() {
        return Some("must be owned by root or the current user");
    }
    None
}

#[cfg(test)]
#[path = "test/command_path.rs"]
mod tests;
