//! Debug logging implementation
//!
//! Writes formatted log messages to `~/.sshctx/logs/sshctx.log` with
//! timestamps and log levels. The file is opened lazily on the first entry.

use super::{LogError, LogLevel, formatter::LogFormatter};
use std::{
    fs::{self, File, OpenOptions},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::{Mutex, MutexGuard},
};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

const DEBUG_LOG_FLUSH_BYTES: usize = 8 * 1024;
#[cfg(unix)]
const PRIVATE_LOG_DIR_MODE: u32 = 0o700;
#[cfg(unix)]
const PRIVATE_LOG_FILE_MODE: u32 = 0o600;

#[derive(Default)]
struct DebugLogState {
    writer: Option<BufWriter<File>>,
    pending_bytes: usize,
}

pub(super) struct DebugLogger {
    formatter: LogFormatter,
    path: Option<PathBuf>,
    state: Mutex<DebugLogState>,
}

impl DebugLogger {
    pub(super) fn new() -> Self {
        Self {
            formatter: LogFormatter::default(),
            path: None,
            state: Mutex::new(DebugLogState::default()),
        }
    }

    pub(super) fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            ..Self::new()
        }
    }

    pub(super) fn log(&self, level: LogLevel, message: &str) -> Result<(), LogError> {
        let mut state = self.lock_state();

        if state.writer.is_none() {
            let file = self.create_log_file()?;
            state.writer = Some(BufWriter::new(file));
        }

        let formatted = self.formatter.format(Some(level), message);
        if let Some(writer) = state.writer.as_mut() {
            writer.write_all(formatted.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        state.pending_bytes = state.pending_bytes.saturating_add(formatted.len() + 1);

        // warnings and errors are flushed immediately
        if should_flush(state.pending_bytes, level) {
            flush_state(&mut state)?;
        }
        Ok(())
    }

    pub(super) fn flush(&self) -> Result<(), LogError> {
        let mut state = self.lock_state();
        flush_state(&mut state)
    }

    fn lock_state(&self) -> MutexGuard<'_, DebugLogState> {
        match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => {
                eprintln!("Debug log lock poisoned; continuing with recovered state");
                poisoned.into_inner()
            }
        }
    }

    fn create_log_file(&self) -> Result<File, LogError> {
        let log_path = match &self.path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    create_private_directory(parent)?;
                }
                path.clone()
            }
            None => Self::get_debug_log_path()?,
        };
        open_private_append_file(&log_path)
    }

    fn get_debug_log_path() -> Result<PathBuf, LogError> {
        let home_dir = dirs::home_dir().ok_or_else(|| LogError::DirectoryCreationError("Home directory not found".to_string()))?;

        let log_dir = crate::ssh_config::state_dir(&home_dir).join("logs");
        create_private_directory(&log_dir)?;

        Ok(log_dir.join("sshctx.log"))
    }
}

fn flush_state(state: &mut DebugLogState) -> Result<(), LogError> {
    if let Some(writer) = state.writer.as_mut() {
        writer.flush()?;
        state.pending_bytes = 0;
    }
    Ok(())
}

fn should_flush(pending_bytes: usize, level: LogLevel) -> bool {
    pending_bytes >= DEBUG_LOG_FLUSH_BYTES || matches!(level, LogLevel::Warning | LogLevel::Error)
}

fn create_private_directory(path: &Path) -> Result<(), LogError> {
    fs::create_dir_all(path).map_err(|err| LogError::DirectoryCreationError(format!("{}: {}", path.display(), err)))?;
    set_private_directory_permissions(path)
}

fn open_private_append_file(path: &Path) -> Result<File, LogError> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        options.mode(PRIVATE_LOG_FILE_MODE);
    }
    let file = options.open(path)?;
    set_private_file_permissions(path)?;
    Ok(file)
}

#[cfg(unix)]
fn set_private_directory_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_DIR_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_directory_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(unix)]
fn set_private_file_permissions(path: &Path) -> Result<(), LogError> {
    fs::set_permissions(path, fs::Permissions::from_mode(PRIVATE_LOG_FILE_MODE))?;
    Ok(())
}

#[cfg(not(unix))]
fn set_private_file_permissions(_path: &Path) -> Result<(), LogError> {
    Ok(())
}

#[cfg(test)]
#[path = "../test/log/debug.rs"]
mod tests;
