use super::should_flush;
use crate::log::LogLevel;

#[cfg(unix)]
use super::{create_private_directory, open_private_append_file};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
#[cfg(unix)]
use crate::test::TempDir;
#[cfg(unix)]
use std::fs;

#[test]
fn should_flush_on_size_or_severity() {
    assert!(!should_flush(512, LogLevel::Debug));
    assert!(!should_flush(512, LogLevel::Info));
    assert!(should_flush(8 * 1024, LogLevel::Debug));
    assert!(should_flush(1, LogLevel::Warning));
    assert!(should_flush(1, LogLevel::Error));
}

#[cfg(unix)]
#[test]
fn private_directory_and_file_permissions_are_restrictive() {
    let root = TempDir::new("log-permissions");
    let log_dir = root.path().join("logs");
    let log_path = log_dir.join("sshctx.log");

    create_private_directory(&log_dir).expect("create private log directory");
    let _file = open_private_append_file(&log_path).expect("create private log file");

    let dir_mode = fs::metadata(&log_dir).expect("directory metadata").permissions().mode() & 0o777;
    let file_mode = fs::metadata(&log_path).expect("file metadata").permissions().mode() & 0o777;

    assert_eq!(dir_mode, 0o700);
    assert_eq!(file_mode, 0o600);
}
