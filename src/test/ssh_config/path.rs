use super::{default_ssh_config_path, default_store_path, expand_tilde, resolve_override};
use crate::ssh_config::SshConfigError;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[test]
fn default_paths_live_under_home() {
    let home = Path::new("/home/alice");
    assert_eq!(default_ssh_config_path(home), PathBuf::from("/home/alice/.ssh/config"));
    assert_eq!(default_store_path(home), PathBuf::from("/home/alice/.sshctx/config.yaml"));
}

#[test]
fn unset_or_empty_override_is_ignored() {
    assert!(resolve_override("SSHCONFIG", None, None).expect("unset").is_none());
    let empty = OsString::new();
    assert!(resolve_override("SSHCONFIG", Some(&empty), None).expect("empty").is_none());
}

#[test]
fn single_override_is_used_as_is() {
    let value = OsString::from("/etc/ssh/alt_config");
    let resolved = resolve_override("SSHCONFIG", Some(&value), None).expect("single path");
    assert_eq!(resolved, Some(PathBuf::from("/etc/ssh/alt_config")));
}

#[cfg(unix)]
#[test]
fn path_list_override_is_rejected() {
    let value = OsString::from("/tmp/a.yaml:/tmp/b.yaml");
    let err = resolve_override("SSHCTX", Some(&value), None).expect_err("two paths");
    assert!(matches!(err, SshConfigError::MultiplePaths("SSHCTX")));
    assert_eq!(err.to_string(), "multiple files in SSHCTX are currently not supported");
}

#[test]
fn tilde_expands_against_home() {
    let home = Path::new("/home/alice");
    assert_eq!(expand_tilde(Path::new("~/.ssh/work"), Some(home)), PathBuf::from("/home/alice/.ssh/work"));
    assert_eq!(expand_tilde(Path::new("/abs/config"), Some(home)), PathBuf::from("/abs/config"));
    assert_eq!(expand_tilde(Path::new("~/.ssh/work"), None), PathBuf::from("~/.ssh/work"));
}
