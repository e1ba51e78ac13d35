use super::resolve_host;
use crate::Error;
use crate::commands::tests::{CONFIG, Harness, WEB2_STORE};
use crate::commands::{CommandError, Op};
use crate::ssh_config::{ConfigSnapshot, Host};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

fn snapshot() -> ConfigSnapshot {
    ConfigSnapshot {
        hosts: vec![
            Host::new("10.0.0.10", "web10", "alice", 22),
            Host::new("web2.example.com", "web2", "alice", 2202),
        ],
        previous: None,
        store_path: PathBuf::from("/unused"),
    }
}

#[test]
fn resolves_alias_target_and_menu_line() {
    let snapshot = snapshot();
    assert_eq!(resolve_host(&snapshot, "web2").expect("alias").display_name, "web2");
    assert_eq!(resolve_host(&snapshot, "alice@10.0.0.10:22").expect("target").display_name, "web10");
    assert_eq!(resolve_host(&snapshot, " web2#alice@web2.example.com:2202 (previous)").expect("menu line").port, 2202);
    assert_eq!(resolve_host(&snapshot, "web10#somewhere-else").expect("menu alias").hostname, "10.0.0.10");
}

#[test]
fn resolves_targets_outside_the_config() {
    let host = resolve_host(&snapshot(), "carol@db.example.com").expect("grammar target");
    assert_eq!(host, Host::new("db.example.com", "db.example.com", "carol", 22));
}

#[test]
fn rejects_unknown_names() {
    let err = resolve_host(&snapshot(), "nowhere").expect_err("unknown");
    assert!(matches!(err, CommandError::UnknownHost(ref name) if name == "nowhere"));
}

#[test]
fn connects_by_alias_and_records_the_host() {
    let mut harness = Harness::new("switch-alias", CONFIG);
    assert_eq!(harness.run(&Op::Switch("web10".to_string())).expect("connects"), ExitCode::SUCCESS);

    assert_eq!(harness.ssh_calls(), vec![vec!["-p", "22", "alice@10.0.0.10"]]);
    assert_eq!(harness.stderr(), "✔ Switched to target \"alice@10.0.0.10:22\".\n");
    assert_eq!(harness.recorded(), Some(Host::new("10.0.0.10", "web10", "alice", 22)));
}

#[test]
fn dash_connects_to_the_previous_host() {
    let mut harness = Harness::new("switch-dash", CONFIG).with_store(WEB2_STORE);
    harness.run(&Op::Switch("-".to_string())).expect("connects");
    assert_eq!(harness.ssh_calls(), vec![vec!["-p", "2202", "alice@web2.example.com"]]);
}

#[test]
fn dash_without_previous_host_fails_before_ssh() {
    let mut harness = Harness::new("switch-dash-none", CONFIG);
    let err = harness.run(&Op::Switch("-".to_string())).expect_err("nothing recorded");
    assert!(matches!(err, Error::Command(CommandError::NoPreviousHost)));
    assert!(harness.ssh_calls().is_empty());
}

#[test]
fn exit_status_mirrors_ssh_and_remote_failures_still_record() {
    let mut harness = Harness::new("switch-exit", CONFIG);
    harness.runner.push_exit(3);
    assert_eq!(harness.run(&Op::Switch("web2".to_string())).expect("ran ssh"), ExitCode::from(3));
    assert_eq!(harness.recorded().map(|host| host.display_name), Some("web2".to_string()));
}

#[test]
fn connection_failure_is_not_recorded() {
    let mut harness = Harness::new("switch-255", CONFIG).with_store(WEB2_STORE);
    harness.runner.push_exit(255);
    assert_eq!(harness.run(&Op::Switch("web10".to_string())).expect("ran ssh"), ExitCode::from(255));
    assert_eq!(harness.recorded().map(|host| host.display_name), Some("web2".to_string()));
}

#[test]
fn spawn_failure_is_an_error() {
    let mut harness = Harness::new("switch-spawn", CONFIG);
    harness.runner.push(Err(io::Error::from(io::ErrorKind::NotFound)));
    let err = harness.run(&Op::Switch("web10".to_string())).expect_err("ssh missing");
    assert!(matches!(err, Error::Command(CommandError::Spawn { program: "ssh", .. })));
    assert_eq!(harness.recorded(), None);
}

#[test]
fn unsavable_target_only_warns() {
    let mut harness = Harness::new("switch-unsavable", CONFIG);
    harness.runner.push_exit(0);
    assert_eq!(harness.run(&Op::Switch("bastion".to_string())).expect("connects"), ExitCode::SUCCESS);

    assert_eq!(harness.ssh_calls(), vec![vec!["-p", "22", "ops@bastion"]]);
    assert!(harness.stderr().contains("warning: failed to save previous host: illegal parameter"));
    assert_eq!(harness.recorded(), None);
}

#[test]
fn unknown_host_never_runs_ssh() {
    let mut harness = Harness::new("switch-unknown", CONFIG);
    let err = harness.run(&Op::Switch("nowhere".to_string())).expect_err("unknown");
    assert!(matches!(err, Error::Command(CommandError::UnknownHost(_))));
    assert!(harness.ssh_calls().is_empty());
}
