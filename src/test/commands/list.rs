use crate::commands::Op;
use crate::commands::tests::{CONFIG, Harness, WEB2_STORE};
use crate::config::Settings;
use std::process::ExitCode;

#[test]
fn lists_targets_in_natural_alias_order() {
    let mut harness = Harness::new("list-order", CONFIG);
    assert_eq!(harness.run(&Op::List).expect("lists"), ExitCode::SUCCESS);
    assert_eq!(harness.stdout(), "ops@bastion:22\nalice@web2.example.com:2202\nalice@10.0.0.10:22\n");
    assert!(harness.runner.calls.borrow().is_empty());
}

#[test]
fn previous_host_is_highlighted_when_colored() {
    let mut harness = Harness::new("list-active", CONFIG).with_store(WEB2_STORE);
    harness.color = true;
    harness.run(&Op::List).expect("lists");

    let lines: Vec<String> = harness.stdout().lines().map(str::to_string).collect();
    assert_eq!(lines[1], "\x1b[1;32malice@web2.example.com:2202\x1b[0m");
    assert_eq!(lines[2], "alice@10.0.0.10:22");
}

#[test]
fn previous_host_is_plain_without_color() {
    let mut harness = Harness::new("list-plain", CONFIG).with_store(WEB2_STORE);
    harness.run(&Op::List).expect("lists");
    assert!(!harness.stdout().contains('\x1b'));
}

#[test]
fn strict_mode_skips_invalid_targets_with_a_warning() {
    let mut harness = Harness::new("list-strict", CONFIG);
    harness.settings = Settings {
        strict_mode: true,
        ..Settings::default()
    };
    harness.run(&Op::List).expect("lists");

    assert_eq!(harness.stdout(), "alice@web2.example.com:2202\nalice@10.0.0.10:22\n");
    assert_eq!(harness.stderr(), "warning: ops@bastion:22 is an illegal ssh parameter\n");
}
