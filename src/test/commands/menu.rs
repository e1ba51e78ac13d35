use crate::Error;
use crate::commands::tests::{CONFIG, Harness, WEB2_STORE};
use crate::commands::{CommandError, Op};
use crate::config::Settings;
use crate::ssh_config::Host;
use std::process::ExitCode;

#[test]
fn offers_menu_lines_and_marks_the_previous_host() {
    let mut harness = Harness::new("menu-lines", CONFIG).with_store(WEB2_STORE);
    harness.selector.choice = Some(2);

    assert_eq!(harness.run(&Op::MenuSelect).expect("connects"), ExitCode::SUCCESS);
    assert_eq!(
        *harness.selector.offered.borrow(),
        vec![
            "bastion#ops@bastion:22".to_string(),
            "web2#alice@web2.example.com:2202 (previous)".to_string(),
            "web10#alice@10.0.0.10:22".to_string(),
        ]
    );
    assert_eq!(harness.ssh_calls(), vec![vec!["-p", "22", "alice@10.0.0.10"]]);
    assert_eq!(harness.recorded(), Some(Host::new("10.0.0.10", "web10", "alice", 22)));
}

#[test]
fn dismissed_menu_is_no_selection() {
    let mut harness = Harness::new("menu-dismissed", CONFIG);
    let err = harness.run(&Op::MenuSelect).expect_err("dismissed");
    assert!(matches!(err, Error::Command(CommandError::NoSelection)));
    assert!(harness.ssh_calls().is_empty());
}

#[test]
fn strict_mode_hides_invalid_targets_from_the_menu() {
    let mut harness = Harness::new("menu-strict", CONFIG);
    harness.settings = Settings {
        strict_mode: true,
        ..Settings::default()
    };
    harness.selector.choice = Some(0);

    harness.run(&Op::MenuSelect).expect("connects");
    assert_eq!(harness.selector.offered.borrow().len(), 2);
    assert_eq!(harness.ssh_calls(), vec![vec!["-p", "2202", "alice@web2.example.com"]]);
}
