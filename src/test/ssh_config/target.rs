use super::Target;
use crate::ssh_config::StoreError;

#[test]
fn parses_ipv4_target_with_port() {
    let target = Target::parse("alice@10.0.0.1:2222").expect("valid target");
    assert_eq!(target.username, "alice");
    assert_eq!(target.host, "10.0.0.1");
    assert_eq!(target.port, Some(2222));
    assert_eq!(target.to_string(), "alice@10.0.0.1:2222");
}

#[test]
fn parses_domain_target_without_port() {
    let target = Target::parse("deploy@build.example.com").expect("valid target");
    assert_eq!(target.host, "build.example.com");
    assert_eq!(target.port, None);
    assert_eq!(target.port_or_default(), 22);
    assert_eq!(target.to_string(), "deploy@build.example.com");
}

#[test]
fn accepts_dotted_usernames() {
    let target = Target::parse("john.doe@git.example.org:22").expect("valid target");
    assert_eq!(target.username, "john.doe");
}

#[test]
fn rejects_strings_outside_the_grammar() {
    for input in [
        "not-a-valid-target",
        "alice@localhost",
        "alice@bar:22",
        "@10.0.0.1:22",
        "alice@10.0.0.1:",
        "alice@10.0.0.1:port",
        "alice@10.0.0.1:70000",
        "alice bob@example.com",
        "",
    ] {
        assert!(!Target::is_valid(input), "{input:?} should be rejected");
    }
}

#[test]
fn from_str_reports_illegal_parameter() {
    let err = "nope".parse::<Target>().expect_err("invalid target");
    assert!(matches!(err, StoreError::IllegalParameter(ref input) if input == "nope"));
}

#[test]
fn builds_ssh_arguments_with_explicit_port() {
    let target = Target::parse("alice@10.0.0.1:2222").expect("valid target");
    assert_eq!(target.ssh_args(), vec!["-p", "2222", "alice@10.0.0.1"]);

    let target = Target::parse("alice@example.com").expect("valid target");
    assert_eq!(target.ssh_args(), vec!["-p", "22", "alice@example.com"]);
}
