use super::{scan, scan_reader};
use crate::ssh_config::{Host, SshConfigError};
use std::io::Cursor;

#[test]
fn scans_single_block_with_all_directives() {
    let lines = ["Host foo", "  Hostname 10.0.0.1", "  User alice", "  Port 2222"];
    let hosts = scan(lines, "me").expect("one host");
    assert_eq!(hosts, vec![Host::new("10.0.0.1", "foo", "alice", 2222)]);
}

#[test]
fn unindented_directives_belong_to_the_open_block() {
    let hosts = scan("Host foo\nHostname 10.0.0.1\nUser alice\nPort 2222\n".lines(), "me").expect("one host");
    assert_eq!(hosts, vec![Host::new("10.0.0.1", "foo", "alice", 2222)]);

    let hosts = scan("Host bar\n".lines(), "bob").expect("one host");
    assert_eq!(hosts, vec![Host::new("bar", "bar", "bob", 22)]);
}

#[test]
fn alias_becomes_target_without_hostname() {
    let lines = ["Host bar", "  User bob"];
    let hosts = scan(lines, "me").expect("one host");
    assert_eq!(hosts, vec![Host::new("bar", "bar", "bob", 22)]);
}

#[test]
fn default_user_fills_missing_user() {
    let hosts = scan(["Host build", "  Hostname build.example.com"], "carol").expect("one host");
    assert_eq!(hosts[0].username, "carol");
    assert_eq!(hosts[0].port, 22);
}

#[test]
fn config_without_host_lines_has_no_hosts() {
    let err = scan(["# just a comment", "ServerAliveInterval 30"], "me").expect_err("no hosts");
    assert!(matches!(err, SshConfigError::NoHostsFound));
    assert_eq!(err.to_string(), "no host found in ssh config");

    let err = scan(Vec::<String>::new(), "me").expect_err("empty input");
    assert!(matches!(err, SshConfigError::NoHostsFound));
}

#[test]
fn wildcard_and_placeholder_blocks_are_discarded() {
    let lines = [
        "Host *",
        "  ServerAliveInterval 30",
        "Host name",
        "  User nobody",
        "Host real",
        "  Hostname real.example.com",
    ];
    let hosts = scan(lines, "me").expect("one surviving host");
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].display_name, "real");
}

#[test]
fn only_discarded_blocks_is_no_hosts_found() {
    let err = scan(["Host *", "  User root"], "me").expect_err("nothing survives");
    assert!(matches!(err, SshConfigError::NoHostsFound));
}

#[test]
fn keeps_source_order_and_the_last_block() {
    let config = "\
Host zeta
  Hostname zeta.example.com

Host alpha
  Hostname 192.168.1.4
  Port 2200

Host last
  Hostname last.example.com
  User deploy
";
    let hosts = scan(config.lines(), "me").expect("three hosts");
    let names: Vec<&str> = hosts.iter().map(|host| host.display_name.as_str()).collect();
    assert_eq!(names, vec!["zeta", "alpha", "last"]);
    assert_eq!(hosts[1].port, 2200);
    assert_eq!(hosts[2].username, "deploy");
}

#[test]
fn lines_before_the_first_block_are_ignored() {
    let lines = ["User ghost", "Port 1", "Host svc", "  Hostname svc.example.com"];
    let hosts = scan(lines, "me").expect("one host");
    assert_eq!(hosts[0].username, "me");
    assert_eq!(hosts[0].port, 22);
}

#[test]
fn non_numeric_port_falls_back_to_default() {
    let hosts = scan(["Host odd", "  Port ssh"], "me").expect("one host");
    assert_eq!(hosts[0].port, 22);
}

#[test]
fn last_directive_occurrence_wins() {
    let hosts = scan(["Host twice", "  User first", "  User second"], "me").expect("one host");
    assert_eq!(hosts[0].username, "second");
}

#[test]
fn indented_host_keyword_does_not_open_a_block() {
    let lines = ["Host outer", "  Hostname outer.example.com", "  Host inner"];
    let hosts = scan(lines, "me").expect("one host");
    assert_eq!(hosts.len(), 1);
    assert_eq!(hosts[0].display_name, "inner");
}

#[test]
fn hostname_directive_does_not_open_a_block() {
    let lines = ["Hostname stray.example.com", "Host kept", "  User bob"];
    let hosts = scan(lines, "me").expect("one host");
    assert_eq!(hosts, vec![Host::new("kept", "kept", "bob", 22)]);
}

#[test]
fn scan_reader_reads_lines_from_any_buffer() {
    let reader = Cursor::new("Host foo\n  Hostname 10.0.0.1\n  User alice\n  Port 2222\n");
    let hosts = scan_reader(reader, "me").expect("one host");
    assert_eq!(hosts[0].target(), "alice@10.0.0.1:2222");
}

#[test]
fn scan_reader_reports_invalid_utf8() {
    let reader = Cursor::new(vec![b'H', b'o', b's', b't', b' ', 0xff, 0xfe, b'\n']);
    let err = scan_reader(reader, "me").expect_err("invalid utf-8");
    assert!(matches!(err, SshConfigError::Read(_)));
}
