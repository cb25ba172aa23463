//! CLI parse and command tests.

use super::commands::{run_check, run_list};
use super::{open_blocklist, Cli, CliCommand};
use crate::blocklist::Blocklist;
use crate::config::UrlBlockConfig;
use clap::Parser;
use std::io::Write;
use std::path::{Path, PathBuf};

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_check() {
    match parse(&["urlblock", "check", "http://a.com", "HTTP://B.COM"]) {
        CliCommand::Check { blocklist, urls } => {
            assert!(blocklist.is_none());
            assert_eq!(urls, vec!["http://a.com", "HTTP://B.COM"]);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_with_blocklist() {
    match parse(&[
        "urlblock",
        "check",
        "--blocklist",
        "/tmp/blocked.txt",
        "http://a.com",
    ]) {
        CliCommand::Check { blocklist, urls } => {
            assert_eq!(blocklist.as_deref(), Some(Path::new("/tmp/blocked.txt")));
            assert_eq!(urls, vec!["http://a.com"]);
        }
        _ => panic!("expected Check with --blocklist"),
    }
}

#[test]
fn cli_parse_check_requires_url() {
    assert!(Cli::try_parse_from(["urlblock", "check"]).is_err());
}

#[test]
fn cli_parse_list() {
    match parse(&["urlblock", "list", "-b", "x.txt"]) {
        CliCommand::List { blocklist } => {
            assert_eq!(blocklist, Some(PathBuf::from("x.txt")));
        }
        _ => panic!("expected List"),
    }
}

#[test]
fn check_reports_each_url_in_order() {
    let blocklist: Blocklist = ["http://block1.com", "HTTPS://BLOCK2.COM"]
        .into_iter()
        .collect();
    let urls = vec![
        "http://ok.com".to_string(),
        "HTTP://BLOCK1.COM".to_string(),
        "https://block2.com/".to_string(),
    ];
    let mut out = Vec::new();
    let blocked = run_check(&blocklist, &urls, &mut out).unwrap();
    assert_eq!(blocked, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "allowed\thttp://ok.com\nblocked\tHTTP://BLOCK1.COM\nallowed\thttps://block2.com/\n"
    );
}

#[test]
fn list_is_sorted_and_quotes_padded_entries() {
    let blocklist: Blocklist = ["HTTP://B.COM", "   ", "http://a.com"].into_iter().collect();
    let mut out = Vec::new();
    run_list(&blocklist, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "\"   \"\nhttp://a.com\nhttp://b.com\n"
    );
}

#[test]
fn open_blocklist_without_path_errs() {
    let err = open_blocklist(&UrlBlockConfig::default(), None).unwrap_err();
    assert!(err.to_string().contains("no blocklist configured"));
}

#[test]
fn open_blocklist_prefers_flag_over_config() {
    let mut flagged = tempfile::NamedTempFile::new().unwrap();
    flagged.write_all(b"http://from-flag.com\n").unwrap();
    flagged.flush().unwrap();

    let cfg = UrlBlockConfig {
        blocklist_path: Some(PathBuf::from("/nonexistent/urlblock/config-list.txt")),
    };
    let b = open_blocklist(&cfg, Some(flagged.path())).unwrap();
    assert!(b.is_blocked("http://from-flag.com"));

    // The configured file is missing: recoverable, yields an empty list.
    assert!(open_blocklist(&cfg, None).unwrap().is_empty());
}

#[test]
fn blocklist_override_from_flag() {
    let cmd = parse(&["urlblock", "check", "-b", "/tmp/x.txt", "http://a.com"]);
    assert_eq!(cmd.blocklist_override(), Some(Path::new("/tmp/x.txt")));
    assert_eq!(parse(&["urlblock", "list"]).blocklist_override(), None);
}

fn blocklist_file(contents: &[u8]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(contents).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn run_check_reports_blocked() {
    let f = blocklist_file(b"HTTP://BLOCK1.COM\n");
    let cfg = UrlBlockConfig {
        blocklist_path: Some(f.path().to_path_buf()),
    };
    let cmd = parse(&["urlblock", "check", "http://ok.com", "http://block1.com"]);
    assert!(cmd.run(&cfg).unwrap());
}

#[test]
fn run_check_all_allowed() {
    let f = blocklist_file(b"http://block1.com\n");
    let path = f.path().to_str().unwrap();
    let cmd = parse(&["urlblock", "check", "-b", path, "http://ok.com", "http://block1.co"]);
    assert!(!cmd.run(&UrlBlockConfig::default()).unwrap());
}

#[test]
fn run_without_blocklist_errs() {
    let cmd = parse(&["urlblock", "check", "http://a.com"]);
    let err = cmd.run(&UrlBlockConfig::default()).unwrap_err();
    assert!(err.to_string().contains("no blocklist configured"));
}

#[test]
fn run_list_never_reports_blocked() {
    let f = blocklist_file(b"http://a.com\n");
    let path = f.path().to_str().unwrap();
    assert!(!parse(&["urlblock", "list", "-b", path])
        .run(&UrlBlockConfig::default())
        .unwrap());
}
