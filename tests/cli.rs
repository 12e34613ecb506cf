//! Tests for the `route-parser` and `route-cli` binaries.

use std::io::Write;
use std::process::{Command, Stdio};

mod common;

const PRETTY_JSON: &str = r#"[
  {
    "path": "/foo"
  },
  {
    "path": "/foo/bar",
    "name": "bar"
  },
  {
    "path": "/foo/baz",
    "methods": [
      "GET"
    ]
  },
  {
    "path": "/foo/baz/quux/:quux_id",
    "methods": [
      "GET",
      "POST"
    ],
    "name": "quux"
  }
]"#;

fn route_parser() -> Command {
    Command::new(env!("CARGO_BIN_EXE_route-parser"))
}

fn route_cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_route-cli"))
}

#[test]
fn test_parser_writes_compact_file() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let source = common::write(dir, "app.rb", common::APP_SOURCE);
    let out = dir.join("routes-example.json");

    let status = route_parser().arg("-f").arg(&out).arg(&source).status().unwrap();
    assert!(status.success());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), common::APP_ROUTES_JSON);
}

#[test]
fn test_parser_writes_pretty_file() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let source = common::write(dir, "app.rb", common::APP_SOURCE);
    let out = dir.join("routes-example-pretty.json");

    let status = route_parser().arg("-f").arg(&out).arg("-p").arg(&source).status().unwrap();
    assert!(status.success());

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(written, PRETTY_JSON);
    let a: serde_json::Value = serde_json::from_str(&written).unwrap();
    let b: serde_json::Value = serde_json::from_str(common::APP_ROUTES_JSON).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parser_reads_stdin_and_writes_stdout() {
    let mut child = route_parser()
        .args(["-f", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(common::APP_SOURCE.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), common::APP_ROUTES_JSON);
}

#[test]
fn test_parser_fails_on_missing_input() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let output = route_parser()
        .arg("-f")
        .arg(dir.join("out.json"))
        .arg(dir.join("missing.rb"))
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(!dir.join("out.json").exists());
}

#[test]
fn test_cli_resolves_named_route() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let artifact = common::write(dir, "routes.json", common::APP_ROUTES_JSON);

    let output = route_cli()
        .arg("-f")
        .arg(&artifact)
        .args(["resolve", "quux", "--arg", "quux_id=3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/foo/baz/quux/3");

    let output = route_cli()
        .arg("-f")
        .arg(&artifact)
        .args(["resolve", "quux", "3", "1"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("too many placeholder values"));
}

#[test]
fn test_cli_positional_flag_forces_empty_values() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let artifact = common::write(dir, "routes.json", common::APP_ROUTES_JSON);

    let output = route_cli()
        .arg("-f")
        .arg(&artifact)
        .args(["resolve", "quux", "--positional"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("not enough placeholder values"));

    // Without the flag, no values means no args: the template comes back as stored.
    let output = route_cli()
        .arg("-f")
        .arg(&artifact)
        .args(["resolve", "quux"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/foo/baz/quux/:quux_id");

    let output = route_cli()
        .arg("-f")
        .arg(&artifact)
        .args(["resolve", "bar", "--positional"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "/foo/bar");
}

#[test]
fn test_cli_lists_routes() {
    let tmp = common::scratch_dir();
    let dir = tmp.path();
    let artifact = common::write(dir, "routes.json", common::APP_ROUTES_JSON);

    let output = route_cli().arg("-f").arg(&artifact).arg("list").output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), common::APP_ROUTES_JSON);
}
