//! CLI integration tests for the restclient-config binary.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// Build a command for the binary running in `dir`, isolated from the
/// caller's environment-provided settings.
fn cli_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo_bin_cmd!("restclient-config");
    cmd.current_dir(dir)
        .env_remove("RESTCLIENT_SETTINGS")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture() -> String {
    common::fixture_path().display().to_string()
}

fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = cli_cmd(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output)
        .unwrap_or_else(|e| panic!("Failed to parse JSON from {args:?}: {e}"))
}

#[test]
fn test_resolve_by_name_json() {
    let dir = TempDir::new().unwrap();
    let fixture = fixture();
    let json = run_json(
        dir.path(),
        &["--json", "resolve", "--name", "test-client", "-p", &fixture, "--no-env"],
    );

    assert_eq!(json["client"], "test-client");
    assert_eq!(json["config"]["url"], "http://localhost:8080");
    assert_eq!(json["config"]["connect-timeout"], 5000);
    assert_eq!(json["config"]["follow-redirects"], true);
    assert_eq!(json["config"]["query-param-style"], "COMMA_SEPARATED");
    assert!(json.get("sources").is_none());
}

#[test]
fn test_resolve_by_type_matches_name() {
    let dir = TempDir::new().unwrap();
    let fixture = fixture();
    let by_name = run_json(
        dir.path(),
        &["--json", "resolve", "--name", "test-client", "-p", &fixture, "--no-env"],
    );
    let by_type = run_json(
        dir.path(),
        &[
            "--json",
            "resolve",
            "--type",
            "io.quarkus.restclient.config.RestClientConfigTest",
            "--config-key",
            "test-client",
            "-p",
            &fixture,
            "--no-env",
        ],
    );
    assert_eq!(by_name["config"], by_type["config"]);
}

#[test]
fn test_explain_lists_source_keys() {
    let dir = TempDir::new().unwrap();
    let fixture = fixture();
    let json = run_json(
        dir.path(),
        &[
            "--json", "resolve", "--type", "org.acme.LegacyClient", "-p", &fixture, "--no-env",
            "--explain",
        ],
    );
    assert_eq!(json["sources"]["url"], "org.acme.LegacyClient/mp-rest/url");
}

#[test]
fn test_env_var_overrides_file() {
    let dir = TempDir::new().unwrap();
    let fixture = fixture();
    let output = cli_cmd(dir.path())
        .env("QUARKUS_REST_CLIENT_TEST_CLIENT_URL", "http://from-env")
        .args(["--json", "resolve", "--name", "test-client", "-p", &fixture])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["config"]["url"], "http://from-env");
}

#[test]
fn test_human_output_table() {
    let dir = TempDir::new().unwrap();
    let fixture = fixture();
    cli_cmd(dir.path())
        .env("NO_COLOR", "1")
        .args(["resolve", "--name", "test-client", "-p", &fixture, "--no-env"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration for test-client"))
        .stdout(predicate::str::contains("connection-pool-size"))
        .stdout(predicate::str::contains("COMMA_SEPARATED"));
}

#[test]
fn test_invalid_value_fails_with_key() {
    let dir = TempDir::new().unwrap();
    let file = common::temp_properties("quarkus.rest-client.bad.connect-timeout=soon\n");
    cli_cmd(dir.path())
        .args(["resolve", "--name", "bad", "--no-env", "-p"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("quarkus.rest-client.bad.connect-timeout"));
}

#[test]
fn test_empty_root_prefix_rejected() {
    let dir = TempDir::new().unwrap();
    cli_cmd(dir.path())
        .args(["resolve", "--name", "test-client", "--no-env", "--root-prefix", ""])
        .arg("-p")
        .arg(common::fixture_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid root prefix"));
}

#[test]
fn test_name_and_type_conflict() {
    let dir = TempDir::new().unwrap();
    cli_cmd(dir.path())
        .args(["resolve", "--name", "a", "--type", "org.acme.A"])
        .assert()
        .failure();
}

#[test]
fn test_default_properties_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("application.properties"),
        "quarkus.rest-client.local.url=http://cwd\n",
    )
    .unwrap();

    let json = run_json(dir.path(), &["--json", "resolve", "--name", "local", "--no-env"]);
    assert_eq!(json["config"]["url"], "http://cwd");
}

#[test]
fn test_settings_file_changes_root_prefix() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("restclient-config.yaml"),
        "resolver:\n  root_prefix: acme.clients\n  include_env: false\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("application.properties"),
        "acme.clients.billing.url=http://billing\n",
    )
    .unwrap();

    let json = run_json(dir.path(), &["--json", "resolve", "--name", "billing"]);
    assert_eq!(json["config"]["url"], "http://billing");

    let settings = run_json(dir.path(), &["--json", "settings"]);
    assert_eq!(settings["resolver"]["root_prefix"], "acme.clients");
}
