//! End-to-end runs of the `ims` binary against a mock operations API.

use std::path::Path;

use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::json;
use tempfile::{TempDir, tempdir};

const BASIC_AUTH: &str = "Basic aWJtdXNlcjpzZWNyZXQ=";

/// `ims` isolated from the caller's config files and `IMS_*` environment.
fn ims(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("ims").expect("ims binary");
    cmd.env_clear()
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .current_dir(home);
    cmd
}

/// `ims` pointed at `server` with full credentials on the command line.
fn ims_at(home: &Path, server: &MockServer) -> Command {
    let mut cmd = ims(home);
    cmd.args(["--host", &server.host()])
        .args(["--port", &server.port().to_string()])
        .args(["--protocol", "http", "--user", "ibmuser", "--password", "secret"]);
    cmd
}

fn home() -> TempDir {
    tempdir().expect("tempdir")
}

fn completed(data: serde_json::Value) -> serde_json::Value {
    json!({
        "messages": {"IMS1": {"rc": "0000000", "rsn": "0000000", "message": "DFS058I COMMAND COMPLETED"}},
        "data": data
    })
}

#[test]
fn stop_transaction_prints_data_and_success_text() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/transaction")
            .query_param("names", "TRAN1")
            .query_param("stop", "SCHD")
            .header("authorization", BASIC_AUTH);
        then.status(200)
            .json_body(completed(json!([{"mbr": "IMS1", "tran": "TRAN1", "cc": "0"}])));
    });

    ims_at(home.path(), &server)
        .args(["stop", "transaction", "TRAN1"])
        .assert()
        .success()
        .stdout(contains(r#""tran": "TRAN1""#))
        .stdout(contains("Stopped IMS transaction(s): TRAN1"));

    mock.assert();
}

#[test]
fn aliases_and_raw_format_start_programs() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/program")
            .query_param("names", "PGM1,PGM2")
            .query_param("start", "TRACE")
            .query_param("route", "IMS1");
        then.status(200)
            .json_body(completed(json!([{"mbr": "IMS1", "pgm": "PGM1", "cc": "0"}])));
    });

    ims_at(home.path(), &server)
        .args(["sta", "pgm", "PGM1", "PGM2", "-a", "TRACE", "--route", "IMS1"])
        .args(["--format", "raw"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[{\"mbr\":\"IMS1\",\"pgm\":\"PGM1\",\"cc\":\"0\"}]\n"));

    mock.assert();
}

#[test]
fn stop_region_by_number_sends_cancel() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/region/stop")
            .query_param("regNum", "1,2")
            .query_param("cancel", "true");
        then.status(200).json_body(completed(json!([])));
    });

    ims_at(home.path(), &server)
        .args(["stop", "region", "--region-ids", "1,2", "--cancel", "--format", "table"])
        .assert()
        .success()
        .stdout(contains("(no rows)"))
        .stdout(contains("Stop of IMS region(s) requested: 1, 2"));

    mock.assert();
}

#[test]
fn blank_name_fails_before_any_request() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT);
        then.status(200).json_body(completed(json!([])));
    });

    ims_at(home.path(), &server)
        .args(["stop", "program", " "])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(contains("IMS program name is required and must not be blank"));

    mock.assert_hits(0);
}

#[test]
fn both_region_selectors_are_rejected() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT);
        then.status(200).json_body(completed(json!([])));
    });

    ims_at(home.path(), &server)
        .args(["stop", "region", "--region-ids", "1", "--job-name", "JOB1"])
        .assert()
        .code(2)
        .stderr(contains("both were given"));

    mock.assert_hits(0);
}

#[test]
fn embedded_failure_code_exits_with_application_failure() {
    let home = home();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/program");
        then.status(200).json_body(json!({
            "messages": {"IMS1": {"rc": "0000000C", "rsn": "00003000", "message": "DFS3452 PROGRAM NOT FOUND"}},
            "data": []
        }));
    });

    ims_at(home.path(), &server)
        .args(["stop", "program", "NOPGM"])
        .assert()
        .code(4)
        .stdout(predicate::str::is_empty())
        .stderr(contains("IMS reported a failure (IMS1=0000000C)"))
        .stderr(contains("IMS1: DFS3452 PROGRAM NOT FOUND"));
}

#[test]
fn server_error_exits_with_remote_failure() {
    let home = home();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(PUT).path("/transaction");
        then.status(500).body("internal error");
    });

    ims_at(home.path(), &server)
        .args(["stop", "transaction", "TRAN1"])
        .assert()
        .code(3)
        .stderr(contains("API error (500): internal error"));
}

#[test]
fn missing_host_is_a_configuration_error() {
    let home = home();

    ims(home.path())
        .args(["stop", "program", "PGM1", "--user", "ibmuser", "--password", "secret"])
        .assert()
        .code(2)
        .stderr(contains("Connection field 'host' is not configured"));
}

#[test]
fn unknown_profile_is_a_configuration_error() {
    let home = home();

    ims(home.path())
        .args(["--profile", "nope", "stop", "program", "PGM1"])
        .assert()
        .code(2)
        .stderr(contains("Profile 'nope' is not defined"));
}

#[test]
fn created_profile_is_listed_and_used() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/transaction")
            .query_param("names", "TRAN1")
            .header("authorization", BASIC_AUTH);
        then.status(200).json_body(completed(json!([])));
    });

    let port = server.port().to_string();
    ims(home.path())
        .args(["profile", "create", "dev", "--host", &server.host(), "--port", &port])
        .args(["--protocol", "http", "--user", "ibmuser"])
        .assert()
        .success()
        .stdout(contains("Profile 'dev' saved to"));

    assert!(home.path().join(".config/ims/config.toml").exists());

    ims(home.path())
        .args(["profile", "list", "--format", "raw"])
        .assert()
        .success()
        .stdout(contains(r#""name":"dev""#));

    ims(home.path())
        .args(["profile", "create", "dev", "--host", "other"])
        .assert()
        .code(2)
        .stderr(contains("already exists"));

    ims(home.path())
        .args(["--profile", "dev", "--password", "secret", "start", "tran", "TRAN1"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn profile_show_masks_the_password() {
    let home = home();
    let config_dir = home.path().join(".ims");
    std::fs::create_dir_all(&config_dir).expect("mkdir");
    std::fs::write(
        config_dir.join("config.toml"),
        "[profiles.prod]\nhost = \"ims.example.com\"\nuser = \"ibmuser\"\npassword = \"secret\"\n",
    )
    .expect("write config");

    ims(home.path())
        .args(["profile", "show", "prod"])
        .assert()
        .success()
        .stdout(contains("ims.example.com"))
        .stdout(contains("secret").not());
}

#[test]
fn zero_request_timeout_is_a_config_error() {
    let home = home();
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(PUT);
        then.status(200).json_body(completed(json!([])));
    });

    ims_at(home.path(), &server)
        .env("IMS_GENERAL__REQUEST_TIMEOUT_SECS", "0")
        .args(["stop", "program", "PGM1"])
        .assert()
        .code(2)
        .stderr(contains("request_timeout_secs"));

    mock.assert_hits(0);
}
