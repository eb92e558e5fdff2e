//! End-to-end tests of the noteflow binary against a mock server.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn noteflow(home: &TempDir, server: &str) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("noteflow");
    cmd.env("NOTEFLOW_HOME", home.path())
        .env("NOTEFLOW_SERVER", server)
        .env_remove("NOTEFLOW_PASSWORD")
        .env_remove("RUST_LOG");
    cmd
}

#[tokio::test]
async fn test_login_success_prints_redirect() {
    let mock_server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "alice", "password": "secret"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "Login successful", "user": "alice"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    noteflow(&home, &mock_server.uri())
        .args(["login", "--username", "alice", "--password", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success!"))
        .stdout(predicate::str::contains("-> dashboard.html"));
}

#[tokio::test]
async fn test_register_rejection_shows_hint() {
    let mock_server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(
            ResponseTemplate::new(409)
                .set_body_json(json!({"error": "Username or email already exists"})),
        )
        .mount(&mock_server)
        .await;

    noteflow(&home, &mock_server.uri())
        .args([
            "register",
            "--username",
            "bob",
            "--email",
            "bob@example.com",
            "--password",
            "hunter22",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Registration failed: Username or email already exists",
        ))
        .stderr(predicate::str::contains("Please check the email format"));
}

#[tokio::test]
async fn test_missing_field_makes_no_request() {
    let mock_server = MockServer::start().await;
    let home = TempDir::new().unwrap();

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    noteflow(&home, &mock_server.uri())
        .args(["register", "--username", "bob", "--password", "hunter22"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("All fields are required!"));
}

#[test]
fn test_unreachable_server() {
    let home = TempDir::new().unwrap();
    let uri = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    noteflow(&home, &uri)
        .args(["login", "--username", "alice", "--password", "secret"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Connect Error, Retry Later Please"));
}

#[test]
fn test_logout_clears_token() {
    let home = TempDir::new().unwrap();
    let session = home.path().join("session.json");
    fs::write(&session, r#"{"authToken":"abc123","theme":"dark"}"#).unwrap();

    noteflow(&home, "http://127.0.0.1:1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in."));

    noteflow(&home, "http://127.0.0.1:1")
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("-> login.html"));

    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&session).unwrap()).unwrap();
    assert_eq!(stored, json!({"theme": "dark"}));

    noteflow(&home, "http://127.0.0.1:1")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

#[test]
fn test_invalid_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "server_url = ").unwrap();

    let mut cmd = cargo_bin_cmd!("noteflow");
    cmd.env("NOTEFLOW_HOME", home.path())
        .env_remove("NOTEFLOW_SERVER")
        .arg("status")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid config.toml"));
}

#[test]
fn test_server_without_scheme_is_setup_error() {
    let home = TempDir::new().unwrap();

    noteflow(&home, "localhost:1")
        .args(["login", "--username", "alice", "--password", "secret"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Could not set up the network client."))
        .stderr(predicate::str::contains("Connect Error").not());
}
