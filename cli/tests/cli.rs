use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.tmp.path().join("config").join("config.toml")
    }

    /// Command isolated from the caller's environment and working directory.
    fn cmd(&self) -> Command {
        self.cmd_with_config(&self.config_path())
    }

    fn cmd_with_config(&self, config: &Path) -> Command {
        let mut cmd = cargo_bin_cmd!("breachcheck");
        cmd.current_dir(self.tmp.path())
            .env_remove("HIBP_API_KEY")
            .env_remove("RUST_LOG")
            .env_remove("HTTP_PROXY")
            .env_remove("http_proxy")
            .env_remove("ALL_PROXY")
            .env_remove("all_proxy")
            .arg("--config")
            .arg(config);
        cmd
    }

    fn cmd_with_key(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("HIBP_API_KEY", "test-key");
        cmd
    }
}

/// One-shot HTTP stub on a background thread; returns the API base URL.
fn stub_api(status: u16, reason: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
    let addr = listener.local_addr().expect("stub address");

    thread::spawn(move || {
        let (mut socket, _) = listener.accept().expect("accept connection");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).expect("read request");
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .expect("write response");
    });

    format!("http://{addr}/api/v3")
}

#[test]
fn no_subcommand_prints_usage_and_fails() {
    let env = TestEnv::new();
    env.cmd()
        .assert()
        .code(1)
        .stdout(contains("Usage"));
}

#[test]
fn invalid_email_fails() {
    let env = TestEnv::new();
    env.cmd_with_key()
        .args(["check", "--email", "not-an-email"])
        .assert()
        .code(1)
        .stderr(contains("❌ Error: Invalid email format"));
}

#[test]
fn invalid_email_reported_before_config_is_read() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.config_path().parent().expect("config dir"))
        .expect("create config dir");
    std::fs::write(env.config_path(), "[general\n").expect("write config");

    env.cmd_with_key()
        .args(["check", "--email", "not-an-email"])
        .assert()
        .code(1)
        .stderr(contains("❌ Error: Invalid email format"))
        .stderr(contains("Configuration error").not());
}

#[test]
fn invalid_email_leaves_no_template() {
    let env = TestEnv::new();
    env.cmd_with_key()
        .args(["check", "--email", "not-an-email"])
        .assert()
        .code(1);

    assert!(!env.config_path().exists());
}

#[test]
fn unwritable_config_location_does_not_block_check() {
    let env = TestEnv::new();
    let blocker = env.tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "").expect("write blocking file");
    let api = stub_api(404, "Not Found", "");

    env.cmd_with_config(&blocker.join("config.toml"))
        .env("HIBP_API_KEY", "test-key")
        .args(["--api-url", api.as_str(), "check", "--email", "user@example.com"])
        .assert()
        .success()
        .stderr(contains("could not create configuration template"))
        .stdout(contains("Good news! No breaches found for: user@example.com"));
}

#[test]
fn init_reports_unwritable_config_location() {
    let env = TestEnv::new();
    let blocker = env.tmp.path().join("not-a-dir");
    std::fs::write(&blocker, "").expect("write blocking file");

    env.cmd_with_config(&blocker.join("config.toml"))
        .arg("init")
        .assert()
        .code(1)
        .stderr(contains("❌ Error: Configuration error: I/O error"));
}

#[test]
fn missing_api_key_fails_and_writes_template() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "--email", "user@example.com"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error: No API key found"))
        .stderr(contains("https://haveibeenpwned.com/API/Key"));

    let template = std::fs::read_to_string(env.config_path()).expect("template written");
    assert!(template.contains("your_api_key_here"));
}

#[test]
fn init_writes_template_once() {
    let env = TestEnv::new();
    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stderr(contains("Configuration template created at"));

    env.cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(contains("Configuration already exists"));
}

#[test]
fn malformed_config_fails() {
    let env = TestEnv::new();
    std::fs::create_dir_all(env.config_path().parent().expect("config dir"))
        .expect("create config dir");
    std::fs::write(env.config_path(), "[general\n").expect("write config");

    env.cmd_with_key()
        .args(["check", "--email", "user@example.com"])
        .assert()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn clean_account_reports_good_news() {
    let env = TestEnv::new();
    let api = stub_api(404, "Not Found", "");

    env.cmd_with_key()
        .args(["--api-url", api.as_str(), "check", "--email", "  clean@example.com "])
        .assert()
        .success()
        .stdout(contains("Checking breaches for: clean@example.com"))
        .stdout(contains("Good news! No breaches found for: clean@example.com"));
}

#[test]
fn breached_account_renders_table() {
    let env = TestEnv::new();
    let api = stub_api(
        200,
        "OK",
        r#"[{"Name":"X","BreachDate":"2020-01-01","DataClasses":["Emails"],"PwnCount":1500000,"IsVerified":true}]"#,
    );

    env.cmd_with_key()
        .args(["--api-url", api.as_str(), "check", "--email", "user@example.com"])
        .assert()
        .success()
        .stdout(contains("BREACHES FOUND for: user@example.com"))
        .stdout(contains("| X "))
        .stdout(contains("2020-01-01"))
        .stdout(contains("1,500,000"))
        .stdout(contains("Security Recommendations"));
}

#[test]
fn json_output_is_machine_readable() {
    let env = TestEnv::new();
    let api = stub_api(
        200,
        "OK",
        r#"[{"Name":"Old","BreachDate":"2012-01-01"},{"Name":"New","BreachDate":"2022-01-01"}]"#,
    );

    let out = env
        .cmd_with_key()
        .args(["--json", "--api-url", api.as_str(), "check", "--email", "user@example.com"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(value["ok"], true);
    assert_eq!(value["data"]["total"], 2);
    assert_eq!(value["data"]["breaches"][0]["name"], "New");
    assert_eq!(value["data"]["breaches"][1]["name"], "Old");
}

#[test]
fn summary_with_mask() {
    let env = TestEnv::new();
    let api = stub_api(
        200,
        "OK",
        r#"[{"Name":"Old","BreachDate":"2012-01-01"},{"Name":"New","BreachDate":"2022-01-01"}]"#,
    );

    env.cmd_with_key()
        .args([
            "--api-url",
            api.as_str(),
            "check",
            "--email",
            "user@example.com",
            "--summary",
            "--mask",
        ])
        .assert()
        .success()
        .stdout(contains("Breach Summary for: u**r@e******.com"))
        .stdout(contains("Latest breach: New (2022-01-01)"))
        .stdout(contains("Oldest breach: Old (2012-01-01)"));
}

#[test]
fn rate_limited_lookup_fails() {
    let env = TestEnv::new();
    let api = stub_api(429, "Too Many Requests", "");

    env.cmd_with_key()
        .args(["--api-url", api.as_str(), "check", "--email", "user@example.com"])
        .assert()
        .code(1)
        .stderr(contains(
            "Error checking breaches: API Error: Rate limit exceeded",
        ));
}

#[test]
fn breach_detail_renders() {
    let env = TestEnv::new();
    let api = stub_api(
        200,
        "OK",
        r#"{"Name":"Adobe","Domain":"adobe.com","BreachDate":"2013-10-04","Description":"<p>Big one</p>"}"#,
    );

    env.cmd_with_key()
        .args(["--api-url", api.as_str(), "breach", "--name", "Adobe"])
        .assert()
        .success()
        .stdout(contains("Breach Details: Adobe"))
        .stdout(contains("Domain.............. adobe.com"))
        .stdout(contains("Big one"));
}

#[test]
fn unknown_breach_fails() {
    let env = TestEnv::new();
    let api = stub_api(404, "Not Found", "");

    env.cmd_with_key()
        .args(["--api-url", api.as_str(), "breach", "--name", "Nope"])
        .assert()
        .code(1)
        .stderr(contains("Breach 'Nope' not found"));
}
