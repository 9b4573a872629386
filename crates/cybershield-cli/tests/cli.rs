//! End-to-end tests for the `cybershield` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BREACHES: &str = r#"[
    {
        "Name": "Adobe",
        "Title": "Adobe",
        "Domain": "adobe.com",
        "BreachDate": "2013-10-04",
        "PwnCount": 152445165,
        "DataClasses": ["Email addresses", "Passwords"],
        "IsVerified": true
    }
]"#;

/// Command isolated from the user's config and session files.
fn cybershield(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("cybershield").unwrap();
    cmd.env("CYBERSHIELD_CONFIG_DIR", home.path())
        .env("CYBERSHIELD_DATA_DIR", home.path())
        .env_remove("CYBERSHIELD_PASSWORD")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn url_reports_safe_domain_as_json() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["-o", "json", "url", "example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""domain": "example.org""#))
        .stdout(predicate::str::contains(r#""label": "SAFE""#));
}

#[test]
fn url_flags_phishing_pattern() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["-o", "json", "url", "http://paypal-verify.example/12345678"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""label": "SUSPICIOUS""#))
        .stdout(predicate::str::contains("fake-paypal"));
}

#[test]
fn url_strict_mode_rejects_lookalike_host() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["-o", "json", "url", "--strict", "google.com.evil.example"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""is_trusted": false"#));
}

#[test]
fn empty_url_fails() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["url", "  "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid URL"));
}

#[test]
fn score_with_half_the_points_is_fair() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["-o", "json", "score", "-d", "checklist", "-d", "2fa"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""percentage": 50"#))
        .stdout(predicate::str::contains(r#""level": "FAIR""#));
}

#[test]
fn score_rejects_unknown_action() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["score", "-d", "firewall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Known ids"));
}

#[test]
fn checklist_pretty_output_lists_items() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["checklist", "-d", "2fa", "--by-category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enable Two-Factor Authentication"))
        .stdout(predicate::str::contains("10%"));
}

#[test]
fn checklist_csv_has_header_and_ten_rows() {
    let home = TempDir::new().unwrap();
    let output = cybershield(&home)
        .args(["-o", "csv", "checklist"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("id,title,category,priority,completed"));
    assert_eq!(stdout.lines().count(), 11);
}

#[test]
fn breach_not_found_is_clear() {
    let home = TempDir::new().unwrap();
    let body = home.path().join("empty.json");
    std::fs::write(&body, "").unwrap();

    cybershield(&home)
        .args(["breach", "ada@example.com", "--status", "404", "--response"])
        .arg(&body)
        .assert()
        .success()
        .stdout(predicate::str::contains("not found in any known data breach"));
}

#[test]
fn breach_report_counts_breaches() {
    let home = TempDir::new().unwrap();
    let body = home.path().join("breaches.json");
    std::fs::write(&body, BREACHES).unwrap();

    cybershield(&home)
        .args(["-o", "json", "breach", "ada@example.com", "-r"])
        .arg(&body)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""breach_count": 1"#))
        .stdout(predicate::str::contains(r#""severity": "critical""#));
}

#[test]
fn breach_rejects_invalid_email() {
    let home = TempDir::new().unwrap();
    let body = home.path().join("breaches.json");
    std::fs::write(&body, BREACHES).unwrap();

    cybershield(&home)
        .args(["breach", "not-an-email", "-r"])
        .arg(&body)
        .assert()
        .failure();
}

#[test]
fn remembered_login_persists_until_logout() {
    let home = TempDir::new().unwrap();

    cybershield(&home)
        .args(["login", "ada@example.com", "--password", "hunter22", "--remember"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as"));

    cybershield(&home)
        .args(["-o", "json", "whoami"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "ada""#));

    cybershield(&home).arg("logout").assert().success();

    cybershield(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}

#[test]
fn short_password_is_rejected() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["login", "ada@example.com", "-p", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 6 characters"));
}

#[test]
fn signup_is_always_remembered() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["signup", "ada@example.com", "Ada Lovelace", "-p", "hunter22"])
        .assert()
        .success();

    cybershield(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ada Lovelace"));
}

#[test]
fn config_set_changes_default_output() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["config", "set", "output_format", "json"])
        .assert()
        .success();

    cybershield(&home)
        .args(["url", "example.org"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""label": "SAFE""#));

    cybershield(&home)
        .args(["config", "set", "api_key", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_path_honours_override() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn explain_keeps_json_output_parseable() {
    let home = TempDir::new().unwrap();
    let output = cybershield(&home)
        .args(["--explain", "-o", "json", "url", "example.org"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["label"], "SAFE");
}

#[test]
fn explain_by_default_applies_to_pretty_output_only() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["config", "set", "explain_by_default", "true"])
        .assert()
        .success();

    let output = cybershield(&home)
        .args(["-o", "json", "score", "-d", "2fa"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["score"]["percentage"], 25);

    cybershield(&home)
        .arg("score")
        .assert()
        .success()
        .stdout(predicate::str::contains("What This Does"));
}

#[test]
fn password_common_word_is_very_weak() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["-o", "json", "password", "-p", "password"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""score": 0"#))
        .stdout(predicate::str::contains(r#""label": "VERY_WEAK""#));
}

#[test]
fn password_random_string_is_strong() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["password", "--password", "x7#Qm!v2Lr$9pZ@wK4tB&eN"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Strong]"));
}

#[test]
fn password_empty_is_rejected() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["password", "-p", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("password is empty"));
}

#[test]
fn login_without_remember_forgets_previous_user() {
    let home = TempDir::new().unwrap();
    cybershield(&home)
        .args(["signup", "old@example.com", "Old Account", "-p", "hunter22"])
        .assert()
        .success();

    cybershield(&home)
        .args(["login", "new@example.com", "-p", "hunter22"])
        .assert()
        .success();

    cybershield(&home)
        .arg("whoami")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not signed in"));
}
