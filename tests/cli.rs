mod common;
use assert_cmd::Command;
use common::{IPHONE_3_UA, IPHONE_4_UA, RuleStoreFixture};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn get_test_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("devsift").unwrap();
    cmd.env("DEVSIFT_HOME", home);
    // Keep a developer's own store setting out of the tests
    cmd.env_remove("DEVSIFT_STORE");
    cmd.env_remove("RUST_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_detect_table_output() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["detect", "-H", format!("User-Agent: {IPHONE_4_UA}").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone 4"))
        .stdout(predicate::str::contains("general_vendor"))
        .stdout(predicate::str::contains("Matched rule: user-agent:iphone:iphone"));
}

#[test]
fn test_detect_json_output() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    let output = get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["detect", "--json", "-H", format!("User-Agent: {IPHONE_4_UA}").as_str()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["status"], 0);
    assert_eq!(value["hd_specs"]["general_model"], "iPhone 4");
    assert_eq!(value["hd_specs"]["general_language"], "en-gb");
}

#[test]
fn test_detect_with_hardware() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args([
            "d",
            "-H",
            format!("User-Agent: {IPHONE_3_UA}").as_str(),
            "--hardware",
            "320:480:100:230",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone 3GS"))
        .stdout(predicate::str::contains("Hardware rating: 21 of 2 candidates"));
}

#[test]
fn test_detect_not_found_exits_nonzero() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["detect", "-H", "User-Agent: curl/7.64.1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not Found"));
}

#[test]
fn test_detect_rejects_malformed_header() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["detect", "-H", "no colon here"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid header"));
}

#[test]
fn test_missing_store() {
    let home = TempDir::new().unwrap();

    get_test_command(home.path())
        .args(["detect", "-H", format!("User-Agent: {IPHONE_4_UA}").as_str()])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Rule store not found"));
}

#[test]
fn test_build_info_command() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["build-info", "devicemanufacturer=NOKIA", "devicename=RM-875"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Lumia 1020"))
        .stdout(predicate::str::contains("Windows Phone"));
}

#[test]
fn test_build_info_rejects_entry_without_key() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["bi", "=RM-875"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid build info entry"));
}

#[test]
fn test_helper_useful_command() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["helper-useful", "-H", format!("User-Agent: {IPHONE_3_UA}").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"));

    get_test_command(home.path())
        .arg("--store")
        .arg(store.path())
        .args(["helper-useful", "-H", format!("User-Agent: {IPHONE_4_UA}").as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no"));
}

#[test]
fn test_store_info_from_env() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();

    let output = get_test_command(home.path())
        .env("DEVSIFT_STORE", store.path())
        .args(["store", "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["stats"]["devices"], 8);
    assert_eq!(value["stats"]["extras"], 7);
    assert_eq!(value["stats"]["high_accuracy_keys"], 1);
    assert_eq!(value["stats"]["branches"], RuleStoreFixture::BRANCHES);
    assert_eq!(value["stats"]["skipped_files"], 0);
    assert!(value["updated"].is_string());
}

#[test]
fn test_store_from_config_file() {
    let home = TempDir::new().unwrap();
    let store = RuleStoreFixture::new();
    fs::write(
        home.path().join("config.toml"),
        format!("[store]\ndirectory = {:?}\n", store.path().display().to_string()),
    )
    .unwrap();

    get_test_command(home.path())
        .args(["store", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule store"))
        .stdout(predicate::str::contains("High accuracy rules"));
}

#[test]
fn test_store_in_home_directory() {
    let home = TempDir::new().unwrap();
    let store = home.path().join("store");
    fs::create_dir_all(&store).unwrap();
    fs::write(
        store.join("user-agent0.json"),
        r#"{ "iphone": { "iphone": "10" } }"#,
    )
    .unwrap();
    fs::write(
        store.join("Device_10.json"),
        r#"{ "Device": { "_id": "10", "hd_specs": { "general_model": "iPhone" } } }"#,
    )
    .unwrap();

    get_test_command(home.path())
        .args(["detect", "-H", format!("User-Agent: {IPHONE_4_UA}").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("iPhone"));
}

#[test]
fn test_invalid_config_file() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("config.toml"), "[detection\n").unwrap();

    get_test_command(home.path())
        .args(["store", "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}
