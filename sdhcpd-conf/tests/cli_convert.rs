use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn sdhcpd_conf() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sdhcpd-conf"))
}

#[test]
fn converts_ini_to_json() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("out.json");

    sdhcpd_conf()
        .arg("convert")
        .arg(fixture("fixtures/simple-dhcpd.conf"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("wrote "));

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.contains("\"dhcp\""));
    assert!(text.contains("\"lan\""));
}

#[test]
fn converts_legacy_json_to_yaml() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("out.yaml");

    sdhcpd_conf()
        .arg("convert")
        .arg(fixture("fixtures/legacy-server.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.contains("dhcp:"));
    assert!(text.contains("192.168.1.100"));
}

#[test]
fn refuses_to_overwrite_its_own_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("config.json");
    fs::write(&input, r#"{"dhcp": {"listen": ["0.0.0.0:67"]}}"#).expect("write");

    sdhcpd_conf()
        .arg("convert")
        .arg(&input)
        .arg("--output")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite"));
}

#[cfg(unix)]
#[test]
fn refuses_protected_destination() {
    sdhcpd_conf()
        .arg("convert")
        .arg(fixture("fixtures/canonical.json"))
        .arg("--output")
        .arg("/etc/sdhcpd-conf-test-output.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires elevated privileges"));

    assert!(!PathBuf::from("/etc/sdhcpd-conf-test-output.json").exists());
}

#[test]
fn missing_input_converts_as_default_config() {
    let dir = tempdir().expect("tempdir");
    let output = dir.path().join("default.ini");

    sdhcpd_conf()
        .arg("convert")
        .arg(dir.path().join("does-not-exist.json"))
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = fs::read_to_string(&output).expect("read output");
    assert!(text.contains("listen_addresses = 0.0.0.0:67"));
}
