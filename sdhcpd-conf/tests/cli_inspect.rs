use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn sdhcpd_conf() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("sdhcpd-conf"))
}

#[test]
fn inspect_summarizes_structure() {
    sdhcpd_conf()
        .arg("inspect")
        .arg(fixture("fixtures/canonical.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("subnets (1)"))
        .stdout(predicate::str::contains("- lan network=192.168.1.0"))
        .stdout(predicate::str::contains("global options (2)"))
        .stdout(predicate::str::contains(
            "sections security=yes performance=yes logging=yes monitoring=yes",
        ));
}

#[test]
fn inspect_emits_canonical_json() {
    sdhcpd_conf()
        .arg("inspect")
        .arg(fixture("fixtures/simple-dhcpd.yaml"))
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"listen\""))
        .stdout(predicate::str::contains("\"guest\""));
}

#[test]
fn options_lists_the_catalog() {
    sdhcpd_conf()
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("DNS_SERVERS"))
        .stdout(predicate::str::contains("WPAD"));
}

#[test]
fn options_looks_up_by_code_and_name() {
    sdhcpd_conf()
        .arg("options")
        .arg("--code")
        .arg("6")
        .assert()
        .success()
        .stdout(predicate::str::contains("option DNS_SERVERS (6)"));

    sdhcpd_conf()
        .arg("options")
        .arg("--name")
        .arg("router")
        .assert()
        .success()
        .stdout(predicate::str::contains("option ROUTER (3)"));

    sdhcpd_conf()
        .arg("options")
        .arg("--code")
        .arg("999")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no standard option"));
}

#[test]
fn default_path_prints_a_config_location() {
    sdhcpd_conf()
        .arg("default-path")
        .assert()
        .success()
        .stdout(predicate::str::contains("simple-dhcpd.conf"));
}
