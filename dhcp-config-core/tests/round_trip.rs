use std::path::PathBuf;

use pretty_assertions::assert_eq;

use dhcp_config_core::json::{to_json_string, try_parse_json};
use dhcp_config_core::yaml::{to_yaml_string, try_parse_yaml};
use dhcp_config_core::{load_configuration, save_configuration};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn json_round_trip_is_lossless_for_canonical_schema() {
    let first = load_configuration(fixture("fixtures/canonical.json"));
    assert!(first.dhcp.is_some());

    let text = to_json_string(&first).expect("serialize");
    let second = try_parse_json(&text).expect("reparse");
    assert_eq!(first, second);
}

#[test]
fn yaml_round_trip_is_lossless_for_canonical_schema() {
    let first = load_configuration(fixture("fixtures/simple-dhcpd.yaml"));
    assert!(first.dhcp.is_some());

    let text = to_yaml_string(&first).expect("serialize");
    let second = try_parse_yaml(&text).expect("reparse");
    assert_eq!(first, second);
}

#[test]
fn cross_format_save_preserves_core_fields() {
    let source = load_configuration(fixture("fixtures/simple-dhcpd.conf"));
    let dir = tempfile::tempdir().expect("tempdir");

    // INI is lossy outside the server+subnet core, but the core survives a
    // trip through every format.
    for file_name in ["copy.json", "copy.yaml", "copy.ini"] {
        let path = dir.path().join(file_name);
        save_configuration(&source, &path).expect("save");
        let reloaded = load_configuration(&path);

        let lhs = source.dhcp.as_ref().expect("source dhcp");
        let rhs = reloaded.dhcp.expect("reloaded dhcp");
        assert_eq!(lhs.listen, rhs.listen, "{file_name}");
        assert_eq!(lhs.max_leases, rhs.max_leases, "{file_name}");

        let source_subnets = lhs.subnets.as_ref().expect("source subnets");
        let reloaded_subnets = rhs.subnets.expect("reloaded subnets");
        assert_eq!(source_subnets.len(), reloaded_subnets.len(), "{file_name}");
        for (a, b) in source_subnets.iter().zip(&reloaded_subnets) {
            assert_eq!(a.name, b.name, "{file_name}");
            assert_eq!(a.network, b.network, "{file_name}");
            assert_eq!(a.range_string(), b.range_string(), "{file_name}");
            assert_eq!(a.gateway, b.gateway, "{file_name}");
            assert_eq!(a.dns_servers, b.dns_servers, "{file_name}");
            assert_eq!(a.lease_time, b.lease_time, "{file_name}");
        }
    }
}

#[test]
fn legacy_json_parses_to_canonical_sections() {
    let config = load_configuration(fixture("fixtures/legacy-server.json"));
    let dhcp = config.dhcp.expect("dhcp");

    assert_eq!(
        dhcp.listen,
        Some(vec!["0.0.0.0:67".to_string(), "192.168.1.1:67".to_string()])
    );
    let subnets = dhcp.subnets.expect("subnets");
    assert_eq!(subnets.len(), 1);
    assert_eq!(subnets[0].range_string(), "192.168.1.100-192.168.1.200");

    let options = dhcp.global_options.expect("options");
    assert_eq!(options[0].effective_value(), Some("8.8.8.8"));

    let logging = dhcp.logging.expect("logging");
    assert_eq!(logging.level.as_deref(), Some("debug"));
}
