//! YAML codec: canonical decode with a legacy-schema conversion pass.
//!
//! The legacy pass reuses the same marker-key detection as the JSON codec by
//! transcoding the untyped YAML document into a [`serde_json::Value`]; typed
//! sub-trees are then recovered with `from_value` instead of re-encoding
//! them to text and parsing again. The legacy field set is narrower than the
//! JSON one: listen addresses, subnets, and global options only.

use serde_json::Value;

use crate::detect::{detect_schema, SchemaFlavor};
use crate::error::ParseError;
use crate::model::{
    DhcpConfig, DhcpOption, DhcpSection, LoggingConfig, PerformanceConfig, SecurityConfig,
    SubnetConfig,
};

/// Parse YAML text, degrading to the system default on any failure or when
/// no server section can be recovered.
pub fn parse_yaml(text: &str) -> DhcpConfig {
    match try_parse_yaml(text) {
        Ok(config) if config.dhcp.is_some() => config,
        _ => DhcpConfig::system_default(),
    }
}

/// Strict variant of [`parse_yaml`]; same two-pass strategy as
/// [`crate::json::try_parse_json`].
pub fn try_parse_yaml(text: &str) -> Result<DhcpConfig, ParseError> {
    let config: DhcpConfig = serde_yaml::from_str(text)?;
    if config.dhcp.is_some() {
        return Ok(config);
    }

    let doc: serde_yaml::Value = serde_yaml::from_str(text)?;
    let root = serde_json::to_value(&doc)?;
    match detect_schema(&root) {
        SchemaFlavor::LegacyServer | SchemaFlavor::LegacyFlat => Ok(convert_legacy(&root)),
        SchemaFlavor::Canonical | SchemaFlavor::Unknown => Ok(config),
    }
}

/// Serialize the canonical model as YAML, nulls omitted.
pub fn to_yaml_string(config: &DhcpConfig) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(config)
}

/// Unlike the JSON pass, a sub-tree here that fails its typed decode is
/// skipped rather than failing the conversion, leaving that key at its
/// default.
fn convert_legacy(root: &Value) -> DhcpConfig {
    let mut section = DhcpSection {
        subnets: Some(Vec::new()),
        global_options: Some(Vec::new()),
        security: Some(SecurityConfig::default()),
        performance: Some(PerformanceConfig::default()),
        logging: Some(LoggingConfig::default()),
        ..DhcpSection::default()
    };

    let listen = match root.get("server") {
        Some(server) => server.get("listen_addresses"),
        None => root.get("listen_addresses"),
    };
    if let Some(listen) = listen {
        if let Ok(listen) = serde_json::from_value::<Vec<String>>(listen.clone()) {
            section.listen = Some(listen);
        }
    }

    if let Some(subnets) = root.get("subnets") {
        if let Ok(subnets) = serde_json::from_value::<Vec<SubnetConfig>>(subnets.clone()) {
            section.subnets = Some(subnets);
        }
    }
    if let Some(options) = root.get("global_options") {
        if let Ok(options) = serde_json::from_value::<Vec<DhcpOption>>(options.clone()) {
            section.global_options = Some(options);
        }
    }

    DhcpConfig {
        dhcp: Some(section),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_canonical_document() {
        let text = "\
dhcp:
  listen:
    - 0.0.0.0:67
  subnets:
    - name: lan
      network: 192.168.1.0
      rangeStart: 192.168.1.100
      rangeEnd: 192.168.1.200
      gateway: 192.168.1.1
";
        let config = try_parse_yaml(text).expect("parse");
        let dhcp = config.dhcp.expect("dhcp");
        assert_eq!(dhcp.listen, Some(vec!["0.0.0.0:67".to_string()]));
        let subnets = dhcp.subnets.expect("subnets");
        assert_eq!(subnets[0].gateway.as_deref(), Some("192.168.1.1"));
    }

    #[test]
    fn converts_legacy_server_root() {
        let text = "\
server:
  listen_addresses:
    - 10.0.0.1:67
subnets:
  - name: lan
    network: 10.0.0.0
global_options:
  - code: 15
    name: DOMAIN_NAME
    value: example.com
";
        let config = try_parse_yaml(text).expect("parse");
        let dhcp = config.dhcp.expect("dhcp");
        assert_eq!(dhcp.listen, Some(vec!["10.0.0.1:67".to_string()]));
        assert_eq!(dhcp.subnets.as_ref().map(Vec::len), Some(1));
        let options = dhcp.global_options.expect("options");
        assert_eq!(options[0].effective_value(), Some("example.com"));
    }

    #[test]
    fn legacy_pass_ignores_security_section() {
        // The legacy YAML generation never carried a convertible security
        // block; a present one is left at the default rather than mapped.
        let text = "\
listen_addresses:
  - 0.0.0.0:67
security:
  enable: true
";
        let config = try_parse_yaml(text).expect("parse");
        let dhcp = config.dhcp.expect("dhcp");
        assert_eq!(dhcp.security, Some(SecurityConfig::default()));
    }

    #[test]
    fn malformed_input_degrades_to_default() {
        let config = parse_yaml("{unclosed");
        assert_eq!(config, DhcpConfig::system_default());
    }

    #[test]
    fn round_trips_canonical_fields() {
        let source = parse_yaml(
            "\
dhcp:
  listen:
    - 0.0.0.0:67
  enableSecurity: true
  security:
    enable: true
    macFiltering:
      enabled: true
      mode: allow
      rules:
        - macAddress: aa:bb:cc:dd:ee:ff
          allow: true
  subnets:
    - name: lan
      network: 192.168.1.0
      range: 192.168.1.100-192.168.1.200
",
        );
        let text = to_yaml_string(&source).expect("serialize");
        let reparsed = try_parse_yaml(&text).expect("reparse");
        assert_eq!(source, reparsed);
    }
}
