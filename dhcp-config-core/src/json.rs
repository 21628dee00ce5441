//! JSON codec: canonical decode with a legacy-schema conversion pass.

use serde_json::Value;

use crate::detect::{detect_schema, SchemaFlavor};
use crate::error::ParseError;
use crate::model::{
    DhcpConfig, DhcpOption, DhcpSection, LoggingConfig, PerformanceConfig, SecurityConfig,
    SubnetConfig,
};

/// Parse JSON text, degrading to the system default on any failure or when
/// no server section can be recovered.
pub fn parse_json(text: &str) -> DhcpConfig {
    match try_parse_json(text) {
        Ok(config) if config.dhcp.is_some() => config,
        _ => DhcpConfig::system_default(),
    }
}

/// Strict variant of [`parse_json`].
///
/// A canonical document decodes directly. A document that decodes but lacks
/// the `dhcp` section is re-read untyped and converted when a legacy flavor
/// is detected. Valid JSON matching neither generation yields an empty
/// configuration, which the lenient wrapper and the service treat as a
/// failed parse.
pub fn try_parse_json(text: &str) -> Result<DhcpConfig, ParseError> {
    let config: DhcpConfig = serde_json::from_str(text)?;
    if config.dhcp.is_some() {
        return Ok(config);
    }

    let root: Value = serde_json::from_str(text)?;
    match detect_schema(&root) {
        SchemaFlavor::LegacyServer | SchemaFlavor::LegacyFlat => convert_legacy(&root),
        SchemaFlavor::Canonical | SchemaFlavor::Unknown => Ok(config),
    }
}

/// Serialize the canonical model as indented JSON, nulls omitted.
pub fn to_json_string(config: &DhcpConfig) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(config)
}

/// Map a legacy document into a canonical section, one key at a time. Keys
/// absent in the legacy document keep their defaults.
fn convert_legacy(root: &Value) -> Result<DhcpConfig, ParseError> {
    let mut section = DhcpSection {
        subnets: Some(Vec::new()),
        global_options: Some(Vec::new()),
        security: Some(SecurityConfig::default()),
        performance: Some(PerformanceConfig::default()),
        logging: Some(LoggingConfig::default()),
        ..DhcpSection::default()
    };

    // `listen_addresses` sits under `server` in the nested layout and at the
    // top level in the flat one. A present `server` object claims the key;
    // the flat spelling is only consulted when there is no `server` at all.
    let listen = match root.get("server") {
        Some(server) => server.get("listen_addresses"),
        None => root.get("listen_addresses"),
    };
    if let Some(listen) = listen {
        section.listen = Some(serde_json::from_value::<Vec<String>>(listen.clone())?);
    }

    if let Some(subnets) = root.get("subnets") {
        section.subnets = Some(serde_json::from_value::<Vec<SubnetConfig>>(subnets.clone())?);
    }
    if let Some(options) = root.get("global_options") {
        section.global_options = Some(serde_json::from_value::<Vec<DhcpOption>>(options.clone())?);
    }
    if let Some(security) = root.get("security") {
        section.security = Some(serde_json::from_value::<SecurityConfig>(security.clone())?);
    }
    if let Some(logging) = root.get("logging") {
        section.logging = Some(serde_json::from_value::<LoggingConfig>(logging.clone())?);
    }

    Ok(DhcpConfig {
        dhcp: Some(section),
    })
}
