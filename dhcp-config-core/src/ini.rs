//! INI codec: line-oriented parse and hand-built emission.
//!
//! The INI surface is deliberately narrow: server basics plus the core
//! subnet fields. Security, performance, logging, monitoring, options,
//! reservations, and exclusions have no INI representation, so INI
//! round-trips are lossy outside that core.

use crate::error::ParseError;
use crate::model::{
    DhcpConfig, DhcpSection, LoggingConfig, PerformanceConfig, SecurityConfig, SubnetConfig,
};

/// Parse INI text. Accepts any input: unrecognized sections and keys are
/// ignored and malformed scalar values leave the field unchanged.
pub fn parse_ini(text: &str) -> DhcpConfig {
    let mut section = DhcpSection {
        listen: Some(Vec::new()),
        subnets: Some(Vec::new()),
        global_options: Some(Vec::new()),
        security: Some(SecurityConfig::default()),
        performance: Some(PerformanceConfig::default()),
        logging: Some(LoggingConfig::default()),
        ..DhcpSection::default()
    };

    let mut current_section: Option<String> = None;
    let mut current_subnet: Option<SubnetConfig> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        if let Some(name) = trimmed
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            if let Some(subnet) = current_subnet.take() {
                section.subnets.get_or_insert_with(Vec::new).push(subnet);
            }
            current_section = Some(name.to_string());
            if let Some(subnet_name) = name.strip_prefix("subnet:") {
                current_subnet = Some(SubnetConfig {
                    name: Some(subnet_name.to_string()),
                    options: Some(Vec::new()),
                    reservations: Some(Vec::new()),
                    exclusions: Some(Vec::new()),
                    ..SubnetConfig::default()
                });
            }
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if let Some(subnet) = current_subnet.as_mut() {
            apply_subnet_key(subnet, key, value);
        } else if current_section.as_deref() == Some("server") {
            apply_server_key(&mut section, key, value);
        }
    }

    if let Some(subnet) = current_subnet.take() {
        section.subnets.get_or_insert_with(Vec::new).push(subnet);
    }

    DhcpConfig {
        dhcp: Some(section),
    }
}

/// Strict variant for auto-detection symmetry. INI parsing accepts any
/// input, so this cannot fail; it exists so the format trio shares one
/// calling convention.
pub fn try_parse_ini(text: &str) -> Result<DhcpConfig, ParseError> {
    Ok(parse_ini(text))
}

fn apply_server_key(section: &mut DhcpSection, key: &str, value: &str) {
    match key {
        "listen_addresses" => section.listen = Some(split_csv(value)),
        "enable_logging" => {
            if let Some(flag) = parse_bool(value) {
                section.enable_logging = Some(flag);
            }
        }
        "enable_security" => {
            if let Some(flag) = parse_bool(value) {
                section.enable_security = Some(flag);
            }
        }
        "max_leases" => {
            if let Ok(max_leases) = value.parse::<u32>() {
                section.max_leases = Some(max_leases);
            }
        }
        _ => {}
    }
}

fn apply_subnet_key(subnet: &mut SubnetConfig, key: &str, value: &str) {
    match key {
        "name" => subnet.name = Some(value.to_string()),
        "network" => subnet.network = Some(value.to_string()),
        "prefix_length" => {
            if let Ok(prefix_length) = value.parse::<u8>() {
                subnet.prefix_length = Some(prefix_length);
            }
        }
        "range_start" => subnet.range_start = Some(value.to_string()),
        "range_end" => subnet.range_end = Some(value.to_string()),
        "gateway" => subnet.gateway = Some(value.to_string()),
        "dns_servers" => subnet.dns_servers = Some(split_csv(value)),
        "domain_name" => subnet.domain_name = Some(value.to_string()),
        "lease_time" => {
            if let Ok(lease_time) = value.parse::<u32>() {
                subnet.lease_time = Some(lease_time);
            }
        }
        "max_lease_time" => {
            if let Ok(max_lease_time) = value.parse::<u32>() {
                subnet.max_lease_time = Some(max_lease_time);
            }
        }
        _ => {}
    }
}

fn split_csv(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Emit the server basics and per-subnet core fields in a fixed order,
/// skipping anything unset. Range endpoints come from the unified accessor
/// so a combined-form range still writes split keys.
pub fn to_ini_string(config: &DhcpConfig) -> String {
    let mut lines = vec![
        "# Simple DHCP Daemon configuration".to_string(),
        String::new(),
        "[server]".to_string(),
    ];

    if let Some(dhcp) = config.dhcp.as_ref() {
        if let Some(listen) = dhcp.listen.as_ref().filter(|listen| !listen.is_empty()) {
            lines.push(format!("listen_addresses = {}", listen.join(",")));
        }
        if let Some(enable_logging) = dhcp.enable_logging {
            lines.push(format!("enable_logging = {enable_logging}"));
        }
        if let Some(enable_security) = dhcp.enable_security {
            lines.push(format!("enable_security = {enable_security}"));
        }
        if let Some(max_leases) = dhcp.max_leases {
            lines.push(format!("max_leases = {max_leases}"));
        }

        for subnet in dhcp.subnets.iter().flatten() {
            let name = subnet.name.as_deref().unwrap_or("");
            lines.push(String::new());
            lines.push(format!("[subnet:{name}]"));
            lines.push(format!("name = {name}"));
            if let Some(network) = non_empty(&subnet.network) {
                lines.push(format!("network = {network}"));
            }
            if let Some(prefix_length) = subnet.prefix_length {
                lines.push(format!("prefix_length = {prefix_length}"));
            }
            if let Some((start, end)) = subnet.range_endpoints() {
                lines.push(format!("range_start = {start}"));
                lines.push(format!("range_end = {end}"));
            }
            if let Some(gateway) = non_empty(&subnet.gateway) {
                lines.push(format!("gateway = {gateway}"));
            }
            if let Some(dns) = subnet.dns_servers.as_ref().filter(|dns| !dns.is_empty()) {
                lines.push(format!("dns_servers = {}", dns.join(",")));
            }
            if let Some(domain_name) = non_empty(&subnet.domain_name) {
                lines.push(format!("domain_name = {domain_name}"));
            }
            if let Some(lease_time) = subnet.lease_time {
                lines.push(format!("lease_time = {lease_time}"));
            }
            if let Some(max_lease_time) = subnet.max_lease_time {
                lines.push(format!("max_lease_time = {max_lease_time}"));
            }
        }
    }

    lines.join("\n")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}
