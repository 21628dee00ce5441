//! Structural and semantic validation of a configuration.
//!
//! Validation never blocks anything: the result is data. Errors mark a
//! configuration the server would reject or misbehave on; warnings flag
//! likely mistakes that are still loadable. Only errors affect validity.

use std::collections::HashSet;
use std::net::IpAddr;

use serde::Serialize;

use crate::model::{DhcpConfig, DhcpSection, SubnetConfig};

/// Outcome of a validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub valid: bool,
}

impl ValidationReport {
    /// One-line rollup for display.
    pub fn summary(&self) -> String {
        if self.valid && self.warnings.is_empty() {
            return "✓ Configuration is valid".to_string();
        }
        let mut parts = Vec::new();
        if !self.errors.is_empty() {
            parts.push(format!("✗ {} error(s)", self.errors.len()));
        }
        if !self.warnings.is_empty() {
            parts.push(format!("⚠ {} warning(s)", self.warnings.len()));
        }
        parts.join(", ")
    }
}

/// Validate a configuration. Rules run in a fixed order; a missing server
/// section is fatal and short-circuits everything else.
pub fn validate(config: &DhcpConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(dhcp) = config.dhcp.as_ref() else {
        report
            .errors
            .push("Configuration is missing DHCP section".to_string());
        return report;
    };

    check_listen_endpoints(dhcp, &mut report);
    check_subnets(dhcp, &mut report);
    check_global_options(dhcp, &mut report);
    check_security(dhcp, &mut report);
    check_performance(dhcp, &mut report);

    report.valid = report.errors.is_empty();
    report
}

fn check_listen_endpoints(dhcp: &DhcpSection, report: &mut ValidationReport) {
    let Some(listen) = dhcp.listen.as_ref().filter(|listen| !listen.is_empty()) else {
        report
            .errors
            .push("No listen addresses configured".to_string());
        return;
    };

    for address in listen {
        if address.trim().is_empty() {
            report.errors.push("Empty listen address found".to_string());
            continue;
        }

        let parts: Vec<&str> = address.split(':').collect();
        if parts.len() != 2 {
            report.errors.push(format!(
                "Invalid listen address format: {address} (expected IP:Port)"
            ));
            continue;
        }

        if parts[0].parse::<IpAddr>().is_err() {
            report.errors.push(format!(
                "Invalid IP address in listen address: {}",
                parts[0]
            ));
        }

        match parts[1].parse::<u32>() {
            Ok(port) if (1..=65535).contains(&port) => {}
            _ => report.errors.push(format!(
                "Invalid port in listen address: {} (must be 1-65535)",
                parts[1]
            )),
        }
    }
}

fn check_subnets(dhcp: &DhcpSection, report: &mut ValidationReport) {
    let Some(subnets) = dhcp.subnets.as_ref().filter(|subnets| !subnets.is_empty()) else {
        report.warnings.push("No subnets configured".to_string());
        return;
    };

    let mut seen_names = HashSet::new();

    for subnet in subnets {
        let name = subnet.name.as_deref().unwrap_or("");
        if name.trim().is_empty() {
            report
                .errors
                .push("Subnet with empty name found".to_string());
        } else if !seen_names.insert(name.to_string()) {
            report.errors.push(format!("Duplicate subnet name: {name}"));
        }

        match subnet.network.as_deref().filter(|n| !n.trim().is_empty()) {
            None => report
                .errors
                .push(format!("Subnet '{name}' has no network address")),
            Some(network) if network.parse::<IpAddr>().is_err() => report.errors.push(format!(
                "Subnet '{name}' has invalid network address: {network}"
            )),
            Some(_) => {}
        }

        check_subnet_range(subnet, name, report);

        match subnet.gateway.as_deref().filter(|g| !g.trim().is_empty()) {
            None => report
                .warnings
                .push(format!("Subnet '{name}' has no gateway configured")),
            Some(gateway) if gateway.parse::<IpAddr>().is_err() => report
                .errors
                .push(format!("Subnet '{name}' has invalid gateway: {gateway}")),
            Some(_) => {}
        }

        for dns in subnet.dns_servers.iter().flatten() {
            if dns.parse::<IpAddr>().is_err() {
                report
                    .errors
                    .push(format!("Subnet '{name}' has invalid DNS server: {dns}"));
            }
        }

        if let Some(lease_time) = subnet.lease_time {
            if lease_time < 60 {
                report.warnings.push(format!(
                    "Subnet '{name}' has very short lease time: {lease_time}s"
                ));
            }
        }

        if let (Some(lease_time), Some(max_lease_time)) =
            (subnet.lease_time, subnet.max_lease_time)
        {
            if max_lease_time < lease_time {
                report.errors.push(format!(
                    "Subnet '{name}' max lease time is less than lease time"
                ));
            }
        }
    }
}

fn check_subnet_range(subnet: &SubnetConfig, name: &str, report: &mut ValidationReport) {
    if subnet.range_string().is_empty() {
        report
            .warnings
            .push(format!("Subnet '{name}' has no IP range configured"));
        return;
    }

    // A unified range that does not split into exactly two endpoints is left
    // alone here; only resolvable endpoints are address-checked.
    let Some((start, end)) = subnet.range_endpoints() else {
        return;
    };

    if !start.is_empty() && start.parse::<IpAddr>().is_err() {
        report
            .errors
            .push(format!("Subnet '{name}' has invalid range start: {start}"));
    }
    if !end.is_empty() && end.parse::<IpAddr>().is_err() {
        report
            .errors
            .push(format!("Subnet '{name}' has invalid range end: {end}"));
    }
}

fn check_global_options(dhcp: &DhcpSection, report: &mut ValidationReport) {
    for option in dhcp.global_options.iter().flatten() {
        let name = option.name.as_deref().unwrap_or("");
        if name.trim().is_empty() {
            report
                .warnings
                .push("Global option with empty name found".to_string());
        }

        let value = option.effective_value().unwrap_or("");
        if value.trim().is_empty() {
            report
                .warnings
                .push(format!("Global option '{name}' has empty value"));
        }
    }
}

fn check_security(dhcp: &DhcpSection, report: &mut ValidationReport) {
    let Some(security) = dhcp.security.as_ref() else {
        return;
    };
    if security.enable != Some(true) {
        return;
    }

    if let Some(mac_filtering) = security.mac_filtering.as_ref() {
        if mac_filtering.enabled == Some(true)
            && mac_filtering.rules.as_ref().map_or(true, Vec::is_empty)
        {
            report
                .warnings
                .push("MAC filtering is enabled but no rules are configured".to_string());
        }
    }

    if let Some(ip_filtering) = security.ip_filtering.as_ref() {
        if ip_filtering.enabled == Some(true)
            && ip_filtering.rules.as_ref().map_or(true, Vec::is_empty)
        {
            report
                .warnings
                .push("IP filtering is enabled but no rules are configured".to_string());
        }
    }
}

fn check_performance(dhcp: &DhcpSection, report: &mut ValidationReport) {
    if dhcp.performance.is_none() {
        return;
    }

    if let Some(max_leases) = dhcp.max_leases {
        if max_leases < 10 {
            report
                .warnings
                .push(format!("Max leases is very low: {max_leases}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{
        DhcpOption, IpFilteringConfig, MacFilterRule, MacFilteringConfig, PerformanceConfig,
        SecurityConfig,
    };

    use super::*;

    fn base_config() -> DhcpConfig {
        DhcpConfig::system_default()
    }

    fn with_subnet(subnet: SubnetConfig) -> DhcpConfig {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().subnets = Some(vec![subnet]);
        config
    }

    fn named_subnet(name: &str) -> SubnetConfig {
        SubnetConfig {
            name: Some(name.to_string()),
            network: Some("192.168.1.0".to_string()),
            range: Some("192.168.1.100-192.168.1.200".to_string()),
            gateway: Some("192.168.1.1".to_string()),
            ..SubnetConfig::default()
        }
    }

    #[test]
    fn missing_dhcp_section_is_fatal() {
        let report = validate(&DhcpConfig::default());
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("missing DHCP section"));
    }

    #[test]
    fn default_config_is_valid_with_subnet_warning() {
        let report = validate(&base_config());
        assert!(report.valid);
        assert_eq!(report.warnings, vec!["No subnets configured".to_string()]);
    }

    #[test]
    fn empty_listen_list_is_an_error() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().listen = Some(Vec::new());
        let report = validate(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("No listen addresses configured")));
    }

    #[test]
    fn bad_listen_ip_is_an_error() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().listen = Some(vec!["999.999.999.999:67".to_string()]);
        let report = validate(&config);
        assert!(!report.valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Invalid IP address") && e.contains("999.999.999.999")));
    }

    #[test]
    fn listen_port_must_be_in_range() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().listen = Some(vec![
            "0.0.0.0:0".to_string(),
            "0.0.0.0:70000".to_string(),
            "0.0.0.0:67:extra".to_string(),
        ]);
        let report = validate(&config);
        assert_eq!(
            report
                .errors
                .iter()
                .filter(|e| e.contains("Invalid port"))
                .count(),
            2
        );
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("expected IP:Port")));
    }

    #[test]
    fn listen_errors_do_not_stop_subnet_checks() {
        let mut config = with_subnet(SubnetConfig {
            name: Some("lan".to_string()),
            ..SubnetConfig::default()
        });
        config.dhcp.as_mut().unwrap().listen = Some(vec!["bogus".to_string()]);
        let report = validate(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("has no network address")));
    }

    #[test]
    fn duplicate_subnet_names_are_an_error() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().subnets =
            Some(vec![named_subnet("lan"), named_subnet("lan")]);
        let report = validate(&config);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("Duplicate subnet name: lan")));
    }

    #[test]
    fn missing_range_is_a_warning_not_an_error() {
        let mut subnet = named_subnet("lan");
        subnet.range = None;
        let report = validate(&with_subnet(subnet));
        assert!(report.valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("has no IP range configured")));
    }

    #[test]
    fn unparsable_range_endpoint_is_an_error() {
        let mut subnet = named_subnet("lan");
        subnet.range = Some("192.168.1.100-not-an-ip".to_string());
        let report = validate(&with_subnet(subnet));
        // More than two '-'-separated parts do not resolve to endpoints.
        assert!(report.valid);

        let mut subnet = named_subnet("lan");
        subnet.range = None;
        subnet.range_start = Some("192.168.1.100".to_string());
        subnet.range_end = Some("nope".to_string());
        let report = validate(&with_subnet(subnet));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("invalid range end: nope")));
    }

    #[test]
    fn short_lease_warns_and_inverted_lease_errors() {
        let mut subnet = named_subnet("lan");
        subnet.lease_time = Some(30);
        let report = validate(&with_subnet(subnet));
        assert!(report.valid);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("very short lease time: 30s")));

        let mut subnet = named_subnet("lan");
        subnet.lease_time = Some(100);
        subnet.max_lease_time = Some(50);
        let report = validate(&with_subnet(subnet));
        assert!(!report.valid);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("max lease time is less than lease time")));
    }

    #[test]
    fn bad_dns_and_gateway_are_errors() {
        let mut subnet = named_subnet("lan");
        subnet.gateway = Some("not-a-gateway".to_string());
        subnet.dns_servers = Some(vec!["8.8.8.8".to_string(), "dns.invalid".to_string()]);
        let report = validate(&with_subnet(subnet));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("invalid gateway: not-a-gateway")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("invalid DNS server: dns.invalid")));
    }

    #[test]
    fn option_with_only_data_set_does_not_warn() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().global_options = Some(vec![DhcpOption {
            code: Some(6),
            name: Some("DNS_SERVERS".to_string()),
            data: Some("8.8.8.8".to_string()),
            ..DhcpOption::default()
        }]);
        let report = validate(&config);
        assert!(!report
            .warnings
            .iter()
            .any(|w| w.contains("has empty value")));
    }

    #[test]
    fn blank_option_fields_warn() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().global_options = Some(vec![DhcpOption::default()]);
        let report = validate(&config);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("empty name")));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("has empty value")));
    }

    #[test]
    fn enabled_filters_without_rules_warn() {
        let mut config = base_config();
        let dhcp = config.dhcp.as_mut().unwrap();
        dhcp.security = Some(SecurityConfig {
            enable: Some(true),
            mac_filtering: Some(MacFilteringConfig {
                enabled: Some(true),
                ..MacFilteringConfig::default()
            }),
            ip_filtering: Some(IpFilteringConfig {
                enabled: Some(true),
                rules: Some(Vec::new()),
                ..IpFilteringConfig::default()
            }),
            ..SecurityConfig::default()
        });
        let report = validate(&config);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("MAC filtering is enabled but no rules")));
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("IP filtering is enabled but no rules")));
    }

    #[test]
    fn security_checks_skipped_when_disabled() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().security = Some(SecurityConfig {
            enable: Some(false),
            mac_filtering: Some(MacFilteringConfig {
                enabled: Some(true),
                rules: Some(vec![MacFilterRule::default()]),
                ..MacFilteringConfig::default()
            }),
            ..SecurityConfig::default()
        });
        let report = validate(&config);
        assert!(!report.warnings.iter().any(|w| w.contains("filtering")));
    }

    #[test]
    fn low_max_leases_warns_only_with_performance_section() {
        let mut config = base_config();
        let dhcp = config.dhcp.as_mut().unwrap();
        dhcp.max_leases = Some(5);
        dhcp.performance = Some(PerformanceConfig::default());
        let report = validate(&config);
        assert!(report
            .warnings
            .iter()
            .any(|w| w.contains("Max leases is very low: 5")));

        config.dhcp.as_mut().unwrap().performance = None;
        let report = validate(&config);
        assert!(!report.warnings.iter().any(|w| w.contains("Max leases")));
    }

    #[test]
    fn summary_counts_errors_and_warnings() {
        let mut config = base_config();
        config.dhcp.as_mut().unwrap().listen = Some(vec!["bogus".to_string()]);
        let report = validate(&config);
        assert_eq!(report.summary(), "✗ 1 error(s), ⚠ 1 warning(s)");

        let report = validate(&with_subnet(named_subnet("lan")));
        assert_eq!(report.summary(), "✓ Configuration is valid");
    }
}
