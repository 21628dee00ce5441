use serde::{Deserialize, Serialize};

/// Root configuration document.
///
/// A configuration is only complete once [`DhcpConfig::dhcp`] is populated;
/// every field below it is optional at the model level. Required-ness and
/// semantic correctness are enforced by the validator, not here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DhcpConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp: Option<DhcpSection>,
}

impl DhcpConfig {
    /// The configuration every failed or missing load degrades to: one
    /// listen endpoint `0.0.0.0:67`, empty collections, default-constructed
    /// sub-sections. Callers always receive something editable.
    pub fn system_default() -> Self {
        Self {
            dhcp: Some(DhcpSection {
                listen: Some(vec!["0.0.0.0:67".to_string()]),
                subnets: Some(Vec::new()),
                global_options: Some(Vec::new()),
                security: Some(SecurityConfig::default()),
                performance: Some(PerformanceConfig::default()),
                logging: Some(LoggingConfig::default()),
                ..DhcpSection::default()
            }),
        }
    }
}

/// Main configuration container: server settings, subnets, global options,
/// and the security/performance/logging/monitoring sub-sections.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DhcpSection {
    /// Endpoints the server listens on, as `"ip:port"` strings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen: Option<Vec<String>>,
    /// Alternate key for [`DhcpSection::listen`] kept for compatibility with
    /// older documents. When both are present, `listen` wins; the service
    /// reconciles the two after every parse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listen_addresses: Option<Vec<String>>,
    /// Global port override. When unset, the per-endpoint port applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnets: Option<Vec<SubnetConfig>>,
    /// Options applied to all clients regardless of subnet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global_options: Option<Vec<DhcpOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub performance: Option<PerformanceConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<LoggingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring: Option<MonitoringConfig>,
    /// Override for the default configuration file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    /// Lease database file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_security: Option<bool>,
    /// Ceiling on concurrent leases across all subnets. Unset means no limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_leases: Option<u32>,
}

/// One network segment with its address range, routing data, and owned
/// options, reservations, and exclusions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubnetConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Assignable range as a combined `"start-end"` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,
    /// Split form of the range; reconciled with `range` by
    /// [`SubnetConfig::range_string`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_length: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_servers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_name: Option<String>,
    /// Default lease duration in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lease_time: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<DhcpOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservations: Option<Vec<Reservation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusions: Option<Vec<Exclusion>>,
}

impl SubnetConfig {
    /// Resolve the range in its unified `"start-end"` form.
    ///
    /// Prefers the combined `range` string, falls back to synthesizing one
    /// from the split fields, and yields an empty string when neither form
    /// is present. Every range read in the crate goes through here so the
    /// two on-disk forms cannot drift apart in interpretation.
    pub fn range_string(&self) -> String {
        if let Some(range) = self.range.as_deref().filter(|r| !r.trim().is_empty()) {
            return range.to_string();
        }
        match (self.range_start.as_deref(), self.range_end.as_deref()) {
            (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
                format!("{start}-{end}")
            }
            _ => String::new(),
        }
    }

    /// Resolve the range into its two endpoints, when the unified form
    /// splits cleanly into exactly two parts.
    pub fn range_endpoints(&self) -> Option<(String, String)> {
        let range = self.range_string();
        let mut parts = range.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => {
                Some((start.trim().to_string(), end.trim().to_string()))
            }
            _ => None,
        }
    }
}

/// A DHCP protocol option: numeric code, canonical name, and a value.
///
/// The value may arrive under either of two key names (`value` in current
/// documents, `data` in older ones). The pair is kept synchronized through
/// [`DhcpOption::effective_value`] and [`DhcpOption::set_effective_value`];
/// nothing else in the crate reads the raw fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DhcpOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

impl DhcpOption {
    /// The effective value: `value` when set, else `data`.
    pub fn effective_value(&self) -> Option<&str> {
        self.value.as_deref().or(self.data.as_deref())
    }

    /// Set the value under both key names so either schema generation
    /// round-trips it.
    pub fn set_effective_value(&mut self, value: Option<String>) {
        self.value = value.clone();
        self.data = value;
    }
}

/// Static MAC-to-IP binding.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Reservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Address sub-range carved out of a subnet's assignable range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Exclusion {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

/// Security feature toggles and rule lists. Disabled by default.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dhcp_snooping: Option<DhcpSnoopingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_filtering: Option<MacFilteringConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_filtering: Option<IpFilteringConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limiting: Option<RateLimitingConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option82: Option<Option82Config>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<AuthenticationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_events: Option<SecurityEventsConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DhcpSnoopingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_interfaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MacFilteringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// `allow` or `deny`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<MacFilterRule>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MacFilterRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpFilteringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<IpFilterRule>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IpFilterRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<RateLimitRule>>,
}

/// Request-rate ceiling for one client identifier over a time window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RateLimitRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_requests: Option<u32>,
    /// Window length in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_window: Option<u32>,
    /// How long to block an offender, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Relay-agent information (Option 82) validation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Option82Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<Option82Rule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted_relay_agents: Option<Vec<TrustedRelayAgent>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Option82Rule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrustedRelayAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub circuit_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthenticationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Shared key for client authentication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<Vec<ClientCredential>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientCredential {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// Security-event logging and retention policy.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SecurityEventsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_logging: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_callback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PerformanceConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_leases: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lease_database: Option<LeaseDatabaseConfig>,
}

/// Lease database backend descriptor.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LeaseDatabaseConfig {
    /// Backend type, e.g. `file` or `sqlite`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub db_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<bool>,
    /// Backup interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_interval: Option<u32>,
    /// Number of backups to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_retention: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<bool>,
    /// Size threshold that triggers rotation, e.g. `10MB`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
}

/// Metrics and health-check configuration. Carried by the model and the
/// JSON/YAML codecs; no validation rules apply to it yet.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonitoringConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<MetricsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_checks: Option<HealthChecksConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MetricsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_metrics: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_metrics: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthChecksConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<Vec<HealthCheck>>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}
