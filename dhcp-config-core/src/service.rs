//! Load/save orchestration.
//!
//! Dispatches on file extension, falls back to content sniffing for unknown
//! extensions, reconciles the legacy listen alias after every parse, and
//! gates writes on the privilege classifier. Loading never fails: anything
//! that goes wrong between reading bytes and producing a model degrades to
//! [`DhcpConfig::system_default`] so callers always get something editable.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ParseError, SaveError};
use crate::ini;
use crate::json;
use crate::model::DhcpConfig;
use crate::privilege;
use crate::yaml;

/// Load a configuration file. A missing file, unreadable bytes, or an
/// unparsable document all yield the system default.
pub fn load_configuration(path: impl AsRef<Path>) -> DhcpConfig {
    let path = path.as_ref();
    let Ok(text) = fs::read_to_string(path) else {
        return DhcpConfig::system_default();
    };

    let mut config = match extension_of(path).as_deref() {
        Some("json") => json::parse_json(&text),
        Some("yaml") | Some("yml") => yaml::parse_yaml(&text),
        Some("ini") | Some("conf") => ini::parse_ini(&text),
        _ => try_auto_detect(&text).unwrap_or_else(|_| DhcpConfig::system_default()),
    };

    if config.dhcp.is_none() {
        return DhcpConfig::system_default();
    }

    normalize_listen_alias(&mut config);
    config
}

/// Copy the legacy `listen_addresses` alias into the canonical `listen`
/// field when only the alias was populated. The canonical field wins when
/// both are present. This is the single place alias reconciliation happens.
pub fn normalize_listen_alias(config: &mut DhcpConfig) {
    if let Some(dhcp) = config.dhcp.as_mut() {
        if dhcp.listen.is_none() && dhcp.listen_addresses.is_some() {
            dhcp.listen = dhcp.listen_addresses.clone();
        }
    }
}

/// Content sniffing for unknown extensions: strict JSON, then strict YAML,
/// then INI. INI accepts any text, so in practice it is the catch-all; the
/// error arm is kept for contract completeness.
pub fn try_auto_detect(text: &str) -> Result<DhcpConfig, ParseError> {
    if let Ok(config) = json::try_parse_json(text) {
        return Ok(config);
    }
    if let Ok(config) = yaml::try_parse_yaml(text) {
        return Ok(config);
    }
    if let Ok(config) = ini::try_parse_ini(text) {
        return Ok(config);
    }
    Err(ParseError::UnrecognizedFormat)
}

/// Serialize and write `config` to `path`, creating missing parent
/// directories. Fails fast with [`SaveError::RequiresElevation`] before
/// touching the filesystem when the destination is privilege-protected.
pub fn save_configuration(config: &DhcpConfig, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    if privilege::requires_elevation(path) {
        return Err(SaveError::RequiresElevation {
            path: path.to_path_buf(),
        });
    }

    let content = serialize_configuration(config, path)?;

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Serialize `config` in the format implied by the destination extension
/// (JSON for anything unrecognized) without touching the filesystem, so an
/// elevated-write collaborator can obtain the exact bytes to install.
pub fn serialize_configuration(
    config: &DhcpConfig,
    path: impl AsRef<Path>,
) -> Result<String, SaveError> {
    match extension_of(path.as_ref()).as_deref() {
        Some("yaml") | Some("yml") => Ok(yaml::to_yaml_string(config)?),
        Some("ini") | Some("conf") => Ok(ini::to_ini_string(config)),
        _ => Ok(json::to_json_string(config)?),
    }
}

/// Platform default location of the simple-dhcpd configuration file. Pure
/// function of the host platform; performs no I/O beyond an existence probe
/// for `/etc`.
pub fn default_config_path() -> PathBuf {
    platform_default_path()
}

#[cfg(target_os = "windows")]
fn platform_default_path() -> PathBuf {
    let base = std::env::var_os("PROGRAMDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\ProgramData"));
    base.join("Simple DHCP Daemon").join("simple-dhcpd.conf")
}

#[cfg(target_os = "macos")]
fn platform_default_path() -> PathBuf {
    PathBuf::from("/usr/local/etc/simple-dhcpd/simple-dhcpd.conf")
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn platform_default_path() -> PathBuf {
    if Path::new("/etc").is_dir() {
        return PathBuf::from("/etc/simple-dhcpd/simple-dhcpd.conf");
    }
    let base = std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".config"))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("simple-dhcpd").join("simple-dhcpd.conf")
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}
