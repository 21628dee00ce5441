use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the strict parse entry points.
///
/// The lenient entry points (`parse_json`, `parse_yaml`, `parse_ini`, and
/// [`crate::service::load_configuration`]) never surface these; they degrade
/// to [`crate::model::DhcpConfig::system_default`] instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Input was not valid JSON, or did not fit the canonical shape.
    #[error("failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Input was not valid YAML, or did not fit the canonical shape.
    #[error("failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// None of the supported formats accepted the input.
    #[error("input matched no supported configuration format")]
    UnrecognizedFormat,
}

/// Errors raised while serializing or writing a configuration.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Destination lies in a privilege-protected location. The caller must
    /// route the write through an elevated helper; no write was attempted.
    #[error("writing to '{}' requires elevated privileges", .path.display())]
    RequiresElevation {
        /// The protected destination.
        path: PathBuf,
    },
    /// Failed to encode the model as JSON.
    #[error("failed to serialize configuration as JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Failed to encode the model as YAML.
    #[error("failed to serialize configuration as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// Failed to create directories or write the output file.
    #[error("failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),
}
