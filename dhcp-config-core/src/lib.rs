//! Configuration model, codecs, and validation for simple-dhcpd.
//!
//! simple-dhcpd reads its configuration from JSON, YAML, or INI files, and
//! two generations of the on-disk schema are in circulation. This library
//! normalizes all of them into one canonical in-memory model and turns that
//! model back into any of the three formats.
//!
//! # Architecture
//!
//! ## Model
//!
//! - [`model`] — the canonical configuration tree ([`DhcpConfig`] down to
//!   subnets, options, reservations, and the security/performance/logging/
//!   monitoring sub-sections). Plain mutable data; the only behavior is the
//!   pair of accessors that reconcile the two on-disk spellings of a subnet
//!   range and of an option value.
//! - [`catalog`] — static table of standard DHCP option codes with value
//!   hints and examples, for editors and reporting.
//!
//! ## Codecs
//!
//! - [`json`], [`yaml`] — canonical decode with a legacy-schema conversion
//!   pass. Detection of the schema generation happens once, in [`detect`].
//! - [`ini`] — line-oriented parse and hand-built emission of the narrow
//!   INI surface (server basics plus core subnet fields).
//!
//! Parsing is deliberately lenient: the `parse_*` entry points never fail,
//! degrading to [`DhcpConfig::system_default`] so an editor always has
//! something to show. The `try_parse_*` variants expose strict behavior.
//!
//! ## Validation
//!
//! - [`validate`](mod@validate) — walks a model and returns a
//!   [`ValidationReport`] of errors and warnings. Data, never an exception;
//!   warnings never affect validity.
//!
//! ## Service
//!
//! - [`service`] — extension dispatch, content sniffing for unknown
//!   extensions, listen-alias normalization, and the save pipeline with its
//!   privilege gate.
//! - [`privilege`] — classifies destinations that need an elevated writer.
//!
//! # Example
//!
//! ```ignore
//! use dhcp_config_core::{load_configuration, validate, save_configuration};
//!
//! let mut config = load_configuration("/etc/simple-dhcpd/simple-dhcpd.conf");
//! let report = validate(&config);
//! println!("{}", report.summary());
//!
//! config.dhcp.as_mut().unwrap().max_leases = Some(1000);
//! save_configuration(&config, "/tmp/simple-dhcpd.json")?;
//! ```

pub mod catalog;
pub mod detect;
pub mod error;
pub mod ini;
pub mod json;
pub mod model;
pub mod privilege;
pub mod service;
pub mod validate;
pub mod yaml;

pub use error::{ParseError, SaveError};
pub use model::{
    DhcpConfig, DhcpOption, DhcpSection, Exclusion, Reservation, SubnetConfig,
};
pub use service::{
    default_config_path, load_configuration, save_configuration, serialize_configuration,
};
pub use validate::{validate, ValidationReport};
