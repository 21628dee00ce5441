//! Schema-generation detection for untyped configuration documents.
//!
//! Two generations of the on-disk schema exist: the canonical shape rooted at
//! a `dhcp` key, and an older layout that either nests server settings under
//! `server` or spreads them flat across the top level. Detection happens in
//! exactly one place so the JSON and YAML parsers cannot disagree about which
//! conversion to run.

use serde_json::Value;

/// Detected configuration schema generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFlavor {
    /// Current shape: root object with a `dhcp` section.
    Canonical,
    /// Older shape with server settings nested under a `server` object.
    LegacyServer,
    /// Older shape with `listen_addresses`/`subnets` flat at the top level.
    LegacyFlat,
    /// No recognizable marker key.
    Unknown,
}

/// Classify a document root by its marker keys.
pub fn detect_schema(root: &Value) -> SchemaFlavor {
    let Some(map) = root.as_object() else {
        return SchemaFlavor::Unknown;
    };
    if map.contains_key("dhcp") {
        return SchemaFlavor::Canonical;
    }
    if map.contains_key("server") {
        return SchemaFlavor::LegacyServer;
    }
    if map.contains_key("listen_addresses") || map.contains_key("subnets") {
        return SchemaFlavor::LegacyFlat;
    }
    SchemaFlavor::Unknown
}
