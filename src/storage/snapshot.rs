//! Capability snapshot files
//!
//! Reads snapshots written by an external probe (for example a browser
//! front end) and publishes their JSON Schema.

use crate::storage::StorageError;
use crate::types::SystemCapabilities;
use std::fs;
use std::path::Path;

/// Load and validate a snapshot file
pub fn load_snapshot(path: &Path) -> Result<SystemCapabilities, StorageError> {
    let json = fs::read_to_string(path)?;
    let caps = parse_snapshot(&json)?;
    tracing::debug!("Loaded capability snapshot from {}", path.display());
    Ok(caps)
}

/// Parse and validate a snapshot from JSON text
pub fn parse_snapshot(json: &str) -> Result<SystemCapabilities, StorageError> {
    let caps: SystemCapabilities = serde_json::from_str(json)?;
    caps.validate()?;
    Ok(caps)
}

/// Write a snapshot file
pub fn save_snapshot(path: &Path, caps: &SystemCapabilities) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(caps)?)?;
    Ok(())
}

/// JSON Schema of the snapshot format
pub fn snapshot_schema() -> serde_json::Value {
    let schema = schemars::schema_for!(SystemCapabilities);
    serde_json::to_value(schema).unwrap_or_default()
}
