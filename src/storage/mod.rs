//! Persistent storage
//!
//! Estimator settings and capability snapshot files.

pub mod settings;
pub mod snapshot;

use crate::types::CapabilitiesError;
use std::path::PathBuf;
use thiserror::Error;

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not determine the platform configuration directory")]
    NoConfigDir,
    #[error("Invalid capability snapshot: {0}")]
    InvalidSnapshot(#[from] CapabilitiesError),
}

/// Platform configuration directory for the application
pub fn get_config_dir() -> Result<PathBuf, StorageError> {
    directories::ProjectDirs::from("com", "ModelTier", "modeltier")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(StorageError::NoConfigDir)
}
