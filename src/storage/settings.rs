//! Settings storage
//!
//! Manages persistence of the estimator thresholds.

use crate::storage::{get_config_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Estimator settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorSettings {
    /// Memory kept aside for the OS and browser before comparing (MB)
    #[serde(default = "default_memory_reserve_mb")]
    pub memory_reserve_mb: f64,
    /// Cores needed to run small quantized models without a GPU
    #[serde(default = "default_cpu_fallback_min_cores")]
    pub cpu_fallback_min_cores: u32,
    /// Largest model (billions of parameters) eligible for the CPU fallback
    #[serde(default = "default_cpu_fallback_max_params_b")]
    pub cpu_fallback_max_params_b: f64,
    /// Total memory assumed when the host probe cannot read it (MB)
    #[serde(default = "default_fallback_memory_mb")]
    pub fallback_memory_mb: f64,
    /// Core count assumed when the host probe cannot read it
    #[serde(default = "default_fallback_cores")]
    pub fallback_cores: u32,
}

fn default_memory_reserve_mb() -> f64 {
    2048.0
}

fn default_cpu_fallback_min_cores() -> u32 {
    8
}

fn default_cpu_fallback_max_params_b() -> f64 {
    3.0
}

fn default_fallback_memory_mb() -> f64 {
    8192.0
}

fn default_fallback_cores() -> u32 {
    4
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        Self {
            memory_reserve_mb: default_memory_reserve_mb(),
            cpu_fallback_min_cores: default_cpu_fallback_min_cores(),
            cpu_fallback_max_params_b: default_cpu_fallback_max_params_b(),
            fallback_memory_mb: default_fallback_memory_mb(),
            fallback_cores: default_fallback_cores(),
        }
    }
}

impl EstimatorSettings {
    /// Validate settings values
    ///
    /// Replaces values that are not finite, negative or zero where a
    /// positive value is needed with their defaults.
    pub fn validate(&mut self) {
        if !is_non_negative(self.memory_reserve_mb) {
            tracing::warn!(
                "Invalid memory reserve {}, using {} MB",
                self.memory_reserve_mb,
                default_memory_reserve_mb()
            );
            self.memory_reserve_mb = default_memory_reserve_mb();
        }

        if self.cpu_fallback_min_cores == 0 {
            self.cpu_fallback_min_cores = 1;
        }

        if !is_non_negative(self.cpu_fallback_max_params_b) {
            tracing::warn!(
                "Invalid CPU fallback size {}, using {}B",
                self.cpu_fallback_max_params_b,
                default_cpu_fallback_max_params_b()
            );
            self.cpu_fallback_max_params_b = default_cpu_fallback_max_params_b();
        }

        if !is_non_negative(self.fallback_memory_mb) || self.fallback_memory_mb == 0.0 {
            self.fallback_memory_mb = default_fallback_memory_mb();
        }

        if self.fallback_cores == 0 {
            self.fallback_cores = default_fallback_cores();
        }
    }
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// Default settings file path
pub fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_config_dir()?.join("settings.json"))
}

/// Load settings from the default location
///
/// Returns default settings if the file doesn't exist or is corrupted
pub fn load_settings() -> EstimatorSettings {
    match get_settings_path() {
        Ok(path) => load_settings_from(&path),
        Err(e) => {
            tracing::warn!("Failed to locate settings, using defaults: {}", e);
            EstimatorSettings::default()
        }
    }
}

/// Load settings from a specific file, falling back to defaults
pub fn load_settings_from(path: &Path) -> EstimatorSettings {
    match load_settings_internal(path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            EstimatorSettings::default()
        }
    }
}

/// Internal settings loading with error propagation
fn load_settings_internal(path: &Path) -> Result<EstimatorSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(EstimatorSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: EstimatorSettings = serde_json::from_str(&json)?;
    settings.validate();

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Save settings to a file
pub fn save_settings_to(path: &Path, settings: &EstimatorSettings) -> Result<(), StorageError> {
    // Ensure the parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

/// Save settings to the default location
pub fn save_settings(settings: &EstimatorSettings) -> Result<(), StorageError> {
    save_settings_to(&get_settings_path()?, settings)
}
