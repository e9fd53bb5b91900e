//! System capability types
//!
//! Snapshot of the machine a model would run on. Produced by a probing
//! collaborator (browser, host probe, snapshot file) and only read here.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GPU capabilities
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GpuCapabilities {
    /// Renderer or adapter name, if known
    #[serde(default)]
    pub name: Option<String>,
    /// Approximate GPU memory in MB, if known
    #[serde(default, rename = "memoryMB")]
    pub memory_mb: Option<f64>,
    /// Whether an accelerated inference path is available
    #[serde(default, alias = "isWebGPUEnabled")]
    pub webgpu_enabled: bool,
}

/// CPU capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CpuCapabilities {
    pub cores: u32,
    #[serde(default)]
    pub hardware_concurrency: u32,
}

/// System memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MemoryCapabilities {
    #[serde(rename = "totalMB")]
    pub total_mb: f64,
}

/// Full capability snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SystemCapabilities {
    #[serde(default)]
    pub gpu: GpuCapabilities,
    pub cpu: CpuCapabilities,
    pub memory: MemoryCapabilities,
}

/// Errors raised when a snapshot breaks its numeric invariants
#[derive(Debug, Error, PartialEq)]
pub enum CapabilitiesError {
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidNumber { field: &'static str, value: f64 },
    #[error("memory.totalMB must be positive")]
    NoMemory,
    #[error("cpu.cores must be at least 1")]
    NoCores,
}

impl SystemCapabilities {
    /// Build a snapshot from plain values
    pub fn new(total_memory_mb: f64, cores: u32, gpu: GpuCapabilities) -> Self {
        Self {
            gpu,
            cpu: CpuCapabilities {
                cores,
                hardware_concurrency: cores,
            },
            memory: MemoryCapabilities {
                total_mb: total_memory_mb,
            },
        }
    }

    /// Check the numeric invariants of the snapshot.
    ///
    /// Absent values are fine; present ones must be finite and non-negative.
    pub fn validate(&self) -> Result<(), CapabilitiesError> {
        check_number("memory.totalMB", self.memory.total_mb)?;
        if self.memory.total_mb <= 0.0 {
            return Err(CapabilitiesError::NoMemory);
        }

        if let Some(gpu_memory) = self.gpu.memory_mb {
            check_number("gpu.memoryMB", gpu_memory)?;
        }

        if self.cpu.cores == 0 {
            return Err(CapabilitiesError::NoCores);
        }

        Ok(())
    }
}

fn check_number(field: &'static str, value: f64) -> Result<(), CapabilitiesError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(CapabilitiesError::InvalidNumber { field, value })
    }
}
