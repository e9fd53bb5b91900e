//! Resource requirement types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device a model should preferably run on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PreferredDevice {
    Gpu,
    Cpu,
}

impl fmt::Display for PreferredDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreferredDevice::Gpu => f.write_str("GPU"),
            PreferredDevice::Cpu => f.write_str("CPU"),
        }
    }
}

/// Memory and device needs of a model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRequirements {
    #[serde(rename = "minMemoryMB")]
    pub min_memory_mb: u64,
    #[serde(rename = "recommendedMemoryMB")]
    pub recommended_memory_mb: u64,
    pub preferred_device: PreferredDevice,
    /// Present only when the GPU is preferred
    #[serde(rename = "minGPUMemoryMB", skip_serializing_if = "Option::is_none", default)]
    pub min_gpu_memory_mb: Option<u64>,
}

impl ResourceRequirements {
    pub fn min_memory_gb(&self) -> f64 {
        mb_to_gb(self.min_memory_mb)
    }

    pub fn recommended_memory_gb(&self) -> f64 {
        mb_to_gb(self.recommended_memory_mb)
    }

    pub fn prefers_gpu(&self) -> bool {
        self.preferred_device == PreferredDevice::Gpu
    }
}

fn mb_to_gb(mb: u64) -> f64 {
    mb as f64 / 1024.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_requirements_omit_gpu_memory() {
        let requirements = ResourceRequirements {
            min_memory_mb: 100,
            recommended_memory_mb: 150,
            preferred_device: PreferredDevice::Cpu,
            min_gpu_memory_mb: None,
        };
        let json = serde_json::to_string(&requirements).expect("Failed to serialize");
        assert!(json.contains("\"preferredDevice\":\"CPU\""));
        assert!(json.contains("\"minMemoryMB\":100"));
        assert!(!json.contains("minGPUMemoryMB"));
    }

    #[test]
    fn test_gigabyte_helpers() {
        let requirements = ResourceRequirements {
            min_memory_mb: 2048,
            recommended_memory_mb: 3072,
            preferred_device: PreferredDevice::Gpu,
            min_gpu_memory_mb: Some(2048),
        };
        assert_eq!(requirements.min_memory_gb(), 2.0);
        assert_eq!(requirements.recommended_memory_gb(), 3.0);
        assert!(requirements.prefers_gpu());
    }
}
