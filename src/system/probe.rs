//! Host capability probe
//!
//! Builds a [`SystemCapabilities`] snapshot for the local machine.

use crate::storage::settings::EstimatorSettings;
use crate::system::gpu::{detect_gpu, GpuInfo};
use crate::system::resources::{cpu_count, total_memory_mb};
use crate::types::{CpuCapabilities, GpuCapabilities, MemoryCapabilities, SystemCapabilities};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A snapshot and when it was taken
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub captured_at: DateTime<Utc>,
    pub capabilities: SystemCapabilities,
}

/// Probe the local machine
pub fn probe_host(settings: &EstimatorSettings) -> ProbeReport {
    let gpu = detect_gpu();
    let memory = total_memory_mb();
    let cpus = cpu_count();

    let capabilities = capabilities_from(gpu, memory, cpus, settings);
    tracing::info!(
        "Probed host: {} cores, {} MB RAM, GPU {} ({} MB)",
        capabilities.cpu.cores,
        capabilities.memory.total_mb,
        capabilities.gpu.name.as_deref().unwrap_or("not detected"),
        capabilities
            .gpu
            .memory_mb
            .map(|mb| mb.to_string())
            .unwrap_or_else(|| "unknown".to_string())
    );

    ProbeReport {
        captured_at: Utc::now(),
        capabilities,
    }
}

/// Assemble a snapshot from raw probe results, filling unknown memory and
/// cores from the settings.
pub fn capabilities_from(
    gpu: Option<GpuInfo>,
    memory_mb: Option<u64>,
    cpus: Option<usize>,
    settings: &EstimatorSettings,
) -> SystemCapabilities {
    let total_mb = memory_mb
        .filter(|mb| *mb > 0)
        .map(|mb| mb as f64)
        .unwrap_or(settings.fallback_memory_mb);

    let cores = cpus
        .and_then(|n| u32::try_from(n).ok())
        .filter(|n| *n > 0)
        .unwrap_or(settings.fallback_cores);

    let gpu = match gpu {
        Some(info) if info.is_available => {
            // Unified memory: the GPU can address system RAM
            let vram = if info.vram_total_mb == 0 && info.name.starts_with("Apple") {
                memory_mb.unwrap_or(0)
            } else {
                info.vram_total_mb
            };
            GpuCapabilities {
                name: Some(info.name),
                memory_mb: (vram > 0).then_some(vram as f64),
                webgpu_enabled: true,
            }
        }
        _ => GpuCapabilities::default(),
    };

    SystemCapabilities {
        gpu,
        cpu: CpuCapabilities {
            cores,
            hardware_concurrency: cores,
        },
        memory: MemoryCapabilities { total_mb },
    }
}
