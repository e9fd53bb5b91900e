//! Human-readable summaries
//!
//! Model reports and a requirements-vs-system checklist for front ends.

use crate::estimate::parser::parse_model_identifier;
use crate::estimate::requirements::estimate_requirements;
use crate::types::{ModelDescriptor, ResourceRequirements, SystemCapabilities};
use serde::Serialize;
use std::fmt;

/// Cores the checklist asks for regardless of model
const RECOMMENDED_CPU_CORES: u32 = 4;

/// Parsed attributes and requirements of one identifier
#[derive(Debug, Clone, Serialize)]
pub struct ModelReport {
    pub identifier: String,
    pub descriptor: ModelDescriptor,
    pub requirements: ResourceRequirements,
}

impl ModelReport {
    pub fn new(identifier: &str) -> Self {
        let descriptor = parse_model_identifier(identifier);
        Self {
            identifier: identifier.to_string(),
            requirements: estimate_requirements(&descriptor),
            descriptor,
        }
    }
}

impl fmt::Display for ModelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.descriptor;
        let base = if d.is_recognized() {
            d.family.token()
        } else {
            ""
        };
        let quantization = d.quantization.map(|q| q.code()).unwrap_or("none");

        writeln!(f, "Model: {}", self.identifier)?;
        writeln!(f, "Base: {}", base)?;
        writeln!(f, "Parameters: {}B", d.parameter_count_b)?;
        writeln!(f, "Quantization: {}", quantization)?;
        writeln!(f, "Type: {}", d.flavor())?;
        writeln!(f, "Min Memory: {:.1}GB", self.requirements.min_memory_gb())?;
        writeln!(f, "Recommended: {:.1}GB", self.requirements.recommended_memory_gb())?;
        write!(f, "Preferred: {}", self.requirements.preferred_device)
    }
}

/// One row of a requirements-vs-system comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequirementCheck {
    pub label: &'static str,
    pub actual: String,
    pub required: String,
    pub met: bool,
}

/// Compare requirements with a snapshot, row by row. GPU rows only appear
/// for GPU-preferred models.
pub fn requirement_checks(
    requirements: &ResourceRequirements,
    caps: &SystemCapabilities,
) -> Vec<RequirementCheck> {
    let mut checks = vec![
        RequirementCheck {
            label: "System Memory",
            actual: format_gb(caps.memory.total_mb),
            required: format_gb(requirements.min_memory_mb as f64),
            met: caps.memory.total_mb >= requirements.min_memory_mb as f64,
        },
        RequirementCheck {
            label: "CPU Cores",
            actual: caps.cpu.cores.to_string(),
            required: RECOMMENDED_CPU_CORES.to_string(),
            met: caps.cpu.cores >= RECOMMENDED_CPU_CORES,
        },
    ];

    if requirements.prefers_gpu() {
        checks.push(RequirementCheck {
            label: "WebGPU Support",
            actual: if caps.gpu.webgpu_enabled { "Yes" } else { "No" }.to_string(),
            required: "Required".to_string(),
            met: caps.gpu.webgpu_enabled,
        });

        if let Some(needed) = requirements.min_gpu_memory_mb {
            checks.push(RequirementCheck {
                label: "GPU Memory",
                actual: caps
                    .gpu
                    .memory_mb
                    .map(format_gb)
                    .unwrap_or_else(|| "Unknown".to_string()),
                required: format_gb(needed as f64),
                met: caps.gpu.memory_mb.is_some_and(|have| have >= needed as f64),
            });
        }
    }

    checks
}

fn format_gb(mb: f64) -> String {
    format!("{}GB", (mb / 1024.0).round())
}
