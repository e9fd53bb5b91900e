//! Tier classifier
//!
//! Compares a model's requirements against a capability snapshot.

use crate::estimate::badge::badge_for;
use crate::estimate::cache::DescriptorCache;
use crate::estimate::parser::parse_model_identifier;
use crate::estimate::requirements::estimate_requirements;
use crate::storage::settings::EstimatorSettings;
use crate::types::{
    CompatibilityBadge, CompatibilityTier, ModelDescriptor, PreferredDevice,
    ResourceRequirements, SystemCapabilities,
};
use serde::Serialize;

/// Everything the classifier worked out for one identifier
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub identifier: String,
    pub descriptor: ModelDescriptor,
    pub requirements: ResourceRequirements,
    pub tier: CompatibilityTier,
    pub badge: CompatibilityBadge,
    /// False when no known family matched. The tier is then based on
    /// near-zero requirements and is likely too optimistic.
    pub recognized: bool,
    pub gpu_adequate: bool,
    /// Total memory minus the reserve, may be negative
    pub available_memory_mb: f64,
}

/// Tier classifier with configurable thresholds and a descriptor memo
#[derive(Debug, Default)]
pub struct Classifier {
    settings: EstimatorSettings,
    cache: DescriptorCache,
}

impl Classifier {
    pub fn new(settings: EstimatorSettings) -> Self {
        Self {
            settings,
            cache: DescriptorCache::new(),
        }
    }

    pub fn settings(&self) -> &EstimatorSettings {
        &self.settings
    }

    pub fn cache(&self) -> &DescriptorCache {
        &self.cache
    }

    /// Parsed descriptor for an identifier, memoized
    pub fn descriptor(&self, identifier: &str) -> ModelDescriptor {
        self.cache.get_or_parse(identifier)
    }

    pub fn classify(&self, identifier: &str, caps: &SystemCapabilities) -> CompatibilityTier {
        self.assess(identifier, caps).tier
    }

    pub fn assess(&self, identifier: &str, caps: &SystemCapabilities) -> Assessment {
        let descriptor = self.descriptor(identifier);
        let requirements = estimate_requirements(&descriptor);
        let available_memory_mb = caps.memory.total_mb - self.settings.memory_reserve_mb;
        let gpu_adequate = gpu_adequate(&requirements, caps);
        let tier = decide(
            &self.settings,
            &descriptor,
            &requirements,
            caps,
            gpu_adequate,
            available_memory_mb,
        );

        tracing::debug!(
            "{} -> {} (min {} MB, recommended {} MB, {} preferred, available {} MB)",
            identifier,
            tier,
            requirements.min_memory_mb,
            requirements.recommended_memory_mb,
            requirements.preferred_device,
            available_memory_mb
        );

        Assessment {
            identifier: identifier.to_string(),
            descriptor,
            requirements,
            tier,
            badge: badge_for(tier),
            recognized: descriptor.is_recognized(),
            gpu_adequate,
            available_memory_mb,
        }
    }
}

/// Decision rules, first match wins
fn decide(
    settings: &EstimatorSettings,
    descriptor: &ModelDescriptor,
    requirements: &ResourceRequirements,
    caps: &SystemCapabilities,
    gpu_adequate: bool,
    available_memory_mb: f64,
) -> CompatibilityTier {
    let fits_minimum = available_memory_mb >= requirements.min_memory_mb as f64;

    if gpu_adequate && available_memory_mb >= requirements.recommended_memory_mb as f64 {
        return CompatibilityTier::Performance;
    }

    if gpu_adequate && fits_minimum {
        return CompatibilityTier::Standard;
    }

    // Small quantized models run acceptably on many-core CPUs without a GPU
    if descriptor.parameter_count_b <= settings.cpu_fallback_max_params_b
        && descriptor.quantization.is_some()
        && fits_minimum
        && caps.cpu.cores >= settings.cpu_fallback_min_cores
    {
        return CompatibilityTier::Standard;
    }

    CompatibilityTier::Lite
}

/// Whether the snapshot's GPU satisfies the requirements. Unknown GPU
/// memory never counts as enough.
pub fn gpu_adequate(requirements: &ResourceRequirements, caps: &SystemCapabilities) -> bool {
    match requirements.preferred_device {
        PreferredDevice::Cpu => true,
        PreferredDevice::Gpu => {
            caps.gpu.webgpu_enabled
                && match requirements.min_gpu_memory_mb {
                    None => true,
                    Some(needed) => caps
                        .gpu
                        .memory_mb
                        .is_some_and(|have| have >= needed as f64),
                }
        }
    }
}

/// Classify an identifier against a snapshot with the default thresholds
pub fn classify(identifier: &str, caps: &SystemCapabilities) -> CompatibilityTier {
    let settings = EstimatorSettings::default();
    let descriptor = parse_model_identifier(identifier);
    let requirements = estimate_requirements(&descriptor);
    let available_memory_mb = caps.memory.total_mb - settings.memory_reserve_mb;
    let adequate = gpu_adequate(&requirements, caps);

    decide(
        &settings,
        &descriptor,
        &requirements,
        caps,
        adequate,
        available_memory_mb,
    )
}
