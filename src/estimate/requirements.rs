//! Requirements estimator
//!
//! Turns a parsed descriptor into memory and device requirements.

use crate::types::{ModelDescriptor, PreferredDevice, ResourceRequirements};

/// Megabytes per billion parameters at one byte per parameter
const MB_PER_BILLION_PARAMS: f64 = 1024.0;

/// KV-cache and runtime overhead for chat/instruct models (longer contexts)
const TUNED_OVERHEAD: f64 = 1.5;
const BASE_OVERHEAD: f64 = 1.2;

const RECOMMENDED_HEADROOM: f64 = 1.5;

/// Models at or above this size prefer the GPU
const GPU_PREFERRED_MIN_PARAMS_B: f64 = 2.0;

/// Estimate what a model needs to run
pub fn estimate_requirements(descriptor: &ModelDescriptor) -> ResourceRequirements {
    let base_memory_mb =
        (descriptor.parameter_count_b * MB_PER_BILLION_PARAMS * descriptor.bytes_per_parameter())
            .ceil();

    let tuned = descriptor.is_instruct_tuned || descriptor.is_chat_tuned;
    let overhead = if tuned { TUNED_OVERHEAD } else { BASE_OVERHEAD };

    let min_memory_mb = (base_memory_mb * overhead).ceil();
    let recommended_memory_mb = (min_memory_mb * RECOMMENDED_HEADROOM).ceil();

    let prefer_gpu = descriptor.parameter_count_b >= GPU_PREFERRED_MIN_PARAMS_B || tuned;
    let min_memory_mb = min_memory_mb as u64;

    ResourceRequirements {
        min_memory_mb,
        recommended_memory_mb: recommended_memory_mb as u64,
        preferred_device: if prefer_gpu {
            PreferredDevice::Gpu
        } else {
            PreferredDevice::Cpu
        },
        min_gpu_memory_mb: prefer_gpu.then_some(min_memory_mb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate::parser::parse_model_identifier;
    use crate::types::{ModelFamily, Quantization};

    fn descriptor(params: f64, quantization: Option<Quantization>) -> ModelDescriptor {
        ModelDescriptor {
            family: ModelFamily::Llama,
            parameter_count_b: params,
            quantization,
            is_instruct_tuned: false,
            is_chat_tuned: false,
        }
    }

    #[test]
    fn test_small_chat_model() {
        let requirements = estimate_requirements(&parse_model_identifier("tinyllama-1.1b-chat-q4"));
        // ceil(1.1 * 1024 * 0.5) = 564, * 1.5 = 846, * 1.5 = 1269
        assert_eq!(requirements.min_memory_mb, 846);
        assert_eq!(requirements.recommended_memory_mb, 1269);
        assert_eq!(requirements.preferred_device, PreferredDevice::Gpu);
        assert_eq!(requirements.min_gpu_memory_mb, Some(846));
    }

    #[test]
    fn test_full_precision_instruct_model() {
        let mut d = descriptor(70.0, None);
        d.is_instruct_tuned = true;
        let requirements = estimate_requirements(&d);
        assert_eq!(requirements.min_memory_mb, 430080);
        assert_eq!(requirements.recommended_memory_mb, 645120);
    }

    #[test]
    fn test_base_overhead() {
        // ceil(7 * 1024 * 0.5) = 3584, * 1.2 = 4300.8 -> 4301
        let requirements = estimate_requirements(&descriptor(7.0, Some(Quantization::Q4)));
        assert_eq!(requirements.min_memory_mb, 4301);
        assert_eq!(requirements.recommended_memory_mb, 6452);
        assert_eq!(requirements.preferred_device, PreferredDevice::Gpu);
    }

    #[test]
    fn test_small_base_model_prefers_cpu() {
        let requirements = estimate_requirements(&descriptor(1.1, Some(Quantization::Q8)));
        assert_eq!(requirements.preferred_device, PreferredDevice::Cpu);
        assert_eq!(requirements.min_gpu_memory_mb, None);
    }

    #[test]
    fn test_unknown_descriptor_is_minimal() {
        let requirements = estimate_requirements(&ModelDescriptor::unknown());
        assert_eq!(requirements.min_memory_mb, 0);
        assert_eq!(requirements.recommended_memory_mb, 0);
        assert_eq!(requirements.preferred_device, PreferredDevice::Cpu);
        assert!(requirements.min_gpu_memory_mb.is_none());
    }

    #[test]
    fn test_recommended_never_below_minimum() {
        for params in [0.0, 0.5, 1.1, 2.7, 7.0, 13.0, 70.0] {
            let requirements = estimate_requirements(&descriptor(params, Some(Quantization::Q3)));
            assert!(requirements.recommended_memory_mb >= requirements.min_memory_mb);
        }
    }

    #[test]
    fn test_lower_precision_never_needs_more_memory() {
        let levels = [
            None,
            Some(Quantization::Q8),
            Some(Quantization::Q6),
            Some(Quantization::Q5),
            Some(Quantization::Q4),
            Some(Quantization::Q3),
            Some(Quantization::Q2),
        ];
        for params in [1.1, 3.0, 7.0, 13.0] {
            let minimums: Vec<u64> = levels
                .iter()
                .map(|q| estimate_requirements(&descriptor(params, *q)).min_memory_mb)
                .collect();
            assert!(minimums.windows(2).all(|pair| pair[0] >= pair[1]));
        }
    }
}
