//! Shared type definitions
//!
//! Value types passed between the parser, the estimator and its callers.

pub mod capabilities;
pub mod model;
pub mod requirements;
pub mod tier;

pub use capabilities::{
    CapabilitiesError, CpuCapabilities, GpuCapabilities, MemoryCapabilities, SystemCapabilities,
};
pub use model::{ModelDescriptor, ModelFamily, Quantization};
pub use requirements::{PreferredDevice, ResourceRequirements};
pub use tier::{BadgeColor, CompatibilityBadge, CompatibilityTier};
