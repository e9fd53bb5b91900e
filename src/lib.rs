//! ModelTier Library
//!
//! Estimates whether a machine can run a local language model well, from
//! nothing but the model's identifier and a snapshot of the machine.

pub mod estimate;
pub mod storage;
pub mod system;
pub mod types;

pub use estimate::{
    badge_for, classify, estimate_requirements, highest_tier, parse_model_identifier, Assessment,
    Classifier, ModelReport,
};
pub use storage::settings::EstimatorSettings;
pub use storage::StorageError;
pub use types::{
    CapabilitiesError, CompatibilityBadge, CompatibilityTier, ModelDescriptor, ModelFamily,
    PreferredDevice, Quantization, ResourceRequirements, SystemCapabilities,
};
