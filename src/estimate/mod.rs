//! Model tier estimation
//!
//! identifier -> [`ModelDescriptor`](crate::types::ModelDescriptor) ->
//! [`ResourceRequirements`](crate::types::ResourceRequirements) ->
//! [`CompatibilityTier`](crate::types::CompatibilityTier) -> badge.
//! Everything here is pure and safe to call from any thread.

pub mod aggregate;
pub mod badge;
pub mod cache;
pub mod classifier;
pub mod parser;
pub mod report;
pub mod requirements;

pub use aggregate::highest_tier;
pub use badge::badge_for;
pub use cache::DescriptorCache;
pub use classifier::{classify, gpu_adequate, Assessment, Classifier};
pub use parser::parse_model_identifier;
pub use report::{requirement_checks, ModelReport, RequirementCheck};
pub use requirements::estimate_requirements;
