//! Tier aggregation over model variants
//!
//! A family shown as one row (e.g. all its quantizations) is rated by its
//! best variant.

use crate::estimate::classifier::Classifier;
use crate::types::{CompatibilityTier, SystemCapabilities};

/// Highest tier in the sequence, `Lite` when it is empty
pub fn highest_tier<I>(tiers: I) -> CompatibilityTier
where
    I: IntoIterator<Item = CompatibilityTier>,
{
    tiers.into_iter().max().unwrap_or(CompatibilityTier::Lite)
}

impl Classifier {
    /// Tier of a group of variants. `Lite` for an empty group or when no
    /// capability snapshot is available yet.
    pub fn aggregate_tier<S: AsRef<str>>(
        &self,
        variants: &[S],
        caps: Option<&SystemCapabilities>,
    ) -> CompatibilityTier {
        let Some(caps) = caps else {
            return CompatibilityTier::Lite;
        };

        highest_tier(
            variants
                .iter()
                .map(|variant| self.classify(variant.as_ref(), caps)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GpuCapabilities;

    fn caps() -> SystemCapabilities {
        SystemCapabilities::new(8192.0, 4, GpuCapabilities::default())
    }

    #[test]
    fn test_highest_tier() {
        use CompatibilityTier::*;
        assert_eq!(highest_tier([Lite, Performance, Standard]), Performance);
        assert_eq!(highest_tier([Lite, Standard]), Standard);
        assert_eq!(highest_tier(Vec::new()), Lite);
    }

    #[test]
    fn test_group_takes_best_variant() {
        let classifier = Classifier::default();
        let variants = ["llama-2-7b-chat-q4", "phi-1.5-q4"];
        // first needs a GPU, second is a small CPU model
        assert_eq!(
            classifier.aggregate_tier(&variants, Some(&caps())),
            CompatibilityTier::Performance
        );
        assert_eq!(
            classifier.aggregate_tier(&variants[..1], Some(&caps())),
            CompatibilityTier::Lite
        );
    }

    #[test]
    fn test_empty_group_or_missing_caps() {
        let classifier = Classifier::default();
        let empty: [&str; 0] = [];
        assert_eq!(classifier.aggregate_tier(&empty, Some(&caps())), CompatibilityTier::Lite);
        assert_eq!(
            classifier.aggregate_tier(&["phi-1.5-q4"], None),
            CompatibilityTier::Lite
        );
    }
}
