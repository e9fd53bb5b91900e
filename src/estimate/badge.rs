//! Tier badges

use crate::types::{BadgeColor, CompatibilityBadge, CompatibilityTier};

/// Badge shown for a tier
pub fn badge_for(tier: CompatibilityTier) -> CompatibilityBadge {
    match tier {
        CompatibilityTier::Performance => CompatibilityBadge {
            label: "Optimal",
            color: BadgeColor::Green,
            description: "Recommended for your system",
        },
        CompatibilityTier::Standard => CompatibilityBadge {
            label: "Compatible",
            color: BadgeColor::Yellow,
            description: "Meets minimum requirements",
        },
        CompatibilityTier::Lite => CompatibilityBadge {
            label: "Limited",
            color: BadgeColor::Red,
            description: "May experience performance issues",
        },
    }
}
