//! Compatibility tiers and badges

use serde::{Deserialize, Serialize};
use std::fmt;

/// How well a model is expected to run, ordered `Lite < Standard < Performance`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityTier {
    Lite,
    Standard,
    Performance,
}

impl CompatibilityTier {
    pub const ALL: [CompatibilityTier; 3] = [
        CompatibilityTier::Lite,
        CompatibilityTier::Standard,
        CompatibilityTier::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompatibilityTier::Lite => "lite",
            CompatibilityTier::Standard => "standard",
            CompatibilityTier::Performance => "performance",
        }
    }
}

impl fmt::Display for CompatibilityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity color of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    Green,
    Yellow,
    Red,
}

impl BadgeColor {
    /// Style token used by the web front end
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeColor::Green => "bg-green-500",
            BadgeColor::Yellow => "bg-yellow-500",
            BadgeColor::Red => "bg-red-500",
        }
    }
}

/// Label shown next to a model for its tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityBadge {
    pub label: &'static str,
    pub color: BadgeColor,
    pub description: &'static str,
}
