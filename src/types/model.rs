//! Model types
//!
//! Structured attributes extracted from a model identifier string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Known model families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Llama,
    Mistral,
    Phi,
    Gemma,
    TinyLlama,
    Qwen,
    Hermes,
    Unknown,
}

impl ModelFamily {
    /// Order in which families are matched against an identifier.
    /// The first family that matches wins, so "tinyllama" resolves to `Llama`.
    pub const PRIORITY: [ModelFamily; 7] = [
        ModelFamily::Llama,
        ModelFamily::Mistral,
        ModelFamily::Phi,
        ModelFamily::Gemma,
        ModelFamily::TinyLlama,
        ModelFamily::Qwen,
        ModelFamily::Hermes,
    ];

    /// Lower-case token used to find the family inside an identifier
    pub fn token(&self) -> &'static str {
        match self {
            ModelFamily::Llama => "llama",
            ModelFamily::Mistral => "mistral",
            ModelFamily::Phi => "phi",
            ModelFamily::Gemma => "gemma",
            ModelFamily::TinyLlama => "tinyllama",
            ModelFamily::Qwen => "qwen",
            ModelFamily::Hermes => "hermes",
            ModelFamily::Unknown => "unknown",
        }
    }

    /// Parameter count (in billions) assumed when the identifier names the
    /// family but carries no size.
    pub fn default_parameter_count_b(&self) -> f64 {
        match self {
            ModelFamily::Phi => 2.7,
            ModelFamily::TinyLlama => 1.1,
            ModelFamily::Unknown => 0.0,
            _ => 7.0,
        }
    }
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Weight quantization level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quantization {
    Q2,
    Q3,
    Q4,
    Q5,
    Q6,
    Q8,
}

impl Quantization {
    /// Map the bit width of a `qN` token to a level, if it is one we size
    pub fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            2 => Some(Quantization::Q2),
            3 => Some(Quantization::Q3),
            4 => Some(Quantization::Q4),
            5 => Some(Quantization::Q5),
            6 => Some(Quantization::Q6),
            8 => Some(Quantization::Q8),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Quantization::Q2 => "q2",
            Quantization::Q3 => "q3",
            Quantization::Q4 => "q4",
            Quantization::Q5 => "q5",
            Quantization::Q6 => "q6",
            Quantization::Q8 => "q8",
        }
    }

    /// Storage cost of one parameter at this level
    pub fn bytes_per_parameter(&self) -> f64 {
        match self {
            Quantization::Q8 => 1.0,
            Quantization::Q6 => 0.75,
            Quantization::Q5 => 0.625,
            Quantization::Q4 => 0.5,
            Quantization::Q3 => 0.375,
            Quantization::Q2 => 0.25,
        }
    }
}

/// Bytes per parameter for weights stored at full precision
pub const FULL_PRECISION_BYTES_PER_PARAMETER: f64 = 4.0;

impl fmt::Display for Quantization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Attributes parsed from a model identifier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    pub family: ModelFamily,
    /// Billions of parameters, 0 when undetermined
    pub parameter_count_b: f64,
    /// `None` means full precision
    pub quantization: Option<Quantization>,
    pub is_instruct_tuned: bool,
    pub is_chat_tuned: bool,
}

impl ModelDescriptor {
    /// Descriptor for an identifier nothing could be extracted from
    pub const fn unknown() -> Self {
        Self {
            family: ModelFamily::Unknown,
            parameter_count_b: 0.0,
            quantization: None,
            is_instruct_tuned: false,
            is_chat_tuned: false,
        }
    }

    /// Whether the identifier matched one of the known families.
    ///
    /// Unrecognized identifiers get near-zero requirements, so callers that
    /// care about false "optimal" results should check this.
    pub fn is_recognized(&self) -> bool {
        self.family != ModelFamily::Unknown
    }

    pub fn bytes_per_parameter(&self) -> f64 {
        self.quantization
            .map(|q| q.bytes_per_parameter())
            .unwrap_or(FULL_PRECISION_BYTES_PER_PARAMETER)
    }

    /// "Instruct", "Chat", both, or "Base"
    pub fn flavor(&self) -> String {
        let mut flavor = String::new();
        if self.is_instruct_tuned {
            flavor.push_str("Instruct");
        }
        if self.is_chat_tuned {
            flavor.push_str("Chat");
        }
        if flavor.is_empty() {
            flavor.push_str("Base");
        }
        flavor
    }
}

impl Default for ModelDescriptor {
    fn default() -> Self {
        Self::unknown()
    }
}
