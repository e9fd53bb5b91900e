//! Model identifier parser
//!
//! Best-effort extraction of family, size, quantization and tuning flavor
//! from identifiers such as `Llama-3-8B-Instruct-q4f16_1`.

use crate::types::{ModelDescriptor, ModelFamily, Quantization};
use once_cell::sync::Lazy;
use regex::Regex;

/// Family patterns in match priority order
static FAMILY_PATTERNS: Lazy<Vec<(ModelFamily, Regex)>> = Lazy::new(|| {
    ModelFamily::PRIORITY
        .iter()
        .map(|family| {
            let pattern = format!(r"{}[- ]?(\d+(?:\.\d+)?)?", regex::escape(family.token()));
            let regex = Regex::new(&pattern).expect("family pattern is a valid regex");
            (*family, regex)
        })
        .collect()
});

/// `q<digits>` followed by an underscore, a word boundary or a letter
static QUANT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"q(\d+)(?:_|\b|[a-z])").expect("quant pattern is a valid regex"));

/// Parse a model identifier. Never fails: unrecognized input yields
/// [`ModelDescriptor::unknown`].
pub fn parse_model_identifier(identifier: &str) -> ModelDescriptor {
    let name = identifier.to_lowercase();

    let (family, parameter_count_b) = match_family(&name);
    if family == ModelFamily::Unknown {
        tracing::debug!("No known model family in identifier '{}'", identifier);
    }

    ModelDescriptor {
        family,
        parameter_count_b,
        quantization: match_quantization(&name),
        is_instruct_tuned: name.contains("instruct"),
        is_chat_tuned: name.contains("chat"),
    }
}

/// First family whose pattern matches, with the captured or default size
fn match_family(name: &str) -> (ModelFamily, f64) {
    for (family, regex) in FAMILY_PATTERNS.iter() {
        let Some(captures) = regex.captures(name) else {
            continue;
        };

        let size = captures
            .get(1)
            .and_then(|m| m.as_str().parse::<f64>().ok())
            .unwrap_or_else(|| family.default_parameter_count_b());
        return (*family, size);
    }

    (ModelFamily::Unknown, 0.0)
}

fn match_quantization(name: &str) -> Option<Quantization> {
    if let Some(captures) = QUANT_PATTERN.captures(name) {
        let digits = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
        match digits.parse::<u32>().ok().and_then(Quantization::from_bits) {
            Some(quantization) => return Some(quantization),
            None => tracing::debug!("Ignoring unsupported quantization code q{}", digits),
        }
    }

    if name.contains("8bit") {
        Some(Quantization::Q8)
    } else if name.contains("4bit") {
        Some(Quantization::Q4)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tinyllama_chat_q4() {
        let d = parse_model_identifier("tinyllama-1.1b-chat-q4");
        // "llama" is tested before "tinyllama" and matches inside it
        assert_eq!(d.family, ModelFamily::Llama);
        assert_eq!(d.parameter_count_b, 1.1);
        assert_eq!(d.quantization, Some(Quantization::Q4));
        assert!(d.is_chat_tuned);
        assert!(!d.is_instruct_tuned);
    }

    #[test]
    fn test_number_directly_after_family() {
        let d = parse_model_identifier("llama-3-70b-instruct");
        assert_eq!(d.family, ModelFamily::Llama);
        assert_eq!(d.parameter_count_b, 3.0);
        assert_eq!(d.quantization, None);
        assert!(d.is_instruct_tuned);

        let d = parse_model_identifier("Gemma 2.5 it");
        assert_eq!(d.family, ModelFamily::Gemma);
        assert_eq!(d.parameter_count_b, 2.5);

        let d = parse_model_identifier("qwen2-7b");
        assert_eq!(d.family, ModelFamily::Qwen);
        assert_eq!(d.parameter_count_b, 2.0);
    }

    #[test]
    fn test_family_defaults_without_number() {
        assert_eq!(parse_model_identifier("phi-mini").parameter_count_b, 2.7);
        assert_eq!(parse_model_identifier("hermes-pro").parameter_count_b, 7.0);
        assert_eq!(parse_model_identifier("Mistral-Instruct").parameter_count_b, 7.0);

        let d = parse_model_identifier("qwen-coder");
        assert_eq!(d.family, ModelFamily::Qwen);
        assert_eq!(d.parameter_count_b, 7.0);
    }

    #[test]
    fn test_tinyllama_alone_resolves_to_llama_first() {
        let d = parse_model_identifier("TinyLlama-chat");
        assert_eq!(d.family, ModelFamily::Llama);
        assert_eq!(d.parameter_count_b, 7.0);
    }

    #[test]
    fn test_priority_breaks_ties() {
        let d = parse_model_identifier("hermes-2-pro-llama-3-8b");
        assert_eq!(d.family, ModelFamily::Llama);
        assert_eq!(d.parameter_count_b, 3.0);

        let d = parse_model_identifier("qwen-phi-merge");
        assert_eq!(d.family, ModelFamily::Phi);
    }

    #[test]
    fn test_unknown_identifier() {
        let d = parse_model_identifier("mystery-model-xyz");
        assert_eq!(d, ModelDescriptor::unknown());
        assert!(!d.is_recognized());

        assert_eq!(parse_model_identifier(""), ModelDescriptor::unknown());
    }

    #[test]
    fn test_quantization_tokens() {
        let q = |s: &str| parse_model_identifier(s).quantization;
        assert_eq!(q("Llama-3-8B-Instruct-q4f16_1-MLC"), Some(Quantization::Q4));
        assert_eq!(q("mistral-7b-Q5_K_M"), Some(Quantization::Q5));
        assert_eq!(q("phi-2-q8"), Some(Quantization::Q8));
        assert_eq!(q("gemma-2b-q3.gguf"), Some(Quantization::Q3));
        assert_eq!(q("gemma-2b-q6"), Some(Quantization::Q6));
        assert_eq!(q("gemma-2b-Q2_K"), Some(Quantization::Q2));
    }

    #[test]
    fn test_bit_suffix_fallback() {
        let q = |s: &str| parse_model_identifier(s).quantization;
        assert_eq!(q("mistral-7b-mlx-8bit"), Some(Quantization::Q8));
        assert_eq!(q("mistral-7b-mlx-4bit"), Some(Quantization::Q4));
        assert_eq!(q("mistral-7b"), None);
    }

    #[test]
    fn test_unsupported_quantization_code_is_ignored() {
        let q = |s: &str| parse_model_identifier(s).quantization;
        assert_eq!(q("llama-2-7b-q16"), None);
        assert_eq!(q("llama-2-7b-q1-4bit"), Some(Quantization::Q4));
    }

    #[test]
    fn test_qwen_is_not_a_quantization_token() {
        let d = parse_model_identifier("qwen-7b");
        assert_eq!(d.quantization, None);
    }

    #[test]
    fn test_case_insensitive_flags() {
        let d = parse_model_identifier("Hermes-CHAT-Instruct");
        assert!(d.is_chat_tuned);
        assert!(d.is_instruct_tuned);
        assert_eq!(d.family, ModelFamily::Hermes);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let id = "Phi-3.5-mini-instruct-q4f16_1";
        assert_eq!(parse_model_identifier(id), parse_model_identifier(id));
        assert_eq!(parse_model_identifier(id).parameter_count_b, 3.5);
    }
}
