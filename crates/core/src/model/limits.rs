//! Default context limits for known model families.
//!
//! Provides a static map from model ID prefixes to context window sizes.
//! Provider-qualified ids (`openai/gpt-4o-mini`) are matched on the part
//! after the slash.

/// Returns the default context limit (in tokens) for a known model ID.
///
/// Uses prefix matching against known model families. Unknown models
/// return 8192 as a conservative default.
pub fn default_context_limit(model_id: &str) -> usize {
    let model_id = model_id.rsplit('/').next().unwrap_or(model_id);

    // Gemini family
    if model_id.starts_with("gemini-1.5-pro") {
        return 2_097_152;
    }
    if model_id.starts_with("gemini-") {
        return 1_048_576;
    }
    // GPT-4o / GPT-4-turbo family
    if model_id.starts_with("gpt-4o") || model_id.starts_with("gpt-4-turbo") {
        return 128_000;
    }
    // GPT-4.1 family
    if model_id.starts_with("gpt-4.1") {
        return 1_047_576;
    }
    // GPT-4 (non-turbo)
    if model_id.starts_with("gpt-4") {
        return 8_192;
    }
    // GPT-3.5
    if model_id.starts_with("gpt-3.5") {
        return 16_385;
    }
    // OpenAI o-series (o1, o3, o4)
    if model_id.starts_with("o1") || model_id.starts_with("o3") || model_id.starts_with("o4") {
        return 200_000;
    }
    // DeepSeek family
    if model_id.starts_with("deepseek-") {
        return 64_000;
    }
    8_192
}

