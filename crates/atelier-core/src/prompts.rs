//! Prompt file helpers.

/// System prompt for the component-generation model (shared with the chat
/// front-end).
pub const GENERATION_PROMPT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/prompts/generation_prompt.md"
));
