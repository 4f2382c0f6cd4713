//! Fixed prompt text sent with every summary request.

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that creates well-structured, compact summaries. Use minimal spacing between bullet points while maintaining readability.";

/// Appended to every user message so the reply stays within the dialect the
/// converter understands.
pub const FORMATTING_GUIDELINES: &str = "Please format the response using the following guidelines:
- Use \"-\" for bullet points
- Use proper indentation for nested points (2 spaces)
- Use ** for bold text
- Keep formatting compact with minimal blank lines
- Only use blank lines to separate major sections";

pub const SUMMARY_PREFIX: &str = "Summarize in bullet form: ";

pub fn summary_prompt(feedback: &str) -> String {
    format!("{SUMMARY_PREFIX}{feedback}")
}

pub fn with_guidelines(prompt: &str) -> String {
    format!("{prompt}\n\n{FORMATTING_GUIDELINES}")
}
