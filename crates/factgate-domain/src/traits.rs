//! Trait definitions for external interactions
//!
//! These traits define the boundary between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for the LLM oracle backing extraction and verification
///
/// Implemented by the infrastructure layer (factgate-llm)
pub trait LlmProvider {
    /// Error type for oracle operations
    type Error;

    /// Generate a text completion for the given prompt
    ///
    /// A single call attempt: retry policy, if any, belongs to the caller.
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;
}
