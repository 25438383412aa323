//! Factgate Oracle Layer
//!
//! Pluggable LLM oracle implementations behind the `LlmProvider` trait from
//! `factgate-domain`, plus the payload decoder that turns freeform oracle text
//! into typed data.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `OpenAiProvider`: chat-completions HTTP API integration
//!
//! # Examples
//!
//! ```
//! use factgate_llm::MockProvider;
//! use factgate_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from the oracle!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from the oracle!");
//! ```

#![warn(missing_docs)]

pub mod openai;
pub mod payload;

use factgate_domain::traits::LlmProvider as LlmProviderTrait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;
pub use payload::{decode_json, Decoded};

/// Errors that can occur during oracle operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Credentials or client configuration missing or unusable at construction
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the oracle
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("Oracle error: {0}")]
    Other(String),
}

/// A scripted reply for the mock oracle
#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    TransportError(String),
}

/// Mock oracle for deterministic testing
///
/// Returns pre-configured responses without any network calls. Replies can be
/// queued in order, which fits the pipeline's fixed call sequence (one
/// extraction call, then one verification call).
///
/// # Examples
///
/// ```
/// use factgate_llm::MockProvider;
/// use factgate_domain::traits::LlmProvider;
///
/// let provider = MockProvider::new("fallback");
/// provider.push_response("first");
/// assert_eq!(provider.generate("any prompt").unwrap(), "first");
/// assert_eq!(provider.generate("any prompt").unwrap(), "fallback");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    queue: Arc<Mutex<VecDeque<MockReply>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            queue: Arc::new(Mutex::new(VecDeque::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Queue a response consumed by the next call
    pub fn push_response(&self, response: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::Text(response.into()));
    }

    /// Queue a transport error consumed by the next call
    pub fn push_error(&self, message: impl Into<String>) {
        self.queue
            .lock()
            .unwrap()
            .push_back(MockReply::TransportError(message.into()));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap() = 0;
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, _prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        match self.queue.lock().unwrap().pop_front() {
            Some(MockReply::Text(text)) => Ok(text),
            Some(MockReply::TransportError(message)) => Err(LlmError::Communication(message)),
            None => Ok(self.default_response.clone()),
        }
    }
}
