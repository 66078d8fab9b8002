//! Completion service integration
//!
//! Sends a built message list to a hosted chat-completion endpoint and
//! extracts the reply text.

pub mod mock;
pub mod openai;

pub use mock::MockCompletionClient;
pub use openai::OpenAiChatClient;

use crate::models::ChatMessage;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CompletionService: Send + Sync {
    /// One call to the endpoint; returns the trimmed text of the first choice.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Like [`complete`](Self::complete), but any failure is collapsed into a
    /// human-readable string beginning with `"Error:"`.
    async fn complete_or_error(&self, messages: &[ChatMessage]) -> String {
        match self.complete(messages).await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("Completion failed: {}", e);
                format!("Error: {}", e)
            }
        }
    }
}
