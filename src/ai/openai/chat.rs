use super::client::OpenAiHttpClient;
use crate::ai::CompletionService;
use crate::config::CompletionConfig;
use crate::models::{ChatCompletionRequest, ChatMessage, ChatMessageContent};
use crate::{Error, Result};
use async_trait::async_trait;

pub struct OpenAiChatClient {
    http: OpenAiHttpClient,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl OpenAiChatClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let http = OpenAiHttpClient::new(
            config.api_key.clone(),
            config.base_url.clone(),
            config.timeout,
        )?;
        Ok(Self {
            http,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiChatClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        if messages.is_empty() {
            return Err(Error::InvalidInput("No messages to send".to_string()));
        }

        tracing::debug!(
            "Sending chat completion request (model: {}, {} messages)",
            self.model,
            messages.len()
        );

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self.http.chat_completion(&request).await?;

        response
            .choices
            .first()
            .and_then(|choice| match &choice.message.content {
                Some(ChatMessageContent::Text(text)) => Some(text.trim().to_string()),
                _ => None,
            })
            .ok_or_else(|| Error::MalformedResponse("No text in first choice".to_string()))
    }
}
