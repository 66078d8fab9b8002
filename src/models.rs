//! Data models and structures
//!
//! Wire types for the chat-completion endpoint, the image payload carried
//! inside a user message, and the JSON bodies of the `/chat` route.

use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// MIME type declared for every uploaded image.
pub const IMAGE_MIME: &str = "image/png";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// Message content: plain text or an ordered list of parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChatMessageContent {
    Text(String),
    Parts(Vec<MessagePart>),
}

/// One content segment in a multipart message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessagePart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ChatMessageContent>,
}

impl ChatMessage {
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(ChatMessageContent::Text(text.into())),
        }
    }

    pub fn parts(role: Role, parts: Vec<MessagePart>) -> Self {
        Self {
            role,
            content: Some(ChatMessageContent::Parts(parts)),
        }
    }
}

/// Request body for chat completions.
#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Top-level chat completion response.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

/// Base64-encoded image bytes, built right before a request and dropped after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data: String,
}

impl ImagePayload {
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
        }
    }

    /// Wrap already-encoded data. A `data:<mime>;base64,` prefix, as produced
    /// by a browser `FileReader`, is stripped. Returns `None` for blank input
    /// or a `data:` header with no payload after it.
    pub fn from_base64(encoded: &str) -> Option<Self> {
        let trimmed = encoded.trim();
        let data = match trimmed.strip_prefix("data:") {
            Some(rest) => rest.split_once(',')?.1,
            None => trimmed,
        };

        if data.is_empty() {
            return None;
        }

        Some(Self {
            data: data.to_string(),
        })
    }

    pub fn base64(&self) -> &str {
        &self.data
    }

    pub fn mime_type(&self) -> &'static str {
        IMAGE_MIME
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.data)
    }
}

/// JSON body accepted by `POST /chat`.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub input: Option<String>,
    /// Base64 image data (the field name is kept for browser compatibility).
    #[serde(default)]
    pub image_path: Option<String>,
}

/// JSON body returned by `POST /chat`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatReply {
    pub response: String,
}
