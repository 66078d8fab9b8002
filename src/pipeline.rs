//! Builder → completion → filter, shared by every interaction surface.

use crate::ai::CompletionService;
use crate::builder::build_messages;
use crate::config::Prompts;
use crate::filter::ContentFilter;
use crate::models::ImagePayload;
use std::sync::Arc;

pub const EMPTY_REQUEST_MESSAGE: &str = "Error: Please provide text or an image.";

pub struct Pipeline {
    prompts: Prompts,
    client: Arc<dyn CompletionService>,
    filter: ContentFilter,
}

impl Pipeline {
    pub fn new(prompts: Prompts, client: Arc<dyn CompletionService>, filter: ContentFilter) -> Self {
        Self {
            prompts,
            client,
            filter,
        }
    }

    /// Produce the user-visible reply for one request. Failures come back as
    /// `"Error: ..."` text, never as a typed error.
    pub async fn respond(&self, text: Option<&str>, image: Option<&ImagePayload>) -> String {
        let text = text.filter(|t| !t.trim().is_empty());
        if text.is_none() && image.is_none() {
            tracing::debug!("Rejecting request with neither text nor image");
            return EMPTY_REQUEST_MESSAGE.to_string();
        }

        let messages = build_messages(&self.prompts, text, image);
        let reply = self.client.complete_or_error(&messages).await;
        self.filter.apply(reply)
    }
}
