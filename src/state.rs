use crate::ai::{CompletionService, OpenAiChatClient};
use crate::config::Config;
use crate::filter::ContentFilter;
use crate::pipeline::Pipeline;
use crate::Result;
use std::sync::Arc;

/// Shared, read-only state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }

    /// Wire the OpenAI-backed pipeline from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        tracing::info!(
            "Completion endpoint: {} (model: {})",
            config.completion.base_url,
            config.completion.model
        );

        let client: Arc<dyn CompletionService> =
            Arc::new(OpenAiChatClient::new(&config.completion)?);
        let filter = ContentFilter::new(&config.filter);

        Ok(Self::new(Pipeline::new(
            config.prompts.clone(),
            client,
            filter,
        )))
    }
}
