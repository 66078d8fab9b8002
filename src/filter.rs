//! Output content filter.

use crate::config::FilterConfig;

/// Case-insensitive banned-substring check over response text.
#[derive(Debug, Clone)]
pub struct ContentFilter {
    banned_phrases: Vec<String>,
    refusal_message: String,
}

impl ContentFilter {
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            banned_phrases: config
                .banned_phrases
                .iter()
                .map(|phrase| phrase.to_lowercase())
                .filter(|phrase| !phrase.is_empty())
                .collect(),
            refusal_message: config.refusal_message.clone(),
        }
    }

    pub fn is_blocked(&self, text: &str) -> bool {
        let folded = text.to_lowercase();
        self.banned_phrases
            .iter()
            .any(|phrase| folded.contains(phrase.as_str()))
    }

    /// Return the refusal message if `text` contains any banned phrase,
    /// otherwise `text` unchanged.
    pub fn apply(&self, text: String) -> String {
        if self.is_blocked(&text) {
            tracing::warn!("Response blocked by content filter");
            self.refusal_message.clone()
        } else {
            text
        }
    }
}

impl Default for ContentFilter {
    fn default() -> Self {
        Self::new(&FilterConfig::default())
    }
}
