//! Runtime configuration loaded from the environment (and `.env`).

use crate::{prompts, Error, Result};
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 300;
const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_TIMEOUT_SECS: u64 = 60;
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Fixed instruction strings fed to the request builder.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompts {
    pub system_prompt: String,
    pub default_image_prompt: String,
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            system_prompt: prompts::SYSTEM.trim().to_string(),
            default_image_prompt: prompts::DEFAULT_IMAGE.trim().to_string(),
        }
    }
}

/// Banned phrases and the sentence substituted when one matches.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    pub banned_phrases: Vec<String>,
    pub refusal_message: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            banned_phrases: prompts::parse_phrase_list(prompts::BANNED_PHRASES),
            refusal_message: prompts::REFUSAL.trim().to_string(),
        }
    }
}

/// Connection and sampling settings for the completion endpoint.
#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub timeout: Duration,
}

impl CompletionConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub prompts: Prompts,
    pub filter: FilterConfig,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let api_key =
            var("OPENAI_API_KEY").ok_or_else(|| Error::Config("OPENAI_API_KEY not set".to_string()))?;

        let mut completion = CompletionConfig::new(api_key);
        if let Some(base_url) = var("OPENAI_BASE_URL") {
            completion.base_url = base_url.trim_end_matches('/').to_string();
        }
        if let Some(model) = var("CHAT_MODEL") {
            completion.model = model;
        }
        if let Some(raw) = var("MAX_TOKENS") {
            completion.max_tokens = parse_var("MAX_TOKENS", &raw)?;
        }
        if let Some(raw) = var("TEMPERATURE") {
            completion.temperature = parse_var("TEMPERATURE", &raw)?;
        }
        if let Some(raw) = var("REQUEST_TIMEOUT_SECS") {
            completion.timeout = Duration::from_secs(parse_var("REQUEST_TIMEOUT_SECS", &raw)?);
        }

        let mut instructions = Prompts::default();
        if let Some(system_prompt) = var("SYSTEM_PROMPT") {
            instructions.system_prompt = system_prompt;
        }
        if let Some(default_image_prompt) = var("DEFAULT_IMAGE_PROMPT") {
            instructions.default_image_prompt = default_image_prompt;
        }

        let mut filter = FilterConfig::default();
        if let Some(raw) = var("BANNED_PHRASES") {
            filter.banned_phrases = prompts::parse_phrase_list(&raw);
        }
        if let Some(refusal_message) = var("REFUSAL_MESSAGE") {
            filter.refusal_message = refusal_message;
        }

        let port = match var("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            completion,
            prompts: instructions,
            filter,
            host: var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }
}

fn parse_var<T: FromStr>(key: &str, raw: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("Invalid {} '{}': {}", key, raw, e)))
}
