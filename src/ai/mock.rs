use super::CompletionService;
use crate::models::ChatMessage;
use crate::{Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
enum Scripted {
    Reply(String),
    Failure(fn() -> Error),
}

/// In-process completion double: replays scripted replies in a cycle and
/// records every message list it was handed.
#[derive(Clone)]
pub struct MockCompletionClient {
    script: Arc<Mutex<Vec<Scripted>>>,
    received: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    call_count: Arc<Mutex<usize>>,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(Vec::new())),
            received: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        lock(&self.script).push(Scripted::Reply(response));
        self
    }

    pub fn with_failure(self, make_error: fn() -> Error) -> Self {
        lock(&self.script).push(Scripted::Failure(make_error));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *lock(&self.call_count)
    }

    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        lock(&self.received).last().cloned()
    }
}

impl Default for MockCompletionClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletionClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String> {
        let count = {
            let mut count = lock(&self.call_count);
            *count += 1;
            *count
        };
        lock(&self.received).push(messages.to_vec());

        let script = lock(&self.script);
        if script.is_empty() {
            return Ok("Mock response".to_string());
        }

        match &script[(count - 1) % script.len()] {
            Scripted::Reply(text) => Ok(text.clone()),
            Scripted::Failure(make_error) => Err(make_error()),
        }
    }
}
