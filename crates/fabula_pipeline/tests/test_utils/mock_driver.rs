//! Scripted completion driver for testing.

use async_trait::async_trait;
use fabula_core::Message;
use fabula_error::{ProviderError, ProviderErrorKind, ProviderResult};
use fabula_interface::CompletionDriver;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A single scripted response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(ProviderErrorKind),
}

/// Completion driver that replays a fixed script and records every call.
///
/// Calls past the end of the script fail with a parse error so a test that
/// makes too many calls fails loudly.
#[derive(Debug, Clone)]
pub struct MockDriver {
    script: Arc<Mutex<VecDeque<MockResponse>>>,
    calls: Arc<Mutex<Vec<Vec<Message>>>>,
}

impl MockDriver {
    /// Create a driver replaying `script` in order.
    pub fn new(script: Vec<MockResponse>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script of successful responses.
    pub fn replying(responses: &[&str]) -> Self {
        Self::new(
            responses
                .iter()
                .map(|text| MockResponse::Success(text.to_string()))
                .collect(),
        )
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or(0)
    }

    /// Messages of every call, in order.
    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, messages: &[Message]) -> ProviderResult<String> {
        self.calls.lock().unwrap().push(messages.to_vec());
        match self.script.lock().unwrap().pop_front() {
            Some(MockResponse::Success(text)) => Ok(text),
            Some(MockResponse::Error(kind)) => Err(ProviderError::new(kind)),
            None => Err(ProviderError::new(ProviderErrorKind::Parse(
                "mock script exhausted".to_string(),
            ))),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}
