use super::LlmClient;
use crate::errors::ProviderError;
use crate::model::LlmResponse;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays a fixed script of replies; the last reply repeats once the script runs out.
pub struct FakeClient {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    last: Mutex<Option<Result<String, ProviderError>>>,
    prompts: Mutex<Vec<String>>,
}

impl FakeClient {
    pub fn new(script: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            last: Mutex::new(None),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn always(reply: Result<String, ProviderError>) -> Self {
        Self::new(vec![reply])
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn calls(&self) -> usize {
        self.prompts.lock().map(|p| p.len()).unwrap_or(0)
    }

    fn next_reply(&self) -> Result<String, ProviderError> {
        let poisoned = || ProviderError::Network("fake client lock poisoned".to_string());

        let mut script = self.script.lock().map_err(|_| poisoned())?;
        let mut last = self.last.lock().map_err(|_| poisoned())?;
        if let Some(reply) = script.pop_front() {
            *last = Some(reply.clone());
            return reply;
        }
        last.clone()
            .unwrap_or_else(|| Err(ProviderError::Network("fake client has no script".to_string())))
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, prompt: &str) -> Result<LlmResponse, ProviderError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let text = self.next_reply()?;
        Ok(LlmResponse {
            text,
            provider: self.provider_name().to_string(),
            model: "fake".to_string(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}
