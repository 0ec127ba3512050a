use super::LlmClient;
use crate::config::ClientConfig;
use crate::errors::{ConfigError, ProviderError};
use crate::model::LlmResponse;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::time::Duration;

/// Client for the hosted text-generation inference API.
pub struct HuggingFaceClient {
    pub api_url: String,
    pub model: String,
    api_token: String,
    client: reqwest::Client,
}

impl HuggingFaceClient {
    pub fn new(cfg: &ClientConfig) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_seconds))
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_url: cfg.api_url.clone(),
            model: model_from_url(&cfg.api_url).to_string(),
            api_token: cfg.api_token.clone(),
            client,
        })
    }
}

#[async_trait]
impl LlmClient for HuggingFaceClient {
    async fn complete(&self, prompt: &str) -> Result<LlmResponse, ProviderError> {
        let body = json!({ "inputs": prompt });

        let resp = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_token))
            .json(&body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::SERVICE_UNAVAILABLE {
            return Err(ProviderError::ModelLoading);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let raw = resp
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        let payload: Value = serde_json::from_str(&raw)
            .map_err(|e| ProviderError::Malformed(format!("invalid JSON: {}", e)))?;

        Ok(LlmResponse {
            text: generated_text(&payload)?,
            provider: self.provider_name().to_string(),
            model: self.model.clone(),
            meta: json!({ "status": status.as_u16() }),
        })
    }

    fn provider_name(&self) -> &'static str {
        "huggingface"
    }
}

/// `generated_text` of the first element; an element without the field yields "".
pub fn generated_text(payload: &Value) -> Result<String, ProviderError> {
    let first = payload
        .get(0)
        .and_then(|v| v.as_object())
        .ok_or_else(|| {
            ProviderError::Malformed("expected a JSON array of objects".to_string())
        })?;

    match first.get("generated_text") {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(ProviderError::Malformed(format!(
            "generated_text is not a string: {}",
            other
        ))),
    }
}

fn model_from_url(url: &str) -> &str {
    url.split_once("/models/")
        .map(|(_, model)| model.trim_end_matches('/'))
        .unwrap_or(url)
}
