use crate::errors::{GenerationError, ProviderError};
use crate::extract::extract_sql;
use crate::model::GeneratedSql;
use crate::prompt::{build_prompt, EMPLOYEES_SCHEMA};
use crate::providers::llm::LlmClient;
use crate::retry::{RetryPolicy, Sleeper, TokioSleeper};
use std::sync::Arc;

/// Turns a natural-language question into a SQL string via the inference endpoint.
pub struct SqlGenerator {
    pub client: Arc<dyn LlmClient>,
    pub schema: String,
    pub policy: RetryPolicy,
    pub sleeper: Arc<dyn Sleeper>,
}

impl SqlGenerator {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            schema: EMPLOYEES_SCHEMA.to_string(),
            policy: RetryPolicy::default(),
            sleeper: Arc::new(TokioSleeper),
        }
    }

    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    pub async fn generate(&self, question: &str) -> Result<GeneratedSql, GenerationError> {
        let prompt = build_prompt(&self.schema, question);
        let mut retry = 0u32;

        loop {
            let err = match self.client.complete(&prompt).await {
                Ok(resp) => {
                    return Ok(GeneratedSql {
                        sql: extract_sql(&resp.text),
                        attempts: retry + 1,
                    })
                }
                Err(e) => e,
            };

            match err {
                ProviderError::ModelLoading => {
                    if !self.policy.can_retry(retry) {
                        tracing::warn!(
                            event = "nl2sql.generate.retries_exhausted",
                            retries = retry,
                            "Model still loading after retries. Aborting."
                        );
                        return Err(GenerationError::RetriesExhausted { retries: retry });
                    }
                    let wait = self.policy.backoff(retry);
                    tracing::info!(
                        event = "nl2sql.generate.retry",
                        retry = retry + 1,
                        wait_secs = wait.as_secs_f64(),
                        "Model is loading. Retrying in {:?}",
                        wait
                    );
                    self.sleeper.sleep(wait).await;
                    retry += 1;
                }
                ProviderError::Status { status, body } => {
                    tracing::error!(
                        event = "nl2sql.generate.request_failed",
                        status,
                        body = %body,
                        "Request error"
                    );
                    return Err(GenerationError::Request { status, body });
                }
                ProviderError::Network(msg) => {
                    tracing::error!(
                        event = "nl2sql.generate.network_error",
                        error = %msg,
                        "Request error"
                    );
                    return Err(GenerationError::Network(msg));
                }
                ProviderError::Malformed(msg) => {
                    tracing::error!(
                        event = "nl2sql.generate.malformed_response",
                        error = %msg,
                        "Unexpected response"
                    );
                    return Err(GenerationError::MalformedResponse(msg));
                }
            }
        }
    }
}
