use async_trait::async_trait;
use nl2sql_core::engine::runner::Runner;
use nl2sql_core::engine::scorer::Scorer;
use nl2sql_core::errors::ProviderError;
use nl2sql_core::generator::SqlGenerator;
use nl2sql_core::metrics_api::{Metric, MetricResult};
use nl2sql_core::model::{CaseStatus, EvalSuite};
use nl2sql_core::providers::llm::fake::FakeClient;
use nl2sql_core::retry::{RetryPolicy, Sleeper};
use std::sync::Arc;
use std::time::Duration;

struct NoSleep;

#[async_trait]
impl Sleeper for NoSleep {
    async fn sleep(&self, _duration: Duration) {}
}

struct ContainsReference;

impl Metric for ContainsReference {
    fn name(&self) -> &'static str {
        "contains_reference"
    }

    fn evaluate(&self, predicted: &str, reference: &str) -> MetricResult {
        if predicted.contains(reference) {
            MetricResult::pass(1.0)
        } else {
            MetricResult::fail(0.0, "reference not contained")
        }
    }
}

#[tokio::test]
async fn test_demo_suite_end_to_end() {
    let suite = EvalSuite::demo();
    let client = Arc::new(FakeClient::new(vec![
        Ok(format!("Here it is:\n{}\n", suite.cases[0].reference)),
        Err(ProviderError::ModelLoading),
        Err(ProviderError::ModelLoading),
        Ok("```sql\nSELECT something_else\n```".to_string()),
    ]));

    let generator = SqlGenerator::new(client.clone())
        .with_policy(RetryPolicy::new(1))
        .with_sleeper(Arc::new(NoSleep));
    let runner = Runner::new(generator, Scorer::new(Arc::new(ContainsReference)));

    let mut seen = Vec::new();
    let artifacts = runner
        .run_suite(&suite, |case, outcome| {
            seen.push((case.id.clone(), outcome.is_ok()));
        })
        .await;

    assert_eq!(
        seen,
        vec![
            ("it_employees".to_string(), true),
            ("hired_after_2020".to_string(), false),
            ("count_by_department".to_string(), true),
        ]
    );

    let results = &artifacts.report.results;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0].status, CaseStatus::Pass);
    assert_eq!(results[1].status, CaseStatus::Missing);
    assert!(results[1].message.starts_with("retries_exhausted"));
    assert_eq!(results[2].status, CaseStatus::Fail);
    assert_eq!(results[2].predicted.as_deref(), Some("SELECT something_else"));

    assert_eq!(artifacts.report.correct, 1);
    assert!((artifacts.report.accuracy - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(artifacts.metric, "contains_reference");
    assert_eq!(artifacts.suite, "employees-demo");
    assert_eq!(client.calls(), 4);
}
