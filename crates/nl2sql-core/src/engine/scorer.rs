use crate::metrics_api::Metric;
use crate::model::{CaseResult, CaseStatus};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    pub results: Vec<CaseResult>,
    pub correct: usize,
    /// Number of references; the accuracy denominator.
    pub total: usize,
    pub accuracy: f64,
}

impl ScoreReport {
    pub fn mismatches(&self) -> impl Iterator<Item = &CaseResult> {
        self.results
            .iter()
            .filter(|r| r.status != CaseStatus::Pass)
    }
}

pub struct Scorer {
    pub metric: Arc<dyn Metric>,
}

impl Scorer {
    pub fn new(metric: Arc<dyn Metric>) -> Self {
        Self { metric }
    }

    /// Scores predictions against references pairwise, by position.
    ///
    /// Pairs beyond the shorter list are ignored. Accuracy is
    /// `correct / references.len()`, and 0 when there are no references.
    pub fn score(&self, predictions: &[Option<String>], references: &[String]) -> ScoreReport {
        if predictions.len() != references.len() {
            tracing::warn!(
                event = "nl2sql.score.length_mismatch",
                predictions = predictions.len(),
                references = references.len(),
                "prediction and reference counts differ; extra entries are ignored"
            );
        }

        let mut results = Vec::with_capacity(references.len().min(predictions.len()));
        let mut correct = 0;

        for (index, (pred, reference)) in predictions.iter().zip(references).enumerate() {
            let Some(pred) = pred else {
                tracing::debug!(
                    event = "nl2sql.score.missing_prediction",
                    index,
                    reference = %reference,
                    "Prediction is None"
                );
                results.push(CaseResult {
                    index,
                    status: CaseStatus::Missing,
                    predicted: None,
                    reference: reference.clone(),
                    message: "no prediction".to_string(),
                });
                continue;
            };

            let outcome = self.metric.evaluate(pred, reference);
            let status = if outcome.passed {
                correct += 1;
                CaseStatus::Pass
            } else {
                tracing::debug!(
                    event = "nl2sql.score.mismatch",
                    index,
                    metric = self.metric.name(),
                    reason = %outcome.message,
                    "Mismatch"
                );
                CaseStatus::Fail
            };

            results.push(CaseResult {
                index,
                status,
                predicted: Some(pred.clone()),
                reference: reference.clone(),
                message: outcome.message,
            });
        }

        let total = references.len();
        let accuracy = if total == 0 {
            0.0
        } else {
            correct as f64 / total as f64
        };

        ScoreReport {
            results,
            correct,
            total,
            accuracy,
        }
    }
}
