use crate::engine::scorer::Scorer;
use crate::errors::GenerationError;
use crate::generator::SqlGenerator;
use crate::model::{CaseStatus, EvalCase, EvalSuite, GeneratedSql};
use crate::report::RunArtifacts;

pub struct Runner {
    pub generator: SqlGenerator,
    pub scorer: Scorer,
}

impl Runner {
    pub fn new(generator: SqlGenerator, scorer: Scorer) -> Self {
        Self { generator, scorer }
    }

    /// Generates SQL for every case in order, then scores the whole suite.
    ///
    /// `on_case` is called right after each generation finishes.
    pub async fn run_suite<F>(&self, suite: &EvalSuite, mut on_case: F) -> RunArtifacts
    where
        F: FnMut(&EvalCase, &Result<GeneratedSql, GenerationError>),
    {
        let mut predictions = Vec::with_capacity(suite.cases.len());
        let mut failures = Vec::with_capacity(suite.cases.len());

        for case in &suite.cases {
            let outcome = self.generator.generate(&case.question).await;
            on_case(case, &outcome);
            match outcome {
                Ok(generated) => {
                    predictions.push(Some(generated.sql));
                    failures.push(None);
                }
                Err(e) => {
                    tracing::warn!(
                        event = "nl2sql.run.no_prediction",
                        case_id = %case.id,
                        kind = e.kind(),
                        error = %e,
                        "no SQL generated"
                    );
                    predictions.push(None);
                    failures.push(Some(e));
                }
            }
        }

        let mut report = self.scorer.score(&predictions, &suite.references());
        for row in &mut report.results {
            if row.status != CaseStatus::Missing {
                continue;
            }
            if let Some(Some(e)) = failures.get(row.index) {
                row.message = format!("{}: {}", e.kind(), e);
            }
        }

        RunArtifacts {
            suite: suite.suite.clone(),
            metric: self.scorer.metric.name().to_string(),
            questions: suite.cases.iter().map(|c| c.question.clone()).collect(),
            report,
        }
    }
}
