use crate::errors::GenerationError;
use crate::model::{CaseStatus, EvalCase, GeneratedSql};
use crate::report::RunArtifacts;
use std::io::Write;

pub fn print_case(case: &EvalCase, outcome: &Result<GeneratedSql, GenerationError>) {
    let _ = write_case(&mut std::io::stdout().lock(), case, outcome);
}

pub fn print_summary(artifacts: &RunArtifacts) {
    let _ = write_summary(&mut std::io::stdout().lock(), artifacts);
}

pub fn write_case<W: Write>(
    out: &mut W,
    case: &EvalCase,
    outcome: &Result<GeneratedSql, GenerationError>,
) -> std::io::Result<()> {
    writeln!(out, "\nQ: {}", case.question)?;
    writeln!(out, "Generated SQL:")?;
    match outcome {
        Ok(generated) => writeln!(out, "{}", generated.sql),
        Err(_) => writeln!(out, "None"),
    }
}

pub fn write_summary<W: Write>(out: &mut W, artifacts: &RunArtifacts) -> std::io::Result<()> {
    for r in artifacts.report.mismatches() {
        match r.status {
            CaseStatus::Pass => {}
            CaseStatus::Missing => {
                writeln!(out, "Prediction is None for reference: {}", r.reference)?;
            }
            CaseStatus::Fail => {
                writeln!(out, "\nMismatch:")?;
                writeln!(out, "Predicted: {}", r.predicted.as_deref().unwrap_or(""))?;
                writeln!(out, "Expected: {}", r.reference)?;
            }
        }
    }

    writeln!(
        out,
        "\n{} Accuracy: {:.2}%",
        metric_label(&artifacts.metric),
        artifacts.report.accuracy * 100.0
    )
}

fn metric_label(metric: &str) -> String {
    let mut words = Vec::new();
    for w in metric.split('_').filter(|w| !w.is_empty()) {
        let mut chars = w.chars();
        if let Some(first) = chars.next() {
            words.push(first.to_uppercase().chain(chars).collect::<String>());
        }
    }
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::scorer::ScoreReport;
    use crate::model::CaseResult;

    fn artifacts() -> RunArtifacts {
        RunArtifacts {
            suite: "demo".into(),
            metric: "loose_match".into(),
            questions: vec!["q1".into(), "q2".into(), "q3".into()],
            report: ScoreReport {
                results: vec![
                    CaseResult {
                        index: 0,
                        status: CaseStatus::Fail,
                        predicted: Some("SELECT id FROM employees;".into()),
                        reference: "SELECT id, name FROM employees;".into(),
                        message: "missing tokens: name".into(),
                    },
                    CaseResult {
                        index: 1,
                        status: CaseStatus::Missing,
                        predicted: None,
                        reference: "SELECT * FROM employees;".into(),
                        message: "no prediction".into(),
                    },
                    CaseResult {
                        index: 2,
                        status: CaseStatus::Pass,
                        predicted: Some("SELECT 1;".into()),
                        reference: "SELECT 1;".into(),
                        message: String::new(),
                    },
                ],
                correct: 1,
                total: 3,
                accuracy: 1.0 / 3.0,
            },
        }
    }

    #[test]
    fn test_summary_layout() {
        let mut buf = Vec::new();
        write_summary(&mut buf, &artifacts()).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains(
            "\nMismatch:\nPredicted: SELECT id FROM employees;\nExpected: SELECT id, name FROM employees;\n"
        ));
        assert!(text.contains("Prediction is None for reference: SELECT * FROM employees;"));
        assert!(text.trim_end().ends_with("Loose Match Accuracy: 33.33%"));
        assert!(!text.contains("SELECT 1;"));
    }

    #[test]
    fn test_case_layout() {
        let case = EvalCase {
            id: "a".into(),
            question: "Count employees".into(),
            reference: String::new(),
        };

        let mut buf = Vec::new();
        let ok = Ok(GeneratedSql {
            sql: "SELECT COUNT(*) FROM employees;".into(),
            attempts: 1,
        });
        write_case(&mut buf, &case, &ok).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "\nQ: Count employees\nGenerated SQL:\nSELECT COUNT(*) FROM employees;\n"
        );

        let mut buf = Vec::new();
        write_case(&mut buf, &case, &Err(GenerationError::Network("timeout".into()))).unwrap();
        assert!(String::from_utf8(buf).unwrap().ends_with("Generated SQL:\nNone\n"));
    }

    #[test]
    fn test_metric_label() {
        assert_eq!(metric_label("loose_match"), "Loose Match");
        assert_eq!(metric_label("exact_match"), "Exact Match");
    }
}
