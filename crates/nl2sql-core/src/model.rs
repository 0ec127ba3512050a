use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalSuite {
    #[serde(default)]
    pub version: u32,
    pub suite: String,
    pub cases: Vec<EvalCase>,
}

impl EvalSuite {
    /// The three question/reference pairs used by the demonstration run.
    pub fn demo() -> Self {
        let pairs = [
            (
                "it_employees",
                "Show all IT department employees",
                "SELECT id, name, salary, hire_date FROM employees WHERE department = 'IT';",
            ),
            (
                "hired_after_2020",
                "Find employees hired after 2020",
                "SELECT * FROM employees WHERE hire_date > '2020-01-01';",
            ),
            (
                "count_by_department",
                "Count employees in each department",
                "SELECT department, COUNT(*) FROM employees GROUP BY department;",
            ),
        ];

        Self {
            version: 1,
            suite: "employees-demo".to_string(),
            cases: pairs
                .iter()
                .map(|(id, question, reference)| EvalCase {
                    id: id.to_string(),
                    question: question.to_string(),
                    reference: reference.to_string(),
                })
                .collect(),
        }
    }

    pub fn references(&self) -> Vec<String> {
        self.cases.iter().map(|c| c.reference.clone()).collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EvalCase {
    pub id: String,
    pub question: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}

/// SQL extracted from a successful completion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedSql {
    pub sql: String,
    /// Number of requests sent, including the successful one.
    pub attempts: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pass,
    Fail,
    /// No prediction was produced for this case.
    Missing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseResult {
    pub index: usize,
    pub status: CaseStatus,
    pub predicted: Option<String>,
    pub reference: String,
    pub message: String,
}
