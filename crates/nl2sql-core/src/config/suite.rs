use crate::errors::ConfigError;
use crate::model::EvalSuite;
use std::collections::HashSet;
use std::path::Path;

pub const SUPPORTED_SUITE_VERSION: u32 = 1;

pub fn load_suite(path: &Path) -> Result<EvalSuite, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut ignored_keys = HashSet::new();
    let deserializer = serde_yaml::Deserializer::from_str(&raw);

    // serde_ignored wrapper to capture unknown fields
    let mut suite: EvalSuite = serde_ignored::deserialize(deserializer, |path| {
        ignored_keys.insert(path.to_string());
    })?;

    if !ignored_keys.is_empty() {
        let mut keys: Vec<_> = ignored_keys.into_iter().collect();
        keys.sort();
        tracing::warn!(
            event = "nl2sql.suite.unknown_fields",
            file = %path.display(),
            fields = ?keys,
            "Ignored unknown suite fields"
        );
    }

    // Absent version means the current one
    if suite.version == 0 {
        suite.version = SUPPORTED_SUITE_VERSION;
    }
    if suite.version != SUPPORTED_SUITE_VERSION {
        return Err(ConfigError::Invalid(format!(
            "unsupported suite version {} (supported: {})",
            suite.version, SUPPORTED_SUITE_VERSION
        )));
    }

    if suite.cases.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "suite has no cases (file: {})",
            path.display()
        )));
    }

    let mut seen = HashSet::new();
    for case in &suite.cases {
        if !seen.insert(case.id.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "duplicate case id '{}' (file: {})",
                case.id,
                path.display()
            )));
        }
    }

    Ok(suite)
}

pub fn write_sample_suite(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(
        path,
        r#"version: 1
suite: employees-demo
cases:
  - id: it_employees
    question: "Show all IT department employees"
    reference: "SELECT id, name, salary, hire_date FROM employees WHERE department = 'IT';"
  - id: hired_after_2020
    question: "Find employees hired after 2020"
    reference: "SELECT * FROM employees WHERE hire_date > '2020-01-01';"
  - id: count_by_department
    question: "Count employees in each department"
    reference: "SELECT department, COUNT(*) FROM employees GROUP BY department;"
"#,
    )
    .map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}
