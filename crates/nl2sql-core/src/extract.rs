//! Pulls a SQL statement out of free-form model output.
//!
//! Two passes: a statement terminated by `;`, then a line-based fallback
//! for unterminated statements.

use regex::Regex;
use std::sync::LazyLock;

/// Returned when no statement can be located in the model output.
pub const UNPARSED_SQL: &str = "Could not parse SQL";

// Keywords are plain prefixes: "Without" and "Selected" count as well.
static STATEMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:SELECT|WITH)[\s\S]*?;").expect("statement pattern is valid")
});

static LINE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:SELECT|WITH)").expect("line start pattern is valid"));

static KEYWORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:SELECT|WITH)").expect("keyword pattern is valid"));

// Every line boundary, not just `\n`: CR, vertical tab, form feed, the
// C1/Unicode separators.
static LINE_BREAK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C\x1D\x1E\x{85}\x{2028}\x{2029}]")
        .expect("line break pattern is valid")
});

pub fn extract_sql(raw: &str) -> String {
    if let Some(m) = STATEMENT_RE.find(raw) {
        return m.as_str().trim().to_string();
    }

    let lines = statement_lines(raw);
    if lines.is_empty() {
        tracing::debug!(
            event = "nl2sql.extract.unparsed",
            chars = raw.len(),
            "no SELECT/WITH statement found in model output"
        );
        return UNPARSED_SQL.to_string();
    }
    lines.join("\n")
}

/// Lines of an unterminated statement, trimmed.
///
/// Recording starts at the first line beginning with a keyword. When no
/// line does, it starts at the first keyword found inside a line.
fn statement_lines(raw: &str) -> Vec<&str> {
    let lines: Vec<&str> = LINE_BREAK_RE.split(raw).collect();

    let start = lines
        .iter()
        .position(|l| LINE_START_RE.is_match(l))
        .map(|idx| (idx, 0))
        .or_else(|| {
            lines
                .iter()
                .enumerate()
                .find_map(|(idx, l)| KEYWORD_RE.find(l).map(|m| (idx, m.start())))
        });

    let Some((first, offset)) = start else {
        return Vec::new();
    };

    let mut out = Vec::new();
    for (i, line) in lines[first..].iter().enumerate() {
        let line = if i == 0 { &line[offset..] } else { line };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with("--") || trimmed.starts_with("```") {
            break;
        }
        out.push(trimmed);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminated_statement_is_extracted() {
        let raw = "Here you go:\nSELECT name FROM employees WHERE salary > 5000; -- done";
        assert_eq!(
            extract_sql(raw),
            "SELECT name FROM employees WHERE salary > 5000;"
        );
    }

    #[test]
    fn test_first_statement_wins_and_spans_lines() {
        let raw = "select id,\n  name\nfrom employees;\nSELECT 2;";
        assert_eq!(extract_sql(raw), "select id,\n  name\nfrom employees;");
    }

    #[test]
    fn test_with_clause_is_recognized() {
        let raw = "WITH it AS (SELECT * FROM employees WHERE department = 'IT')\nSELECT COUNT(*) FROM it;";
        assert_eq!(extract_sql(raw), raw);
    }

    #[test]
    fn test_keyword_prefix_inside_word_starts_statement() {
        let raw = "Without further ado: SELECT * FROM departments;";
        assert_eq!(extract_sql(raw), raw);

        assert_eq!(
            extract_sql("Selected columns id, name\nFROM employees\n\nok"),
            "Selected columns id, name\nFROM employees"
        );
    }

    #[test]
    fn test_fallback_splits_on_carriage_returns() {
        assert_eq!(
            extract_sql("first\rSELECT id FROM t\r\rnoise"),
            "SELECT id FROM t"
        );
        assert_eq!(
            extract_sql("SELECT id\r\nFROM t\r\n\r\nnoise"),
            "SELECT id\nFROM t"
        );
    }

    #[test]
    fn test_fallback_stops_at_blank_line() {
        assert_eq!(
            extract_sql("blah blah SELECT * FROM t\n\nnoise"),
            "SELECT * FROM t"
        );
    }

    #[test]
    fn test_fallback_stops_at_code_fence() {
        let raw = "```sql\nSELECT name\n  FROM employees\n```\nThis lists names.";
        assert_eq!(extract_sql(raw), "SELECT name\nFROM employees");
    }

    #[test]
    fn test_fallback_stops_at_comment() {
        let raw = "  SELECT name FROM employees\n-- all names\nmore text";
        assert_eq!(extract_sql(raw), "SELECT name FROM employees");
    }

    #[test]
    fn test_fallback_prefers_line_start() {
        let raw = "I would select carefully.\nSELECT id FROM employees\n";
        assert_eq!(extract_sql(raw), "SELECT id FROM employees");
    }

    #[test]
    fn test_no_keyword_returns_sentinel() {
        assert_eq!(extract_sql("I cannot answer that."), UNPARSED_SQL);
        assert_eq!(extract_sql(""), UNPARSED_SQL);
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(extract_sql("sElEcT Name FROM Employees;"), "sElEcT Name FROM Employees;");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let inputs = [
            "Answer:\nSELECT department, COUNT(*) FROM employees GROUP BY department;\nThanks",
            "WITH x AS (SELECT 1) SELECT * FROM x; trailing",
        ];
        for raw in inputs {
            let once = extract_sql(raw);
            assert!(once.ends_with(';'));
            assert_eq!(extract_sql(&once), once);
        }
    }
}
