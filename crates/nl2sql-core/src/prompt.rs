//! Prompt construction for the SQL generator.

/// Schema shown to the model with every question.
pub const EMPLOYEES_SCHEMA: &str = "Table employees: id (INT), name (TEXT), department (TEXT), salary (FLOAT), hire_date (DATE)
Table departments: id (INT), name (TEXT), location (TEXT)";

pub fn build_prompt(schema: &str, question: &str) -> String {
    format!(
        "You are an expert in SQL. Convert the following question into a valid SQL query using this schema:
{schema}
Respond with only the SQL statement.
Question: {question}
SQL:
"
    )
}
