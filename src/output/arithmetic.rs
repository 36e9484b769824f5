//! Output formatting for arithmetic results

use owo_colors::OwoColorize;
use serde::Serialize;

use crate::value::Value;

#[derive(Debug, Serialize)]
struct ArithmeticResult {
    expression: String,
    result: String,
    #[serde(rename = "type")]
    type_name: String,
}

impl ArithmeticResult {
    fn new(a: &Value, op: char, b: &Value, result: &Value) -> Self {
        Self {
            expression: format!("{} {} {}", a, op, b),
            result: result.to_string(),
            type_name: result.type_of().to_string(),
        }
    }
}

/// Format the result of `a op b` as text
pub fn format_arithmetic(a: &Value, op: char, b: &Value, result: &Value) -> String {
    let result = ArithmeticResult::new(a, op, b, result);
    format!(
        "{} = {} {}\n",
        result.expression.dimmed(),
        result.result.green().bold(),
        format!("({})", result.type_name).dimmed()
    )
}

/// Format the result of `a op b` as JSON
pub fn format_arithmetic_json(a: &Value, op: char, b: &Value, result: &Value) -> String {
    serde_json::to_string_pretty(&ArithmeticResult::new(a, op, b, result))
        .unwrap_or_else(|_| "{}".to_string())
}
