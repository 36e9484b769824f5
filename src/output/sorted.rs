//! Output formatting for sorted maps

use owo_colors::OwoColorize;
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::sort::SortedMap;

#[derive(Tabled, Serialize)]
struct EntryRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "type")]
    key_type: String,
    #[tabled(rename = "Value")]
    value: String,
}

fn rows(sorted: &SortedMap, max_len: Option<usize>) -> Vec<EntryRow> {
    let fit = |s: String| match max_len {
        Some(max_len) => super::shorten(&s, max_len),
        None => s,
    };
    sorted
        .iter()
        .map(|(key, value)| EntryRow {
            key: fit(key.to_string()),
            key_type: key.type_of().to_string(),
            value: fit(value.to_string()),
        })
        .collect()
}

/// Format sorted entries as a table
pub fn format_sorted_map(sorted: &SortedMap) -> String {
    if sorted.is_empty() {
        return format!("{}\n", "(empty map)".dimmed());
    }

    let header = format!("{} entries in key order:", sorted.len());
    let table = Table::new(rows(sorted, Some(60))).to_string();
    format!("{}\n\n{}\n", header.bold(), table)
}

/// Format sorted entries as a JSON array
pub fn format_sorted_map_json(sorted: &SortedMap) -> String {
    serde_json::to_string_pretty(&rows(sorted, None)).unwrap_or_else(|_| "[]".to_string())
}
