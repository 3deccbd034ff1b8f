//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

const CLI_SCHEMA_VERSION: &str = "natid.cli.v1";

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Anything other than `json` falls back to a table.
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "json" => OutputFormat::Json,
            _ => OutputFormat::Table,
        }
    }
}

/// Print rows as a table.
pub fn print_table<T: Tabled>(rows: &[T]) {
    if rows.is_empty() {
        println!("{}", "No items found.".dimmed());
    } else {
        println!("{}", Table::new(rows));
    }
}

/// Print a single value as schema-wrapped JSON.
pub fn print_json<T: Serialize + ?Sized>(data: &T) {
    println!("{}", format_json(data, "{}"));
}

/// Print `key: value` lines, aligned on the longest key.
pub fn print_pairs(pairs: &[(&str, String)]) {
    let width = pairs.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (key, value) in pairs {
        let label = format!("{:width$}", format!("{key}:"), width = width + 1);
        println!("{}  {}", label.bold(), value);
    }
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", "Success:".green().bold(), message);
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    let value = serde_json::to_value(data).unwrap_or_else(|_| serde_json::json!({}));
    let wrapped = wrap_with_schema(value);
    let sorted = sort_json_value(wrapped);
    serde_json::to_string_pretty(&sorted).unwrap_or_else(|_| fallback.to_string())
}

fn wrap_with_schema(value: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "schemaVersion": CLI_SCHEMA_VERSION,
        "data": value
    })
}

fn sort_json_value(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Array(values) => {
            serde_json::Value::Array(values.into_iter().map(sort_json_value).collect())
        }
        serde_json::Value::Object(entries) => {
            let mut pairs: Vec<_> = entries.into_iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(&b.0));
            let mut mapped = serde_json::Map::new();
            for (key, value) in pairs {
                mapped.insert(key, sort_json_value(value));
            }
            serde_json::Value::Object(mapped)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_flag() {
        assert_eq!(OutputFormat::from_flag("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_flag("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::from_flag("yaml"), OutputFormat::Table);
    }

    #[test]
    fn json_is_wrapped_with_schema_version() {
        let out = format_json(&serde_json::json!({ "id": "8001014321087" }), "{}");
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "schemaVersion": "natid.cli.v1",
                "data": { "id": "8001014321087" }
            })
        );
    }

    #[test]
    fn json_keys_are_sorted() {
        let out = format_json(&serde_json::json!({ "b": 1, "a": { "d": 2, "c": 3 } }), "{}");
        let a = out.find("\"a\"").unwrap();
        let b = out.find("\"b\"").unwrap();
        let c = out.find("\"c\"").unwrap();
        let d = out.find("\"d\"").unwrap();
        assert!(a < b);
        assert!(c < d);
    }
}
