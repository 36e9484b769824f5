use clap::{Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};
use crate::value::Value;

#[derive(Parser, Debug)]
#[command(name = "tplkit")]
#[command(
    author,
    version,
    about = "Run template helper functions from the command line"
)]
#[command(
    long_about = "Runs the template helpers used when rendering pages: deterministic \
    map ordering, arithmetic across mixed numeric types, and HTML-aware \
    text truncation."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print map entries in deterministic key order
    Sort {
        /// A JSON object, or a JSON array of [key, value] pairs
        #[arg(value_name = "JSON")]
        map: String,
    },

    /// Apply + - * / to two operands
    Math {
        /// Left operand: a JSON literal, a bare word, or an unsigned integer like 5u
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// One of + - * /
        op: String,
        /// Right operand
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },

    /// Truncate text on a word boundary
    Truncate {
        /// Maximum number of visible characters
        #[arg(allow_hyphen_values = true)]
        length: String,
        /// The text to truncate
        text: String,
        /// Marker appended to truncated text (escaped unless --safe-ellipsis)
        #[arg(short, long)]
        ellipsis: Option<String>,
        /// Treat the ellipsis as safe HTML
        #[arg(long)]
        safe_ellipsis: bool,
        /// Treat the text as safe HTML and keep its tags balanced
        #[arg(long)]
        html: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Args {
    pub fn validate(&self) -> std::result::Result<(), String> {
        match &self.command {
            Command::Math { op, .. } if op.chars().count() != 1 => Err(format!(
                "'{}' is not an operator (expected one of + - * /)",
                op
            )),
            Command::Truncate {
                ellipsis: None,
                safe_ellipsis: true,
                ..
            } => Err("--safe-ellipsis requires --ellipsis".to_string()),
            Command::Truncate { .. } if matches!(self.format, OutputFormat::Json) => {
                Err("--format json is not supported by truncate".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Read a command-line operand as a value.
///
/// Accepts JSON literals (`6`, `-1`, `2.5`, `"a"`, `true`), unsigned
/// integers written with a `u` suffix (`5u`), and otherwise takes the
/// argument as a plain string.
pub fn parse_operand(arg: &str) -> Value {
    if let Some(digits) = arg.strip_suffix('u')
        && let Ok(u) = digits.parse::<u64>()
    {
        return u.into();
    }
    match serde_json::from_str::<serde_json::Value>(arg) {
        Ok(json) => json.into(),
        Err(_) => arg.into(),
    }
}

/// Read key/value pairs from a JSON object or an array of `[key, value]`
/// pairs. Keys that cannot be ordered are rejected.
pub fn parse_map(input: &str) -> Result<Vec<(Value, Value)>> {
    let json: serde_json::Value =
        serde_json::from_str(input).map_err(|e| Error::InvalidMap(e.to_string()))?;

    let entries: Vec<(Value, Value)> = match json {
        serde_json::Value::Object(fields) => fields
            .into_iter()
            .map(|(k, v)| (Value::from(k), Value::from(v)))
            .collect(),
        serde_json::Value::Array(pairs) => pairs
            .into_iter()
            .map(|pair| match pair {
                serde_json::Value::Array(kv) if kv.len() == 2 => {
                    let mut kv = kv.into_iter();
                    let key = kv.next().unwrap_or_default();
                    let value = kv.next().unwrap_or_default();
                    Ok((Value::from(key), Value::from(value)))
                }
                other => Err(Error::InvalidMap(format!(
                    "expected a [key, value] pair, found {}",
                    other
                ))),
            })
            .collect::<Result<_>>()?,
        other => {
            return Err(Error::InvalidMap(format!(
                "expected an object or an array of pairs, found {}",
                other
            )));
        }
    };

    if let Some((key, _)) = entries.iter().find(|(key, _)| !key.is_comparable()) {
        return Err(Error::UnorderableKey(format!(
            "{} of type {}",
            key,
            key.type_of()
        )));
    }
    Ok(entries)
}

/// The single operator character of a validated `math` command.
pub fn operator_char(op: &str) -> char {
    op.chars().next().unwrap_or_default()
}

/// Wrap text for the truncator: safe HTML when the caller vouches for it.
pub fn text_value(text: &str, safe: bool) -> Value {
    if safe {
        Value::html(text)
    } else {
        Value::from(text)
    }
}
