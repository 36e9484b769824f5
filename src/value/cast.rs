//! Loose conversions used for template function arguments

use crate::error::{Error, Result};

use super::Value;

fn cast_error(value: &Value, target: &'static str) -> Error {
    Error::Cast {
        value: value.to_string(),
        type_name: value.type_of().to_string(),
        target,
    }
}

/// Convert a value to an integer.
///
/// Floats are truncated, bools give 1 or 0, nil gives 0, and strings are
/// parsed (see [`parse_int`]). Safe-HTML strings are not accepted.
pub fn to_int(value: &Value) -> Result<i64> {
    match value {
        Value::Nil => Ok(0),
        Value::Int(_, v) => Ok(*v),
        Value::Uint(_, v) => Ok(*v as i64),
        Value::Float(_, v) => Ok(*v as i64),
        Value::Bool(v) => Ok(i64::from(*v)),
        Value::String(s) => parse_int(s).ok_or_else(|| cast_error(value, "int")),
        Value::Interface(Some(inner)) => to_int(inner),
        _ => Err(cast_error(value, "int")),
    }
}

/// Convert a scalar value to its string form.
pub fn to_string(value: &Value) -> Result<String> {
    match value {
        Value::Nil | Value::Interface(None) => Ok(String::new()),
        Value::String(s) | Value::Html(s) => Ok(s.to_string()),
        Value::Int(..) | Value::Uint(..) | Value::Float(..) | Value::Bool(_) => {
            Ok(value.to_string())
        }
        Value::Interface(Some(inner)) => to_string(inner),
        _ => Err(cast_error(value, "string")),
    }
}

/// Drop a fractional part made only of zeros: `"10.00"` becomes `"10"`.
fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((whole, frac)) if !frac.is_empty() && frac.bytes().all(|b| b == b'0') => whole,
        _ => s,
    }
}

/// Parse an integer literal with an optional sign.
///
/// The base follows the prefix: `0x` hexadecimal, `0o` or a bare leading `0`
/// octal, `0b` binary, decimal otherwise.
pub fn parse_int(s: &str) -> Option<i64> {
    let s = trim_zero_decimal(s);
    let (negative, unsigned) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let prefixed = |lower: &str, upper: &str| {
        unsigned
            .strip_prefix(lower)
            .or_else(|| unsigned.strip_prefix(upper))
    };
    let (radix, digits) = if let Some(rest) = prefixed("0x", "0X") {
        (16, rest)
    } else if let Some(rest) = prefixed("0o", "0O") {
        (8, rest)
    } else if let Some(rest) = prefixed("0b", "0B") {
        (2, rest)
    } else if unsigned.len() > 1 && unsigned.starts_with('0') {
        (8, &unsigned[1..])
    } else {
        (10, unsigned)
    };

    // from_str_radix would accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()?;

    if negative {
        (magnitude <= i64::MIN.unsigned_abs()).then(|| (magnitude as i64).wrapping_neg())
    } else {
        i64::try_from(magnitude).ok()
    }
}
