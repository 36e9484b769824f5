use std::rc::Rc;

use super::{Type, Value};

/// Decodes JSON the way a template engine sees decoded data: numbers become
/// `int64`, `uint64` or `float64`, arrays become slices of interface values,
/// objects become maps from string to interface values.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Nil,
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    n.as_f64().unwrap_or(f64::NAN).into()
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => Value::Slice(
                Rc::new(Type::Interface),
                items
                    .into_iter()
                    .map(|item| Value::interface(item.into()))
                    .collect(),
            ),
            serde_json::Value::Object(fields) => Value::map(
                Type::String,
                Type::Interface,
                fields
                    .into_iter()
                    .map(|(k, v)| (k.into(), Value::interface(v.into())))
                    .collect(),
            ),
        }
    }
}
