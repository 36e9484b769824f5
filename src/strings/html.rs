use std::fmt;

use serde::Serialize;

use crate::value::Value;

/// A string that is safe to emit into HTML without further escaping
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Mark `s` as safe. The caller vouches for its contents.
    pub fn new(s: impl Into<String>) -> Self {
        Html(s.into())
    }

    /// Escape plain text into safe HTML.
    pub fn escape(text: &str) -> Self {
        Html(escape(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Html> for Value {
    fn from(html: Html) -> Self {
        Value::html(html.0)
    }
}

/// Escape the five characters significant in HTML text and attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&#34;"),
            c => out.push(c),
        }
    }
    out
}
