use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::html::{Html, escape};
use crate::error::{Error, Result};
use crate::value::{Value, cast};

/// Appended to truncated text when the caller gives no ellipsis
pub const DEFAULT_ELLIPSIS: &str = " …";

// An HTML tag at the start of the haystack: 1 = closing slash, 2 = name,
// 3 = self-closing slash.
static HTML_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^<(/)?([^ ]+?)(?:(\s*/)| .*?)?>"#).unwrap());
// Scripts written without spaces between words
static UNSPACED_SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[\p{Han}\p{Hangul}\p{Hiragana}\p{Katakana}]$"#).unwrap()
});

/// Elements that never take a closing tag
const VOID_ELEMENTS: [&str; 9] = [
    "br", "col", "link", "base", "img", "param", "area", "hr", "input",
];

/// A tag seen while scanning, kept so open tags can be closed after the cut
#[derive(Debug)]
struct HtmlTag<'a> {
    name: &'a str,
    pos: usize,
    open: bool,
}

/// Configuration for [`Truncator`]
#[derive(Debug, Clone)]
pub struct TruncateConfig {
    /// Ellipsis used when the call does not supply one. Emitted as-is, so it
    /// must already be safe HTML.
    pub ellipsis: String,
}

impl Default for TruncateConfig {
    fn default() -> Self {
        Self {
            ellipsis: DEFAULT_ELLIPSIS.to_string(),
        }
    }
}

/// The `truncate` template function
#[derive(Debug, Default)]
pub struct Truncator {
    config: TruncateConfig,
}

impl Truncator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: TruncateConfig) -> Self {
        self.config = config;
        self
    }

    /// Truncate text to `length` characters.
    ///
    /// `options` is either `[text]` or `[ellipsis, text]`. A safe-HTML text
    /// is truncated tag-aware and returned unescaped; plain text is escaped.
    /// A plain ellipsis is escaped, a safe-HTML one is not.
    pub fn truncate(&self, length: &Value, options: &[Value]) -> Result<Html> {
        let length = cast::to_int(length)?;
        let (text, ellipsis) = match options {
            [] => return Err(Error::MissingArguments),
            [text] => (text, self.config.ellipsis.clone()),
            [ellipsis, text] => {
                let marker = cast::to_string(ellipsis).map_err(|_| Error::EllipsisNotString)?;
                if is_safe_html(ellipsis) {
                    (text, marker)
                } else {
                    (text, escape(&marker))
                }
            }
            _ => return Err(Error::TooManyArguments),
        };

        let is_html = is_safe_html(text);
        let text = cast::to_string(text).map_err(|_| Error::TextNotString)?;
        Ok(Html::new(truncate_text(&text, length, &ellipsis, is_html)))
    }
}

/// Truncate with the default configuration. See [`Truncator::truncate`].
pub fn truncate(length: &Value, options: &[Value]) -> Result<Html> {
    Truncator::new().truncate(length, options)
}

fn is_safe_html(value: &Value) -> bool {
    match value {
        Value::Html(_) => true,
        Value::Interface(Some(inner)) => is_safe_html(inner),
        _ => false,
    }
}

fn is_unspaced_script(c: char) -> bool {
    let mut buf = [0; 4];
    UNSPACED_SCRIPT.is_match(c.encode_utf8(&mut buf))
}

/// Cut `text` to at most `max_len` visible characters on a word boundary.
///
/// In HTML mode tags are skipped without counting toward the length, and
/// tags left open by the cut are closed after the ellipsis. In plain mode the
/// output is escaped. If the first word alone is longer than `max_len` it is
/// cut mid-word.
pub fn truncate_text(text: &str, max_len: i64, ellipsis: &str, is_html: bool) -> String {
    let unchanged = || {
        if is_html {
            text.to_string()
        } else {
            escape(text)
        }
    };
    if text.chars().count() as i64 <= max_len {
        return unchanged();
    }

    let mut tags: Vec<HtmlTag> = Vec::new();
    let mut last_word_end = 0;
    let mut last_non_space = 0;
    let mut visible: i64 = 0;
    let mut next_tag = 0;

    for (i, c) in text.char_indices() {
        if i < next_tag {
            continue;
        }

        if is_html && let Some(tag) = HTML_TAG.captures(&text[i..]) {
            next_tag = i + tag[0].len();
            last_word_end = last_non_space;
            let name = tag.get(2).map_or("", |m| m.as_str());
            let self_closing = tag.get(3).is_some();
            if !self_closing && !VOID_ELEMENTS.contains(&name) {
                let open = tag.get(1).is_none();
                trace!(name, pos = i, open, "tag");
                tags.push(HtmlTag { name, pos: i, open });
            }
            continue;
        }

        visible += 1;
        if c.is_whitespace() {
            last_word_end = last_non_space;
        } else if is_unspaced_script(c) {
            last_word_end = i;
        } else {
            last_non_space = i + c.len_utf8();
        }

        if visible > max_len {
            let cut = if last_word_end == 0 { i } else { last_word_end };
            debug!(cut, max_len, is_html, "truncating");
            let head = &text[..cut];
            if is_html {
                return close_open_tags(head, ellipsis, &tags, cut);
            }
            return escape(head) + ellipsis;
        }
    }

    // Only tags were left over
    unchanged()
}

/// Appends the ellipsis, then closing tags for every tag still open at `cut`,
/// innermost first.
///
/// Tags at or past the cut were never emitted and are ignored. A closing tag
/// before the cut hides everything back to the nearest earlier tag of the
/// same name, which is taken to be its opening tag.
fn close_open_tags(head: &str, ellipsis: &str, tags: &[HtmlTag<'_>], cut: usize) -> String {
    let mut out = format!("{}{}", head, ellipsis);
    let mut closed: Option<&str> = None;

    for tag in tags.iter().rev() {
        if tag.pos >= cut || closed.is_some() {
            if closed == Some(tag.name) {
                closed = None;
            }
            continue;
        }
        if tag.open {
            out.push_str(&format!("</{}>", tag.name));
        } else {
            closed = Some(tag.name);
        }
    }

    out
}
