//! String template functions

mod html;
mod truncate;

pub use html::{Html, escape};
pub use truncate::{DEFAULT_ELLIPSIS, TruncateConfig, Truncator, truncate, truncate_text};
