//! Template helper functions: deterministic ordering of map entries,
//! arithmetic across mismatched numeric types, and HTML-aware truncation.

pub mod cli;
pub mod error;
pub mod logging;
pub mod math;
pub mod output;
pub mod sort;
pub mod strings;
pub mod value;

pub use error::{Error, Result};
pub use value::Value;
