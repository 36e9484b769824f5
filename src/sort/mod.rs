//! Deterministic ordering of map entries
//!
//! Map iteration order is unspecified; templates that range over a map go
//! through [`sort`] so the rendered output is stable.

mod compare;
mod sorted_map;

pub use compare::compare;
pub use sorted_map::{SortedMap, sort, sort_entries};
