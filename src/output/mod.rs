mod arithmetic;
mod sorted;

pub use arithmetic::{format_arithmetic, format_arithmetic_json};
pub use sorted::{format_sorted_map, format_sorted_map_json};

/// Fit a table cell into `max_chars` characters, marking the cut with `…`.
pub(crate) fn shorten(cell: &str, max_chars: usize) -> String {
    match cell.char_indices().nth(max_chars) {
        None => cell.to_string(),
        Some(_) => {
            let keep = max_chars.saturating_sub(1);
            let end = cell.char_indices().nth(keep).map_or(cell.len(), |(i, _)| i);
            format!("{}…", &cell[..end])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten() {
        assert_eq!(shorten("short", 60), "short");
        assert_eq!(shorten("abcdef", 6), "abcdef");
        assert_eq!(shorten("abcdefghij", 8), "abcdefg…");
        // Counts characters, not bytes
        assert_eq!(shorten("ééééé", 5), "ééééé");
        assert_eq!(shorten("éééééé", 3), "éé…");
        assert_eq!(shorten("abc", 0), "…");
    }
}
