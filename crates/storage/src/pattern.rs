//! LIKE pattern construction shared by both backends.

use contact_list_core::normalize_keyword;

/// Escape special characters for LIKE pattern matching (`ESCAPE '\'`).
pub(crate) fn escape_like(s: &str) -> String {
    s.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}

/// Substring pattern for a raw search keyword.
pub(crate) fn contains_pattern(keyword: &str) -> String {
    format!("%{}%", escape_like(&normalize_keyword(keyword)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_and_wraps() {
        assert_eq!(contains_pattern("  JoH "), "%joh%");
        assert_eq!(contains_pattern(""), "%%");
    }

    #[test]
    fn escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
