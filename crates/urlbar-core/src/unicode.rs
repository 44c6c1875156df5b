//! Text normalization and measurement for typed URL-bar input.

use unicode_width::UnicodeWidthStr;

/// Normalize text for prefix comparison: lower-case, then trim leading
/// whitespace. Trailing whitespace is significant ("brave " is not "brave").
pub fn normalize(s: &str) -> String {
    s.to_lowercase().trim_start().to_string()
}

/// Number of chars in `s`. All suggestion offsets are char offsets.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the char at `char_idx`, or `s.len()` when past the end.
pub fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Terminal-style column width of `s`; hosts use it to place the overlay
/// right after the entered text.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_trims_leading() {
        assert_eq!(normalize("  BrAvE"), "brave");
        assert_eq!(normalize("\tExample.COM"), "example.com");
    }

    #[test]
    fn test_normalize_keeps_trailing_whitespace() {
        assert_eq!(normalize(" Foo  "), "foo  ");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_byte_offset_multibyte() {
        let s = "héllo";
        assert_eq!(byte_offset(s, 0), 0);
        assert_eq!(byte_offset(s, 2), 3);
        assert_eq!(byte_offset(s, 5), s.len());
        assert_eq!(byte_offset(s, 10), s.len());
    }

    #[test]
    fn test_display_width() {
        assert_eq!(display_width("bra"), 3);
        assert_eq!(display_width("日本"), 4);
        assert_eq!(display_width(""), 0);
    }
}
