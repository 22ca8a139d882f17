//! Width helpers for the fixed-width renderers. Widths are terminal display
//! columns, so wide (CJK, emoji) characters count double.

use std::borrow::Cow;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const ELLIPSIS: &str = "...";

pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Cuts `text` to at most `width` columns, ending in `...` when cut.
pub fn truncate(text: &str, width: usize) -> Cow<'_, str> {
    if display_width(text) <= width {
        return Cow::Borrowed(text);
    }
    let budget = width.saturating_sub(ELLIPSIS.len());
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

/// Left-aligns `text` in a field of `width` columns.
pub fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    let mut out = String::with_capacity(text.len() + fill);
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', fill));
    out
}

/// Replaces tabs so column arithmetic stays honest.
pub fn expand_tabs(text: &str) -> Cow<'_, str> {
    if text.contains('\t') {
        Cow::Owned(text.replace('\t', "    "))
    } else {
        Cow::Borrowed(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("abc", 5), "abc");
        assert_eq!(truncate("abcde", 5), "abcde");
    }

    #[test]
    fn long_text_ends_with_ellipsis_within_width() {
        let cut = truncate("abcdefghij", 8);
        assert_eq!(cut, "abcde...");
        assert_eq!(display_width(&cut), 8);
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let cut = truncate("ééééééééé", 6);
        assert_eq!(cut, "ééé...");
    }

    #[test]
    fn wide_characters_count_two_columns() {
        assert_eq!(display_width("变量"), 4);
        let cut = truncate("变量变量变量", 8);
        assert_eq!(cut, "变量...");
        assert!(display_width(&cut) <= 8);

        let cut = truncate("变量变量变量", 9);
        assert_eq!(cut, "变量变...");
        assert_eq!(display_width(&cut), 9);

        // An odd budget leaves a column unused rather than splitting a glyph.
        let cut = truncate("变量变量变量", 10);
        assert_eq!(cut, "变量变...");
    }

    #[test]
    fn pad_fills_to_display_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("变", 4), "变  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }

    #[test]
    fn tabs_become_spaces() {
        assert_eq!(expand_tabs("\tx"), "    x");
    }
}
