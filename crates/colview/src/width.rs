//! Display-width measurement for UTF-8 byte strings.
//!
//! Terminal text is laid out in display cells, not bytes or codepoints. Most
//! characters take one cell, East Asian wide characters take two, and
//! combining marks take none:
//!
//! ```rust
//! use colview::width::display_width;
//!
//! assert_eq!(display_width("hello"), 5);
//! assert_eq!(display_width("日本"), 4);
//! assert_eq!(display_width("e\u{301}"), 1);
//! ```
//!
//! All functions accept raw bytes. Malformed input never fails: every
//! maximal invalid subsequence is measured as a single one-cell replacement
//! glyph, matching what [`String::from_utf8_lossy`] produces for it, and is
//! never split by an offset function.

use unicode_width::UnicodeWidthChar;

/// Width of a single character in display cells.
///
/// Control characters have no defined width and count as zero.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// One measured unit of a byte string: a codepoint or an invalid run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Unit {
    start: usize,
    len: usize,
    width: usize,
}

impl Unit {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Walks `text` one unit at a time, handing each to `f`.
///
/// Stops early when `f` returns `false`.
fn walk_units(text: &[u8], mut f: impl FnMut(Unit) -> bool) {
    let mut pos = 0;
    for chunk in text.utf8_chunks() {
        for c in chunk.valid().chars() {
            let unit = Unit {
                start: pos,
                len: c.len_utf8(),
                width: char_width(c),
            };
            pos += unit.len;
            if !f(unit) {
                return;
            }
        }
        let invalid = chunk.invalid();
        if !invalid.is_empty() {
            let unit = Unit {
                start: pos,
                len: invalid.len(),
                width: 1,
            };
            pos += unit.len;
            if !f(unit) {
                return;
            }
        }
    }
}

fn units(text: &[u8]) -> Vec<Unit> {
    let mut out = Vec::with_capacity(text.len());
    walk_units(text, |unit| {
        out.push(unit);
        true
    });
    out
}

/// Returns the display width of `text` in terminal cells.
///
/// This is the sum of the per-codepoint widths, so a prefix ending on a
/// codepoint boundary is never wider than the whole string.
///
/// ```rust
/// use colview::width::display_width;
///
/// assert_eq!(display_width("师从"), 4);
/// assert_eq!(display_width(b"ab\xffcd"), 5);
/// ```
pub fn display_width<T: AsRef<[u8]> + ?Sized>(text: &T) -> usize {
    let mut total = 0;
    walk_units(text.as_ref(), |unit| {
        total += unit.width;
        true
    });
    total
}

/// Returns the largest byte offset whose prefix is at most `target` cells wide.
///
/// Zero-width codepoints directly following the last kept glyph stay with it.
///
/// ```rust
/// use colview::width::byte_offset_for_prefix_width;
///
/// // "师" is 3 bytes and 2 cells; a 3-cell budget cannot fit the second glyph.
/// assert_eq!(byte_offset_for_prefix_width("师从", 3), 3);
/// assert_eq!(byte_offset_for_prefix_width("abc", 10), 3);
/// ```
pub fn byte_offset_for_prefix_width<T: AsRef<[u8]> + ?Sized>(text: &T, target: usize) -> usize {
    let mut used = 0;
    let mut offset = 0;
    walk_units(text.as_ref(), |unit| {
        if used + unit.width > target {
            return false;
        }
        used += unit.width;
        offset = unit.end();
        true
    });
    offset
}

/// Returns the smallest byte offset whose suffix is at most `target` cells wide.
///
/// ```rust
/// use colview::width::byte_offset_for_suffix_width;
///
/// let text = "ab推";
/// assert_eq!(&text[byte_offset_for_suffix_width(text, 3)..], "b推");
/// assert_eq!(&text[byte_offset_for_suffix_width(text, 1)..], "");
/// ```
pub fn byte_offset_for_suffix_width<T: AsRef<[u8]> + ?Sized>(text: &T, target: usize) -> usize {
    let text = text.as_ref();
    let mut used = 0;
    let mut offset = text.len();
    for unit in units(text).iter().rev() {
        if used + unit.width > target {
            break;
        }
        used += unit.width;
        offset = unit.start;
    }
    offset
}

/// Keeps the longest prefix of `s` that fits in `width` cells.
pub fn keep_prefix(s: &str, width: usize) -> &str {
    &s[..byte_offset_for_prefix_width(s, width)]
}

/// Keeps the longest suffix of `s` that fits in `width` cells.
pub fn keep_suffix(s: &str, width: usize) -> &str {
    &s[byte_offset_for_suffix_width(s, width)..]
}

/// Pads `s` with trailing spaces up to `width` cells (left-aligned text).
///
/// Text already at least `width` cells wide is returned unchanged.
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}

/// Pads `s` with leading spaces up to `width` cells (right-aligned text).
pub fn pad_left(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.extend(std::iter::repeat(' ').take(width - current));
    out.push_str(s);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn width_mixed_scripts() {
        assert_eq!(display_width("师从螺丝刀"), 10);
        assert_eq!(display_width("йклм"), 4);
        assert_eq!(display_width("师从螺丝刀йклмнопрстуфхцчшщьыъэюя"), 33);
        assert_eq!(display_width("яюэъыьщшчцхфутсрпонмлкйизжёедгв推"), 33);
    }

    #[test]
    fn width_combining_marks_are_zero() {
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(display_width("\u{200b}"), 0);
    }

    #[test]
    fn width_invalid_bytes_count_as_one_cell() {
        assert_eq!(display_width(b"\xff"), 1);
        assert_eq!(display_width(b"a\xffb"), 3);
        // Truncated 3-byte sequence is one maximal invalid subpart.
        assert_eq!(display_width(b"a\xe4\xb8"), 2);
        assert_eq!(
            display_width(b"a\xe4\xb8"),
            display_width(&*String::from_utf8_lossy(b"a\xe4\xb8"))
        );
    }

    #[test]
    fn prefix_offset_never_splits_wide_glyph() {
        let text = "师从螺";
        assert_eq!(byte_offset_for_prefix_width(text, 0), 0);
        assert_eq!(byte_offset_for_prefix_width(text, 1), 0);
        assert_eq!(byte_offset_for_prefix_width(text, 2), 3);
        assert_eq!(byte_offset_for_prefix_width(text, 5), 6);
        assert_eq!(byte_offset_for_prefix_width(text, 6), 9);
        assert_eq!(byte_offset_for_prefix_width(text, 100), 9);
    }

    #[test]
    fn prefix_offset_keeps_combining_mark_with_base() {
        let text = "ae\u{301}b";
        assert_eq!(&text[..byte_offset_for_prefix_width(text, 2)], "ae\u{301}");
    }

    #[test]
    fn prefix_offset_treats_invalid_run_as_unit() {
        let text: &[u8] = b"a\xe4\xb8b";
        assert_eq!(byte_offset_for_prefix_width(text, 1), 1);
        assert_eq!(byte_offset_for_prefix_width(text, 2), 3);
        assert_eq!(byte_offset_for_prefix_width(text, 3), 4);
    }

    #[test]
    fn suffix_offset_never_splits_wide_glyph() {
        let text = "изжёедгв推";
        assert_eq!(keep_suffix(text, 1), "");
        assert_eq!(keep_suffix(text, 2), "推");
        assert_eq!(keep_suffix(text, 7), "ёедгв推");
        assert_eq!(keep_suffix(text, 10), text);
        assert_eq!(byte_offset_for_suffix_width(text, 0), text.len());
    }

    #[test]
    fn suffix_offset_treats_invalid_run_as_unit() {
        let text: &[u8] = b"a\xe4\xb8b";
        assert_eq!(byte_offset_for_suffix_width(text, 1), 3);
        assert_eq!(byte_offset_for_suffix_width(text, 2), 1);
    }

    #[test]
    fn keep_prefix_examples() {
        assert_eq!(keep_prefix("师从螺丝刀йклм", 10), "师从螺丝刀");
        assert_eq!(keep_prefix("师从螺丝刀йклм", 7), "师从螺");
    }

    #[test]
    fn padding() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_left("ab", 4), "  ab");
        assert_eq!(pad_right("师", 3), "师 ");
        assert_eq!(pad_left("abcdef", 3), "abcdef");
    }

    proptest! {
        #[test]
        fn prefix_width_is_monotonic(s in "\\PC{0,40}") {
            let total = display_width(&s);
            for (i, _) in s.char_indices() {
                prop_assert!(display_width(&s[..i]) <= total);
            }
        }

        #[test]
        fn prefix_offset_fits_budget(s in "[a-zя-ё师从螺丝刀\u{301}]{0,30}", target in 0usize..40) {
            let offset = byte_offset_for_prefix_width(&s, target);
            prop_assert!(s.is_char_boundary(offset));
            prop_assert!(display_width(&s[..offset]) <= target);
            if offset < s.len() {
                // The next glyph would overflow.
                let next = s[offset..].chars().next().map(char_width).unwrap_or(0);
                prop_assert!(display_width(&s[..offset]) + next > target);
            }
        }

        #[test]
        fn suffix_offset_fits_budget(s in "[a-zя-ё师从螺丝刀]{0,30}", target in 0usize..40) {
            let offset = byte_offset_for_suffix_width(&s, target);
            prop_assert!(s.is_char_boundary(offset));
            prop_assert!(display_width(&s[offset..]) <= target);
        }

        #[test]
        fn arbitrary_bytes_never_panic(bytes in prop::collection::vec(any::<u8>(), 0..64), target in 0usize..64) {
            let width = display_width(&bytes);
            let prefix = byte_offset_for_prefix_width(&bytes, target);
            let suffix = byte_offset_for_suffix_width(&bytes, target);
            prop_assert!(prefix <= bytes.len());
            prop_assert!(suffix <= bytes.len());
            prop_assert!(display_width(&bytes[..prefix]) <= width);
        }
    }
}
