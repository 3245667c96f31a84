//! Fitting a column's text into its allocated width.
//!
//! | Policy | Content fits | Content too wide |
//! |--------|--------------|------------------|
//! | [`Cropping::None`] | padded to the width | emitted unchanged (overflows) |
//! | [`Cropping::Truncate`] | unchanged | cut to the width |
//! | [`Cropping::Ellipsis`] | unchanged | cut, marker on the cut side |
//!
//! Alignment picks the side that survives a cut: left-aligned text keeps its
//! start, right-aligned text keeps its end.
//!
//! ```rust
//! use colview::{crop_column, Align, Cropping};
//!
//! assert_eq!(crop_column("Hello World", 8, Align::Left, Cropping::Ellipsis, "..."), "Hello...");
//! assert_eq!(crop_column("Hello World", 8, Align::Right, Cropping::Ellipsis, "..."), "...World");
//! assert_eq!(crop_column("Hello", 8, Align::Right, Cropping::None, "..."), "   Hello");
//! ```

use std::borrow::Cow;

use super::types::{Align, Cropping};
use super::width::{display_width, keep_prefix, keep_suffix, pad_left, pad_right};

/// Keeps the aligned side of `text` within `width` cells.
fn keep(text: &str, width: usize, align: Align) -> &str {
    match align {
        Align::Left => keep_prefix(text, width),
        Align::Right => keep_suffix(text, width),
    }
}

/// Pads `text` to `width` cells on the side alignment leaves open.
fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => pad_right(text, width),
        Align::Right => pad_left(text, width),
    }
}

/// Pads only when needed, borrowing otherwise.
fn pad_to<'a>(text: Cow<'a, str>, width: usize, align: Align) -> Cow<'a, str> {
    if display_width(&*text) >= width {
        text
    } else {
        Cow::Owned(pad(&text, width, align))
    }
}

/// Fits `text` into `width` display cells according to `cropping`.
///
/// `marker` is the ellipsis used by [`Cropping::Ellipsis`]. When the width
/// is narrower than the marker, the marker itself is cut down, so an
/// ellipsis column never draws more than `width` cells.
///
/// Cropped output that falls short of `width` because a wide glyph did not
/// fit is padded to exactly `width` cells.
pub fn crop_column<'a>(
    text: &'a str,
    width: usize,
    align: Align,
    cropping: Cropping,
    marker: &'a str,
) -> Cow<'a, str> {
    let content_width = display_width(text);

    if content_width <= width {
        return match cropping {
            Cropping::None => pad_to(Cow::Borrowed(text), width, align),
            Cropping::Truncate | Cropping::Ellipsis => Cow::Borrowed(text),
        };
    }

    match cropping {
        Cropping::None => Cow::Borrowed(text),
        Cropping::Truncate => pad_to(Cow::Borrowed(keep(text, width, align)), width, align),
        Cropping::Ellipsis => {
            let marker_width = display_width(marker);
            if width < marker_width {
                return pad_to(Cow::Borrowed(keep(marker, width, align)), width, align);
            }
            let kept = keep(text, width - marker_width, align);
            let combined = match align {
                Align::Left => format!("{kept}{marker}"),
                Align::Right => format!("{marker}{kept}"),
            };
            pad_to(Cow::Owned(combined), width, align)
        }
    }
}
