//! Display width and visibility of characters.
//!
//! The rendering layer asks [`display_width`] for the column advance of
//! every character, and [`is_nonprintable`] whether to draw a
//! placeholder instead of the glyph.

use super::nav::chars;
use super::tables::{DOUBLE_WIDTH, NONPRINTABLE, ZERO_WIDTH};
use super::utf8::Codepoint;

/// Space, tab, newline and printable ASCII: never a placeholder, never a mark.
#[inline]
fn is_plain_ascii(cp: Codepoint) -> bool {
    matches!(cp, 0x09 | 0x0A | 0x20..=0x7E)
}

/// Wide or fullwidth characters occupying two columns.
#[inline]
pub fn is_double_width(cp: Codepoint) -> bool {
    cp >= 0x1100 && DOUBLE_WIDTH.contains(cp)
}

/// Combining marks and zero-width formatting characters.
#[inline]
pub fn is_zero_width(cp: Codepoint) -> bool {
    cp >= 0x0300 && ZERO_WIDTH.contains(cp)
}

/// Columns taken by `cp`: 0, 1 or 2.
#[inline]
pub fn display_width(cp: Codepoint) -> usize {
    if is_zero_width(cp) {
        0
    } else if is_double_width(cp) {
        2
    } else {
        1
    }
}

/// Total columns of the text in `buf`.
pub fn text_width(buf: &[u8]) -> usize {
    chars(buf).map(|(_, cp)| display_width(cp)).sum()
}

/// Return `true` if `cp` should be shown as a placeholder.
pub fn is_nonprintable(cp: Codepoint) -> bool {
    if is_plain_ascii(cp) {
        return false;
    }
    // DEL and the C0 controls; the table only covers 0x00..=0x1F
    if cp < 0x80 {
        return true;
    }
    is_zero_width(cp) || NONPRINTABLE.contains(cp)
}

/// Arabic diacritics, shadda ligatures and superscript alef.
///
/// These attach to the preceding letter and are skipped when looking
/// for a letter's joining neighbours.
#[inline]
pub fn is_arabic_mark(cp: Codepoint) -> bool {
    (0x064B..=0x0655).contains(&cp) // fathatan .. hamza below
        || (0xFC5E..=0xFC63).contains(&cp) // shadda ligatures
        || cp == 0x0670 // superscript alef
}

/// Combining mark test used by script shaping.
/// Narrower than [`is_zero_width`]: only the Arabic marks count.
pub fn is_combining_mark(cp: Codepoint) -> bool {
    !is_plain_ascii(cp) && is_arabic_mark(cp)
}
