//! Character classes for cursor motion and text objects.
//!
//! Classification is ASCII-only: anything at or above `0x80` is treated
//! as a printable letter that is neither a space nor a digit. Callers
//! pass a decoded codepoint. Since a multi-byte lead byte is always at
//! least `0xC0`, this gives the same answers as classifying by first byte.

use bitflags::bitflags;

use super::utf8::Codepoint;

bitflags! {
    /// Summary of the predicates below for one character.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CharFlags: u8 {
        const SPACE = 1 << 0;
        const PRINT = 1 << 1;
        const ALPHA = 1 << 2;
        const DIGIT = 1 << 3;
        const WORD = 1 << 4;
    }
}

/// Coarse class used to find word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WordClass {
    Space = 0,
    Word = 1,
    Punct = 2,
}

#[inline]
fn ascii(cp: Codepoint) -> Option<u8> {
    u8::try_from(cp).ok().filter(u8::is_ascii)
}

/// Space, tab, newline, vertical tab, form feed or carriage return.
#[inline]
pub fn is_space(cp: Codepoint) -> bool {
    matches!(ascii(cp), Some(b' ' | b'\t'..=b'\r'))
}

#[inline]
pub fn is_printable(cp: Codepoint) -> bool {
    match ascii(cp) {
        Some(b) => matches!(b, 0x20..=0x7E),
        None => true,
    }
}

#[inline]
pub fn is_alpha(cp: Codepoint) -> bool {
    ascii(cp).map_or(true, |b| b.is_ascii_alphabetic())
}

#[inline]
pub fn is_digit(cp: Codepoint) -> bool {
    ascii(cp).is_some_and(|b| b.is_ascii_digit())
}

/// Space, word constituent (letter, digit, underscore) or punctuation.
pub fn word_class(cp: Codepoint) -> WordClass {
    if is_space(cp) {
        WordClass::Space
    } else if is_alpha(cp) || is_digit(cp) || cp == '_' as Codepoint {
        WordClass::Word
    } else {
        WordClass::Punct
    }
}

/// All predicates at once.
pub fn char_flags(cp: Codepoint) -> CharFlags {
    let mut flags = CharFlags::empty();
    flags.set(CharFlags::SPACE, is_space(cp));
    flags.set(CharFlags::PRINT, is_printable(cp));
    flags.set(CharFlags::ALPHA, is_alpha(cp));
    flags.set(CharFlags::DIGIT, is_digit(cp));
    flags.set(CharFlags::WORD, word_class(cp) == WordClass::Word);
    flags
}
