//! Core character primitives: codec, navigation, classification and widths.

pub mod classify;
pub mod error;
pub mod nav;
pub mod ranges;
pub mod tables;
pub mod utf8;
pub mod width;

use std::sync::OnceLock;

pub use classify::{char_flags, is_alpha, is_digit, is_printable, is_space, word_class, CharFlags, WordClass};
pub use error::{TextError, TextResult};
pub use nav::{
    byte_to_char_pos, char_count, char_offsets, char_to_byte_pos, chars, last_line_start, next_char,
    prev_char, seq_end, seq_start, substring, text_len, Chars,
};
pub use ranges::{CharRange, RangeTable};
pub use utf8::{decode, decode_at, encode, Codepoint, EncodedChar};
pub use width::{
    display_width, is_arabic_mark, is_combining_mark, is_double_width, is_nonprintable, is_zero_width,
    text_width,
};

static TABLES_CHECKED: OnceLock<TextResult<()>> = OnceLock::new();

/// Check the static range tables once, logging the outcome.
///
/// The tables are already checked at compile time; this repeats the
/// check so a failure is reported through the error type.
pub fn verify_tables() -> TextResult<()> {
    TABLES_CHECKED
        .get_or_init(|| {
            for table in tables::all() {
                table.validate()?;
                log::debug!("{} table: {} ranges", table.name(), table.len());
            }
            log::info!("Character range tables validated successfully");
            Ok(())
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verify_tables() {
        assert_eq!(verify_tables(), Ok(()));
        // Second call hits the cached result.
        assert_eq!(verify_tables(), Ok(()));
    }
}
