//! Character-boundary navigation over UTF-8 byte buffers.
//!
//! Buffers follow the editor's NUL-terminated convention: the text ends
//! at the first NUL byte or at the end of the slice. Positions are byte
//! offsets that must point at a lead byte; no function here returns an
//! offset inside a multi-byte sequence. Boundaries come from the byte
//! patterns alone, nothing is decoded.
//!
//! Only well-formed UTF-8 is guaranteed to navigate correctly. Malformed
//! input is handled best-effort and never panics.

use super::utf8::{byte_at, decode_at, is_continuation, Codepoint};

/// Length of the text in bytes, up to the first NUL.
pub fn text_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// Return `true` if `pos` is at the terminator.
#[inline]
pub fn is_end(buf: &[u8], pos: usize) -> bool {
    byte_at(buf, pos) == 0
}

/// Start of the character containing `pos`.
/// Walks back over continuation bytes, never past the buffer start.
pub fn seq_start(buf: &[u8], mut pos: usize) -> usize {
    while pos > 0 && is_continuation(byte_at(buf, pos)) {
        pos -= 1;
    }
    pos
}

/// Position of the *last* byte of the character at `pos`.
///
/// ASCII and the terminator end where they start. A lead byte is
/// skipped, followed by every continuation byte after it.
pub fn seq_end(buf: &[u8], pos: usize) -> usize {
    let lead = byte_at(buf, pos);
    if lead < 0x80 {
        return pos;
    }
    let mut end = pos;
    if lead & 0xC0 == 0xC0 {
        end += 1;
    }
    while is_continuation(byte_at(buf, end)) {
        end += 1;
    }
    end - 1
}

/// Position of the character following `pos`.
/// Stays put at the terminator.
pub fn next_char(buf: &[u8], pos: usize) -> usize {
    let end = seq_end(buf, pos);
    if is_end(buf, end) {
        end
    } else {
        end + 1
    }
}

/// Position of the character preceding `pos`.
/// Stays put at the buffer start.
pub fn prev_char(buf: &[u8], pos: usize) -> usize {
    if pos == 0 {
        0
    } else {
        seq_start(buf, pos - 1)
    }
}

/// Count the characters in `buf`.
pub fn char_count(buf: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while !is_end(buf, pos) {
        pos = seq_end(buf, pos) + 1;
        count += 1;
    }
    count
}

/// Byte position of the character with index `index`.
///
/// An index equal to the character count maps to the end position.
/// Returns `None` past that, the "no such character" result.
pub fn char_to_byte_pos(buf: &[u8], index: usize) -> Option<usize> {
    let mut i = 0;
    let mut pos = 0;
    while !is_end(buf, pos) {
        if i == index {
            return Some(pos);
        }
        i += 1;
        pos = next_char(buf, pos);
    }
    (i == index).then_some(pos)
}

/// Number of characters that start before `byte_pos`.
pub fn byte_to_char_pos(buf: &[u8], byte_pos: usize) -> usize {
    let mut count = 0;
    let mut pos = 0;
    while pos < byte_pos && !is_end(buf, pos) {
        pos = next_char(buf, pos);
        count += 1;
    }
    count
}

/// Copy the characters `[begin, end)` into a new buffer.
/// Invalid or inverted indices yield an empty buffer.
pub fn substring(buf: &[u8], begin: usize, end: usize) -> Vec<u8> {
    match (char_to_byte_pos(buf, begin), char_to_byte_pos(buf, end)) {
        (Some(from), Some(to)) if from <= to => {
            buf.get(from..to).map(<[u8]>::to_vec).unwrap_or_default()
        }
        _ => Vec::new(),
    }
}

/// Start of the last line: just after the final newline, or `0`.
pub fn last_line_start(buf: &[u8]) -> usize {
    buf[..text_len(buf)]
        .iter()
        .rposition(|&b| b == b'\n')
        .map_or(0, |nl| nl + 1)
}

/// Byte position of every character, plus the end position.
/// The result always has `char_count(buf) + 1` entries.
pub fn char_offsets(buf: &[u8]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(text_len(buf) + 1);
    let mut pos = 0;
    while !is_end(buf, pos) {
        offsets.push(pos);
        pos = next_char(buf, pos);
    }
    offsets.push(pos);
    offsets
}

/// Iterate over `(byte_pos, codepoint)` pairs.
pub fn chars(buf: &[u8]) -> Chars<'_> {
    Chars { buf, pos: 0 }
}

/// Iterator returned by [`chars`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl Iterator for Chars<'_> {
    type Item = (usize, Codepoint);

    fn next(&mut self) -> Option<Self::Item> {
        if is_end(self.buf, self.pos) {
            return None;
        }
        let start = self.pos;
        let (cp, _) = decode_at(self.buf, start);
        self.pos = next_char(self.buf, start);
        Some((start, cp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // "caf" + e-acute (2 bytes) + CJK (3 bytes) + emoji (4 bytes)
    const MIXED: &str = "caf\u{00E9}\u{4E16}\u{1F600}";

    #[test]
    fn test_seq_start_and_end() {
        let buf = MIXED.as_bytes();
        assert_eq!(seq_start(buf, 4), 3); // inside e-acute
        assert_eq!(seq_end(buf, 3), 4);
        assert_eq!(seq_start(buf, 7), 5); // last byte of CJK
        assert_eq!(seq_end(buf, 5), 7);
        assert_eq!(seq_end(buf, 8), 11);
        assert_eq!(seq_end(buf, 0), 0);
    }

    #[test]
    fn test_seq_end_at_terminator() {
        assert_eq!(seq_end(b"ab\0cd", 2), 2);
        assert_eq!(seq_end(b"ab", 2), 2);
    }

    #[test]
    fn test_seq_start_never_crosses_buffer_start() {
        assert_eq!(seq_start(&[0x80, 0x80, 0x41], 1), 0);
    }

    #[test]
    fn test_next_walks_and_sticks_at_end() {
        let buf = MIXED.as_bytes();
        let mut pos = 0;
        let mut seen = Vec::new();
        while !is_end(buf, pos) {
            seen.push(pos);
            pos = next_char(buf, pos);
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 5, 8]);
        assert_eq!(pos, buf.len());
        assert_eq!(next_char(buf, pos), pos);
        assert_eq!(next_char(buf, next_char(buf, pos)), pos);
    }

    #[test]
    fn test_prev_walks_and_sticks_at_start() {
        let buf = MIXED.as_bytes();
        assert_eq!(prev_char(buf, buf.len()), 8);
        assert_eq!(prev_char(buf, 8), 5);
        assert_eq!(prev_char(buf, 5), 3);
        assert_eq!(prev_char(buf, 1), 0);
        assert_eq!(prev_char(buf, 0), 0);
    }

    #[test]
    fn test_char_count() {
        assert_eq!(char_count(b""), 0);
        assert_eq!(char_count(b"hello"), 5);
        assert_eq!(char_count(MIXED.as_bytes()), 6);
        assert_eq!(char_count(b"ab\0cd"), 2); // stops at the terminator
    }

    #[test]
    fn test_char_to_byte_pos() {
        let buf = MIXED.as_bytes();
        assert_eq!(char_to_byte_pos(buf, 0), Some(0));
        assert_eq!(char_to_byte_pos(buf, 4), Some(5));
        assert_eq!(char_to_byte_pos(buf, 6), Some(buf.len())); // end position
        assert_eq!(char_to_byte_pos(buf, 7), None);
        assert_eq!(char_to_byte_pos(b"", 0), Some(0));
    }

    #[test]
    fn test_byte_to_char_pos() {
        let buf = MIXED.as_bytes();
        assert_eq!(byte_to_char_pos(buf, 0), 0);
        assert_eq!(byte_to_char_pos(buf, 3), 3);
        assert_eq!(byte_to_char_pos(buf, 4), 4); // mid-character rounds up
        assert_eq!(byte_to_char_pos(buf, 5), 4);
        assert_eq!(byte_to_char_pos(buf, 100), 6);
    }

    #[test]
    fn test_substring() {
        let buf = MIXED.as_bytes();
        assert_eq!(substring(buf, 3, 5), "\u{00E9}\u{4E16}".as_bytes());
        assert_eq!(substring(buf, 0, 6), buf);
        assert_eq!(substring(buf, 2, 2), b"");
    }

    #[test]
    fn test_substring_invalid_indices() {
        let buf = MIXED.as_bytes();
        assert!(substring(buf, 4, 2).is_empty()); // inverted
        assert!(substring(buf, 0, 9).is_empty()); // out of range
        assert!(substring(buf, 9, 10).is_empty());
    }

    #[test]
    fn test_last_line_start() {
        assert_eq!(last_line_start(b"one\ntwo\nthree"), 8);
        assert_eq!(last_line_start(b"single"), 0);
        assert_eq!(last_line_start(b"trailing\n"), 9);
        assert_eq!(last_line_start(b"a\nb\0c\nd"), 2); // ignores text after NUL
    }

    #[test]
    fn test_char_offsets() {
        assert_eq!(char_offsets(MIXED.as_bytes()), vec![0, 1, 2, 3, 5, 8, 12]);
        assert_eq!(char_offsets(b""), vec![0]);
    }

    #[test]
    fn test_chars_iterator() {
        let decoded: Vec<_> = chars("a\u{0628}".as_bytes()).collect();
        assert_eq!(decoded, vec![(0, 0x61), (1, 0x0628)]);
    }

    #[test]
    fn test_stray_continuation_does_not_panic() {
        let buf = [0x41, 0x80, 0x80, 0x42];
        assert_eq!(seq_end(&buf, 1), 2);
        assert_eq!(char_count(&buf), 3);
    }

    fn text_without_nul() -> impl Strategy<Value = String> {
        any::<String>().prop_map(|s| s.replace('\0', ""))
    }

    proptest! {
        #[test]
        fn count_matches_std(s in text_without_nul()) {
            prop_assert_eq!(char_count(s.as_bytes()), s.chars().count());
        }

        #[test]
        fn count_matches_byte_conversion(s in text_without_nul()) {
            let buf = s.as_bytes();
            prop_assert_eq!(char_count(buf), byte_to_char_pos(buf, text_len(buf)));
        }

        #[test]
        fn offsets_match_std(s in text_without_nul()) {
            let mut expected: Vec<usize> = s.char_indices().map(|(i, _)| i).collect();
            expected.push(s.len());
            prop_assert_eq!(char_offsets(s.as_bytes()), expected);
        }

        #[test]
        fn prev_undoes_next(s in text_without_nul()) {
            let buf = s.as_bytes();
            for (pos, _) in s.char_indices() {
                prop_assert_eq!(prev_char(buf, next_char(buf, pos)), pos);
            }
        }

        #[test]
        fn next_undoes_prev(s in text_without_nul()) {
            let buf = s.as_bytes();
            for (pos, _) in s.char_indices().skip(1) {
                prop_assert_eq!(next_char(buf, prev_char(buf, pos)), pos);
            }
        }

        #[test]
        fn decoded_chars_match_std(s in text_without_nul()) {
            let ours: Vec<_> = chars(s.as_bytes()).collect();
            let theirs: Vec<_> = s.char_indices().map(|(i, c)| (i, c as u32)).collect();
            prop_assert_eq!(ours, theirs);
        }
    }
}
