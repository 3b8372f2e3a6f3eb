//! UTF-8 codepoint codec.
//!
//! Decoding does not validate: input is expected to be well-formed UTF-8,
//! and malformed sequences produce a best-effort value rather than an
//! error. Reads past the end of a slice behave as if they hit a NUL
//! terminator.

use std::fmt;
use std::ops::Deref;

use super::error::{TextError, TextResult};

/// A Unicode scalar value as produced by [`decode`].
///
/// Kept as a plain integer since the decoder accepts anything its
/// bit-packing can produce, including values `char` cannot hold.
pub type Codepoint = u32;

/// Byte at `pos`, or `0` past the end of `buf`.
#[inline]
pub fn byte_at(buf: &[u8], pos: usize) -> u8 {
    buf.get(pos).copied().unwrap_or(0)
}

/// Return `true` for a continuation byte (`10xxxxxx`).
#[inline]
pub fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Number of bytes in the sequence introduced by `lead`.
///
/// Bytes below `0xC0` (ASCII and stray continuation bytes) count as one.
#[inline]
pub fn sequence_len(lead: u8) -> usize {
    match lead {
        0x00..=0xBF => 1,
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

/// Decode the character at the start of `bytes`.
/// Returns `(codepoint, bytes_consumed)`; an empty slice decodes as NUL.
#[inline]
pub fn decode(bytes: &[u8]) -> (Codepoint, usize) {
    decode_at(bytes, 0)
}

/// Decode the character whose lead byte is at `pos`.
pub fn decode_at(buf: &[u8], pos: usize) -> (Codepoint, usize) {
    let lead = byte_at(buf, pos);
    let len = sequence_len(lead);
    let mut cp = match len {
        1 => return (lead as Codepoint, 1),
        2 => (lead & 0x1F) as Codepoint,
        3 => (lead & 0x0F) as Codepoint,
        _ => (lead & 0x07) as Codepoint,
    };
    for i in 1..len {
        cp = (cp << 6) | (byte_at(buf, pos + i) & 0x3F) as Codepoint;
    }
    (cp, len)
}

/// An encoded character: up to four bytes followed by a NUL.
///
/// Returned by value from [`encode`], so results never share storage.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedChar {
    buf: [u8; 5],
    len: u8,
}

impl EncodedChar {
    /// Encoded bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// Encoded bytes followed by a NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..self.len as usize + 1]
    }

    /// The encoding as `&str`, if it is valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()).ok()
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Decode the stored bytes back into a codepoint.
    pub fn codepoint(&self) -> Codepoint {
        decode(self.as_bytes()).0
    }

    /// Copy the bytes and a NUL terminator into `out`.
    /// Returns the number of bytes written, excluding the terminator.
    pub fn write_to(&self, out: &mut [u8]) -> TextResult<usize> {
        let bytes = self.as_bytes_with_nul();
        if out.len() < bytes.len() {
            return Err(TextError::BufferTooSmall {
                needed: bytes.len(),
                available: out.len(),
            });
        }
        out[..bytes.len()].copy_from_slice(bytes);
        Ok(self.len())
    }
}

impl Deref for EncodedChar {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for EncodedChar {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncodedChar(U+{:04X}, {:02X?})", self.codepoint(), self.as_bytes())
    }
}

impl From<char> for EncodedChar {
    fn from(ch: char) -> Self {
        encode(ch as Codepoint)
    }
}

/// Encode `cp`, picking the sequence length by magnitude.
pub fn encode(cp: Codepoint) -> EncodedChar {
    let mut buf = [0u8; 5];
    let tail = if cp > 0xFFFF {
        buf[0] = (0xF0 | (cp >> 18)) as u8;
        3
    } else if cp > 0x7FF {
        buf[0] = (0xE0 | (cp >> 12)) as u8;
        2
    } else if cp > 0x7F {
        buf[0] = (0xC0 | (cp >> 6)) as u8;
        1
    } else {
        buf[0] = cp as u8;
        0
    };
    for i in 0..tail {
        let shift = (tail - 1 - i) * 6;
        buf[1 + i] = 0x80 | ((cp >> shift) & 0x3F) as u8;
    }
    EncodedChar {
        buf,
        len: (tail + 1) as u8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_lengths() {
        assert_eq!(encode(0x41).as_bytes(), b"A");
        assert_eq!(encode(0x7F).len(), 1);
        assert_eq!(encode(0x80).len(), 2);
        assert_eq!(encode(0x7FF).len(), 2);
        assert_eq!(encode(0x800).len(), 3);
        assert_eq!(encode(0xFFFF).len(), 3);
        assert_eq!(encode(0x10000).len(), 4);
        assert_eq!(encode(0x10FFFF).len(), 4);
    }

    #[test]
    fn test_encode_matches_std() {
        for ch in ['\u{00E9}', '\u{0628}', '\u{4E16}', '\u{FE91}', '\u{1F600}'] {
            let mut expected = [0u8; 4];
            assert_eq!(encode(ch as u32).as_bytes(), ch.encode_utf8(&mut expected).as_bytes());
        }
    }

    #[test]
    fn test_encode_is_nul_terminated() {
        let enc = encode(0xFE91);
        assert_eq!(enc.as_bytes_with_nul(), &[0xEF, 0xBA, 0x91, 0x00]);
        assert_eq!(enc.as_str(), Some("\u{FE91}"));
    }

    #[test]
    fn test_decode_multibyte() {
        let bytes = "\u{4E16}\u{754C}".as_bytes();
        assert_eq!(decode(bytes), (0x4E16, 3));
        assert_eq!(decode_at(bytes, 3), (0x754C, 3));
    }

    #[test]
    fn test_decode_empty_is_nul() {
        assert_eq!(decode(b""), (0, 1));
        assert_eq!(decode_at(b"ab", 2), (0, 1));
    }

    #[test]
    fn test_decode_truncated_is_best_effort() {
        // Missing continuation bytes read as zero bits.
        let (cp, len) = decode(&[0xE4]);
        assert_eq!(len, 3);
        assert_eq!(cp, 0x4000);
    }

    #[test]
    fn test_decode_stray_continuation() {
        assert_eq!(decode(&[0x80, 0x41]), (0x80, 1));
    }

    #[test]
    fn test_sequence_len_values() {
        assert_eq!(sequence_len(b'A'), 1);
        assert_eq!(sequence_len(0x80), 1);
        assert_eq!(sequence_len(0xC3), 2);
        assert_eq!(sequence_len(0xE4), 3);
        assert_eq!(sequence_len(0xF0), 4);
    }

    #[test]
    fn test_write_to() {
        let enc = encode(0x0628);
        let mut out = [0xFFu8; 5];
        assert_eq!(enc.write_to(&mut out), Ok(2));
        assert_eq!(&out[..3], &[0xD8, 0xA8, 0x00]);

        let mut small = [0u8; 2];
        assert_eq!(
            enc.write_to(&mut small),
            Err(TextError::BufferTooSmall { needed: 3, available: 2 })
        );
    }

    #[test]
    fn test_debug_format() {
        let debug = format!("{:?}", encode(0x0628));
        assert!(debug.contains("U+0628"));
    }

    proptest! {
        #[test]
        fn roundtrip_all_lengths(cp in 0u32..=0x10FFFF) {
            let enc = encode(cp);
            prop_assert_eq!(decode(enc.as_bytes()), (cp, enc.len()));
            prop_assert_eq!(enc.codepoint(), cp);
        }

        #[test]
        fn encode_agrees_with_std(ch in any::<char>()) {
            let mut expected = [0u8; 4];
            let expected = ch.encode_utf8(&mut expected);
            let enc = EncodedChar::from(ch);
            prop_assert_eq!(enc.as_bytes(), expected.as_bytes());
        }
    }
}
