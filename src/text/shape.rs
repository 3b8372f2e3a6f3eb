//! Contextual Arabic shaping.
//!
//! Picks the isolated, initial, medial or final presentation form of a
//! letter from its nearest neighbours. Diacritics are skipped when
//! looking for neighbours since they sit above or below the letter
//! rather than between letters. Nothing is cached between calls: the
//! form depends only on the immediate context, and every result is an
//! owned value.
//!
//! The output is meant for the glyph stream only; the logical buffer is
//! never rewritten.

use crate::core::nav::{chars, is_end, next_char, seq_start};
use crate::core::{decode_at, encode, is_arabic_mark, Codepoint, EncodedChar};

use super::joining::{can_join, lookup, JoiningForm};

/// What to emit for a letter joined to neither neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IsolatedForm {
    /// The isolated presentation form, e.g. U+FE8F for beh.
    #[default]
    Presentation,
    /// The base letter itself, for fonts without isolated glyphs.
    Base,
}

/// Shaping options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapingConfig {
    pub isolated_form: IsolatedForm,
}

/// Return `true` for characters the shaper handles: the Arabic block,
/// ZWNJ/ZWJ and the bidi marks after them, and the presentation-form
/// blocks.
#[inline]
pub fn is_shaping_domain(cp: Codepoint) -> bool {
    cp & 0xFF00 == 0x0600
        || cp & 0xFFFC == 0x200C
        || cp & 0xFF00 == 0xFB00
        || cp & 0xFF00 == 0xFC00
        || cp & 0xFF00 == 0xFE00
}

/// Nearest non-mark codepoints before and after `pos`, `0` at either end.
pub fn joining_context(buf: &[u8], pos: usize) -> (Codepoint, Codepoint) {
    let mut prev = 0;
    let mut at = pos;
    while at > 0 {
        at = seq_start(buf, at - 1);
        let (cp, _) = decode_at(buf, at);
        if !is_arabic_mark(cp) {
            prev = cp;
            break;
        }
    }

    let mut next = 0;
    let mut at = pos;
    while !is_end(buf, at) {
        at = next_char(buf, at);
        let (cp, _) = decode_at(buf, at);
        if !is_arabic_mark(cp) {
            next = cp;
            break;
        }
    }
    (prev, next)
}

/// Presentation form of `cur` between `prev` and `next`.
///
/// Characters without a joining entry, and forms the table lacks, come
/// back as `cur`; the result is never `0` unless `cur` is.
pub fn shape_codepoint(
    cur: Codepoint,
    prev: Codepoint,
    next: Codepoint,
    config: &ShapingConfig,
) -> Codepoint {
    let Some(entry) = lookup(cur) else {
        return cur;
    };
    let form = JoiningForm::from_context(can_join(prev, cur), can_join(cur, next));
    let glyph = match (form, config.isolated_form) {
        (JoiningForm::Isolated, IsolatedForm::Base) => Some(entry.code),
        _ => entry.form(form),
    };
    glyph.unwrap_or(cur)
}

/// Shapes characters in a buffer with a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Shaper {
    config: ShapingConfig,
}

impl Shaper {
    pub fn new(config: ShapingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ShapingConfig {
        &self.config
    }

    /// Shape the character at `pos`.
    ///
    /// Returns `None` when the character is outside the shaping domain
    /// (or `pos` is at the end); otherwise the encoded glyph to draw.
    pub fn shape(&self, buf: &[u8], pos: usize) -> Option<EncodedChar> {
        let (cur, _) = decode_at(buf, pos);
        if cur == 0 || !is_shaping_domain(cur) {
            return None;
        }
        let (prev, next) = joining_context(buf, pos);
        let glyph = shape_codepoint(cur, prev, next, &self.config);
        log::trace!(
            "shape U+{:04X} (prev U+{:04X}, next U+{:04X}) -> U+{:04X}",
            cur,
            prev,
            next,
            glyph
        );
        Some(encode(glyph))
    }

    /// Copy `buf` with every shapeable character replaced by its glyph.
    pub fn shape_line(&self, buf: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(buf.len());
        for (pos, _) in chars(buf) {
            match self.shape(buf, pos) {
                Some(glyph) => out.extend_from_slice(&glyph),
                None => out.extend_from_slice(&buf[pos..next_char(buf, pos)]),
            }
        }
        out
    }
}

/// Shape the character at `pos` with the default configuration.
pub fn shape(buf: &[u8], pos: usize) -> Option<EncodedChar> {
    Shaper::default().shape(buf, pos)
}

/// Shape a whole buffer with the default configuration.
pub fn shape_line(buf: &[u8]) -> Vec<u8> {
    Shaper::default().shape_line(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(text: &str, pos: usize) -> Option<Codepoint> {
        shape(text.as_bytes(), pos).map(|glyph| glyph.codepoint())
    }

    #[test]
    fn test_beh_in_all_positions() {
        // each beh is two bytes
        assert_eq!(shaped("\u{0628}\u{0628}\u{0628}", 2), Some(0xFE92)); // medial
        assert_eq!(shaped("\u{0628}\u{0628}", 0), Some(0xFE91)); // initial
        assert_eq!(shaped("\u{0628}\u{0628}", 2), Some(0xFE90)); // final
        assert_eq!(shaped("\u{0628}", 0), Some(0xFE8F)); // isolated
    }

    #[test]
    fn test_diacritic_is_skipped() {
        // beh, fatha, teh
        let text = "\u{0628}\u{064E}\u{062A}";
        assert_eq!(joining_context(text.as_bytes(), 4), (0x0628, 0));
        assert_eq!(shaped(text, 4), Some(0xFE96)); // teh final
        assert_eq!(shaped(text, 0), Some(0xFE91)); // beh initial
    }

    #[test]
    fn test_several_marks_are_skipped() {
        // beh, shadda, fatha, superscript alef, beh
        let text = "\u{0628}\u{0651}\u{064E}\u{0670}\u{0628}";
        assert_eq!(joining_context(text.as_bytes(), 8), (0x0628, 0));
        assert_eq!(shaped(text, 8), Some(0xFE90));
    }

    #[test]
    fn test_right_joining_letters() {
        // alef then beh: alef never joins forward
        assert_eq!(shaped("\u{0627}\u{0628}", 0), Some(0xFE8D));
        assert_eq!(shaped("\u{0627}\u{0628}", 2), Some(0xFE8F));
        // lam then alef
        assert_eq!(shaped("\u{0644}\u{0627}", 0), Some(0xFEDF));
        assert_eq!(shaped("\u{0644}\u{0627}", 2), Some(0xFE8E));
    }

    #[test]
    fn test_zero_width_joiners() {
        // ZWNJ breaks the join
        assert_eq!(shaped("\u{0628}\u{200C}\u{0628}", 0), Some(0xFE8F));
        // ZWJ forces one
        assert_eq!(shaped("\u{200D}\u{0628}", 3), Some(0xFE90));
        // ZWJ itself has no isolated glyph and comes back unchanged
        assert_eq!(shaped("\u{200D}", 0), Some(0x200D));
    }

    #[test]
    fn test_not_applicable() {
        assert_eq!(shaped("a", 0), None);
        assert_eq!(shaped("\u{4E16}", 0), None);
        assert_eq!(shaped("", 0), None);
        assert_eq!(shaped("\u{0628}", 2), None); // at the end
    }

    #[test]
    fn test_domain_without_table_entry_is_identity() {
        assert_eq!(shaped("\u{0660}", 0), Some(0x0660)); // Arabic-Indic zero
        assert_eq!(shaped("\u{064E}", 0), Some(0x064E)); // bare fatha
        assert_eq!(shaped("\u{FE8F}", 0), Some(0xFE8F)); // already a presentation form
    }

    #[test]
    fn test_latin_neighbours_do_not_join() {
        assert_eq!(shaped("a\u{0628}b", 1), Some(0xFE8F));
    }

    #[test]
    fn test_base_isolated_config() {
        let shaper = Shaper::new(ShapingConfig { isolated_form: IsolatedForm::Base });
        let glyph = shaper.shape("\u{0628}".as_bytes(), 0).unwrap();
        assert_eq!(glyph.codepoint(), 0x0628);
        // other forms are unaffected
        let glyph = shaper.shape("\u{0628}\u{0628}".as_bytes(), 0).unwrap();
        assert_eq!(glyph.codepoint(), 0xFE91);
    }

    #[test]
    fn test_shape_codepoint() {
        let config = ShapingConfig::default();
        assert_eq!(shape_codepoint(0x0628, 0x0628, 0x0628, &config), 0xFE92);
        assert_eq!(shape_codepoint(0x0628, 0, 0x0628, &config), 0xFE91);
        assert_eq!(shape_codepoint(0x0628, 0x0628, 0, &config), 0xFE90);
        assert_eq!(shape_codepoint(0x0628, 0, 0, &config), 0xFE8F);
        assert_eq!(shape_codepoint(0x0041, 0x0628, 0x0628, &config), 0x0041);
        // tatweel has no final form and falls back to itself
        assert_eq!(shape_codepoint(0x0640, 0x0628, 0, &config), 0x0640);
    }

    #[test]
    fn test_shape_line() {
        let out = shape_line("\u{0628}\u{062A}".as_bytes());
        assert_eq!(out, "\u{FE91}\u{FE96}".as_bytes());

        let out = shape_line("a \u{0628}\u{064E}\u{062A}!".as_bytes());
        assert_eq!(out, "a \u{FE91}\u{064E}\u{FE96}!".as_bytes());

        assert!(shape_line(b"").is_empty());
    }

    #[test]
    fn test_results_do_not_share_storage() {
        let buf = "\u{0628}\u{062A}".as_bytes();
        let first = shape(buf, 0).unwrap();
        let second = shape(buf, 2).unwrap();
        assert_eq!(first.codepoint(), 0xFE91);
        assert_eq!(second.codepoint(), 0xFE96);
    }

    #[test]
    fn test_shaping_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let buf = "\u{0628}\u{0628}\u{0628}".as_bytes();
                    (0..100)
                        .map(|_| shape(buf, 2).map(|g| g.codepoint()))
                        .all(|cp| cp == Some(0xFE92))
                })
            })
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_domain_mask() {
        assert!(is_shaping_domain(0x0600));
        assert!(is_shaping_domain(0x06FF));
        assert!(is_shaping_domain(0x200C));
        assert!(is_shaping_domain(0x200F));
        assert!(!is_shaping_domain(0x200B));
        assert!(is_shaping_domain(0xFB56));
        assert!(is_shaping_domain(0xFC5E));
        assert!(is_shaping_domain(0xFEFF));
        assert!(!is_shaping_domain(0xFD00));
        assert!(!is_shaping_domain(0x0700));
    }
}
