//! Arabic joining table.
//!
//! Maps a base letter to its contextual presentation forms. A letter
//! lacking a form has `None` in that slot: right-joining letters such as
//! alef only have isolated and final forms, hamza only has an isolated one.

use crate::core::{Codepoint, TextError, TextResult};

/// The four contextual shapes of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoiningForm {
    /// Joined to neither neighbour.
    Isolated = 0,
    /// Joined to the following letter only.
    Initial = 1,
    /// Joined to both neighbours.
    Medial = 2,
    /// Joined to the preceding letter only.
    Final = 3,
}

impl JoiningForm {
    /// Form for a letter joined to its predecessor and/or successor.
    pub fn from_context(joins_prev: bool, joins_next: bool) -> Self {
        match (joins_prev, joins_next) {
            (true, true) => JoiningForm::Medial,
            (true, false) => JoiningForm::Final,
            (false, true) => JoiningForm::Initial,
            (false, false) => JoiningForm::Isolated,
        }
    }
}

/// A joinable character and its presentation forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoiningChar {
    pub code: Codepoint,
    forms: [Option<Codepoint>; 4],
}

impl JoiningChar {
    pub const fn new(code: Codepoint, forms: [Option<Codepoint>; 4]) -> Self {
        Self { code, forms }
    }

    #[inline]
    pub fn form(&self, form: JoiningForm) -> Option<Codepoint> {
        self.forms[form as usize]
    }

    /// Has an initial or medial form, so it can connect to what follows.
    #[inline]
    pub fn joins_next(&self) -> bool {
        self.forms[JoiningForm::Initial as usize].is_some()
            || self.forms[JoiningForm::Medial as usize].is_some()
    }

    /// Has a medial or final form, so it can connect to what precedes.
    #[inline]
    pub fn joins_prev(&self) -> bool {
        self.forms[JoiningForm::Medial as usize].is_some()
            || self.forms[JoiningForm::Final as usize].is_some()
    }
}

/// Joins on both sides.
const fn dual(code: Codepoint, isolated: u32, initial: u32, medial: u32, fin: u32) -> JoiningChar {
    JoiningChar::new(code, [Some(isolated), Some(initial), Some(medial), Some(fin)])
}

/// Joins to the preceding letter only.
const fn right(code: Codepoint, isolated: u32, fin: u32) -> JoiningChar {
    JoiningChar::new(code, [Some(isolated), None, None, Some(fin)])
}

/// Never joins.
const fn isolated(code: Codepoint, form: u32) -> JoiningChar {
    JoiningChar::new(code, [Some(form), None, None, None])
}

const JOINING_TABLE: &[JoiningChar] = &[
    isolated(0x0621, 0xFE80),                     // hamza
    right(0x0622, 0xFE81, 0xFE82),                // alef with madda above
    right(0x0623, 0xFE83, 0xFE84),                // alef with hamza above
    right(0x0624, 0xFE85, 0xFE86),                // waw with hamza above
    right(0x0625, 0xFE87, 0xFE88),                // alef with hamza below
    dual(0x0626, 0xFE89, 0xFE8B, 0xFE8C, 0xFE8A), // yeh with hamza above
    right(0x0627, 0xFE8D, 0xFE8E),                // alef
    dual(0x0628, 0xFE8F, 0xFE91, 0xFE92, 0xFE90), // beh
    right(0x0629, 0xFE93, 0xFE94),                // teh marbuta
    dual(0x062A, 0xFE95, 0xFE97, 0xFE98, 0xFE96), // teh
    dual(0x062B, 0xFE99, 0xFE9B, 0xFE9C, 0xFE9A), // theh
    dual(0x062C, 0xFE9D, 0xFE9F, 0xFEA0, 0xFE9E), // jeem
    dual(0x062D, 0xFEA1, 0xFEA3, 0xFEA4, 0xFEA2), // hah
    dual(0x062E, 0xFEA5, 0xFEA7, 0xFEA8, 0xFEA6), // khah
    right(0x062F, 0xFEA9, 0xFEAA),                // dal
    right(0x0630, 0xFEAB, 0xFEAC),                // thal
    right(0x0631, 0xFEAD, 0xFEAE),                // reh
    right(0x0632, 0xFEAF, 0xFEB0),                // zain
    dual(0x0633, 0xFEB1, 0xFEB3, 0xFEB4, 0xFEB2), // seen
    dual(0x0634, 0xFEB5, 0xFEB7, 0xFEB8, 0xFEB6), // sheen
    dual(0x0635, 0xFEB9, 0xFEBB, 0xFEBC, 0xFEBA), // sad
    dual(0x0636, 0xFEBD, 0xFEBF, 0xFEC0, 0xFEBE), // dad
    dual(0x0637, 0xFEC1, 0xFEC3, 0xFEC4, 0xFEC2), // tah
    dual(0x0638, 0xFEC5, 0xFEC7, 0xFEC8, 0xFEC6), // zah
    dual(0x0639, 0xFEC9, 0xFECB, 0xFECC, 0xFECA), // ain
    dual(0x063A, 0xFECD, 0xFECF, 0xFED0, 0xFECE), // ghain
    // tatweel stretches between letters; it has no separate final glyph
    JoiningChar::new(0x0640, [Some(0x0640), Some(0x0640), Some(0x0640), None]),
    dual(0x0641, 0xFED1, 0xFED3, 0xFED4, 0xFED2), // feh
    dual(0x0642, 0xFED5, 0xFED7, 0xFED8, 0xFED6), // qaf
    dual(0x0643, 0xFED9, 0xFEDB, 0xFEDC, 0xFEDA), // kaf
    dual(0x0644, 0xFEDD, 0xFEDF, 0xFEE0, 0xFEDE), // lam
    dual(0x0645, 0xFEE1, 0xFEE3, 0xFEE4, 0xFEE2), // meem
    dual(0x0646, 0xFEE5, 0xFEE7, 0xFEE8, 0xFEE6), // noon
    dual(0x0647, 0xFEE9, 0xFEEB, 0xFEEC, 0xFEEA), // heh
    right(0x0648, 0xFEED, 0xFEEE),                // waw
    right(0x0649, 0xFEEF, 0xFEF0),                // alef maksura
    dual(0x064A, 0xFEF1, 0xFEF3, 0xFEF4, 0xFEF2), // yeh
    dual(0x067E, 0xFB56, 0xFB58, 0xFB59, 0xFB57), // peh
    dual(0x0686, 0xFB7A, 0xFB7C, 0xFB7D, 0xFB7B), // tcheh
    right(0x0698, 0xFB8A, 0xFB8B),                // jeh
    dual(0x06A9, 0xFB8E, 0xFB90, 0xFB91, 0xFB8F), // keheh
    dual(0x06AF, 0xFB92, 0xFB94, 0xFB95, 0xFB93), // gaf
    dual(0x06CC, 0xFBFC, 0xFBFE, 0xFBFF, 0xFBFD), // farsi yeh
    JoiningChar::new(0x200C, [None, None, None, None]), // ZWNJ
    JoiningChar::new(0x200D, [None, Some(0x200D), Some(0x200D), None]), // ZWJ
];

const fn is_sorted(table: &[JoiningChar]) -> bool {
    let mut i = 1;
    while i < table.len() {
        if table[i].code <= table[i - 1].code {
            return false;
        }
        i += 1;
    }
    true
}

const _: () = assert!(is_sorted(JOINING_TABLE), "joining table must be sorted by code");

/// Joinable characters, sorted by base codepoint.
pub static JOINING: &[JoiningChar] = JOINING_TABLE;

/// Find the entry for `cp`.
pub fn lookup(cp: Codepoint) -> Option<&'static JoiningChar> {
    JOINING
        .binary_search_by_key(&cp, |entry| entry.code)
        .ok()
        .map(|index| &JOINING[index])
}

/// Return `true` if `before` connects to the `after` that follows it.
pub fn can_join(before: Codepoint, after: Codepoint) -> bool {
    match (lookup(before), lookup(after)) {
        (Some(a), Some(b)) => a.joins_next() && b.joins_prev(),
        _ => false,
    }
}

/// Check the joining table ordering, reporting the first violation.
pub fn verify_joining_table() -> TextResult<()> {
    for (index, pair) in JOINING.windows(2).enumerate() {
        if pair[1].code <= pair[0].code {
            return Err(TextError::UnsortedJoiningTable {
                index: index + 1,
                code: pair[1].code,
            });
        }
    }
    Ok(())
}
