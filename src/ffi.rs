//! C ABI for the editor core.
//!
//! Buffers are NUL-terminated `const char *` strings. A NULL buffer is
//! treated as empty. Shaping writes into a caller-provided buffer, so no
//! state is shared between calls.

use std::ffi::CStr;
use std::slice;

use libc::{c_char, c_int};

use crate::core::{char_count, display_width, is_combining_mark, is_nonprintable, next_char, prev_char};
use crate::text::Shaper;

/// Bytes of the NUL-terminated string at `s`, without the terminator.
///
/// # Safety
/// `s` must be NULL or point to a NUL-terminated string that outlives `'a`.
unsafe fn c_text<'a>(s: *const c_char) -> &'a [u8] {
    if s.is_null() {
        &[]
    } else {
        CStr::from_ptr(s).to_bytes()
    }
}

/// Saturate a count at `c_int::MAX`.
fn clamp_count(n: usize) -> c_int {
    c_int::try_from(n).unwrap_or(c_int::MAX)
}

/// Number of characters in `s`, saturating at `INT_MAX`.
///
/// # Safety
/// `s` must be NULL or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn neomacs_uc_slen(s: *const c_char) -> c_int {
    clamp_count(char_count(c_text(s)))
}

/// Pointer to the character after `s`; `s` itself at the terminator.
///
/// # Safety
/// `s` must be NULL or point at a lead byte of a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn neomacs_uc_next(s: *const c_char) -> *const c_char {
    if s.is_null() {
        return s;
    }
    s.add(next_char(c_text(s), 0))
}

/// Pointer to the character before `s`, never before `beg`.
///
/// # Safety
/// `beg` and `s` must point into the same string with `beg <= s`.
#[no_mangle]
pub unsafe extern "C" fn neomacs_uc_prev(beg: *const c_char, s: *const c_char) -> *const c_char {
    if beg.is_null() || s.is_null() || s <= beg {
        return s;
    }
    let len = s.offset_from(beg) as usize;
    let buf = slice::from_raw_parts(beg as *const u8, len);
    beg.add(prev_char(buf, len))
}

/// Display columns of `cp`.
#[no_mangle]
pub extern "C" fn neomacs_uc_wid(cp: c_int) -> c_int {
    display_width(cp as u32) as c_int
}

/// Nonzero if `cp` should be drawn as a placeholder.
#[no_mangle]
pub extern "C" fn neomacs_uc_isbell(cp: c_int) -> c_int {
    is_nonprintable(cp as u32) as c_int
}

/// Nonzero if `cp` is an Arabic combining mark.
#[no_mangle]
pub extern "C" fn neomacs_uc_iscomb(cp: c_int) -> c_int {
    is_combining_mark(cp as u32) as c_int
}

/// Shape the character at `s` into `out`, NUL-terminated.
///
/// Returns the number of bytes written (excluding the NUL), or -1 when
/// the character needs no shaping or `out` cannot hold the result.
/// Five bytes are always enough.
///
/// # Safety
/// `beg` must be a valid NUL-terminated string containing `s`, and `out`
/// must be valid for `out_len` bytes of writes.
#[no_mangle]
pub unsafe extern "C" fn neomacs_uc_shape(
    beg: *const c_char,
    s: *const c_char,
    out: *mut c_char,
    out_len: usize,
) -> c_int {
    if beg.is_null() || s.is_null() || out.is_null() || s < beg {
        return -1;
    }
    let buf = c_text(beg);
    let pos = s.offset_from(beg) as usize;
    let Some(glyph) = Shaper::default().shape(buf, pos) else {
        return -1;
    };
    let out = slice::from_raw_parts_mut(out as *mut u8, out_len);
    match glyph.write_to(out) {
        Ok(len) => len as c_int,
        Err(err) => {
            log::warn!("neomacs_uc_shape: {}", err);
            -1
        }
    }
}
