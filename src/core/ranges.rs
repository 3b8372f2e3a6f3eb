//! Sorted codepoint range tables.
//!
//! A [`RangeTable`] is an ordered list of inclusive `[lo, hi]` intervals.
//! Lookups are a binary search, so the table must be sorted ascending by
//! `lo` with no two intervals overlapping. The static tables enforce this
//! in `const` context; tables built at runtime go through
//! [`RangeTable::try_new`].

use super::error::{TextError, TextResult};
use super::utf8::Codepoint;

/// An inclusive interval of codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharRange {
    pub lo: Codepoint,
    pub hi: Codepoint,
}

impl CharRange {
    pub const fn new(lo: Codepoint, hi: Codepoint) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub const fn contains(&self, cp: Codepoint) -> bool {
        cp >= self.lo && cp <= self.hi
    }
}

/// A named, sorted, non-overlapping list of [`CharRange`]s.
#[derive(Debug, Clone, Copy)]
pub struct RangeTable<'a> {
    name: &'a str,
    ranges: &'a [CharRange],
}

impl<'a> RangeTable<'a> {
    /// Build a table from ranges known to be well formed.
    ///
    /// # Panics
    /// Panics if `ranges` is unsorted, overlapping or holds an inverted
    /// interval. Used in `static` initializers, where the panic becomes a
    /// compile error.
    pub const fn from_sorted(name: &'a str, ranges: &'a [CharRange]) -> Self {
        assert!(is_well_formed(ranges), "range table must be sorted and non-overlapping");
        Self { name, ranges }
    }

    /// Build a table from caller-supplied ranges, checking the ordering.
    pub fn try_new(name: &'a str, ranges: &'a [CharRange]) -> TextResult<Self> {
        let table = Self { name, ranges };
        if let Err(err) = table.validate() {
            log::debug!("rejected range table {:?}: {}", name, err);
            return Err(err);
        }
        Ok(table)
    }

    pub fn name(&self) -> &'a str {
        self.name
    }

    pub fn ranges(&self) -> &'a [CharRange] {
        self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Return `true` if `cp` falls in any interval of the table.
    pub fn contains(&self, cp: Codepoint) -> bool {
        match self.ranges.first() {
            Some(first) if cp >= first.lo => {}
            _ => return false,
        }
        let mut lo = 0usize;
        let mut hi = self.ranges.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            let range = self.ranges[mid];
            if range.contains(cp) {
                return true;
            }
            if cp < range.lo {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        false
    }

    /// Check the ordering invariants, reporting the first violation.
    pub fn validate(&self) -> TextResult<()> {
        for (index, range) in self.ranges.iter().enumerate() {
            if range.lo > range.hi {
                return Err(TextError::InvertedRange {
                    table: self.name.to_string(),
                    lo: range.lo,
                    hi: range.hi,
                });
            }
            if index == 0 {
                continue;
            }
            let prev = self.ranges[index - 1];
            if range.lo < prev.lo {
                return Err(TextError::UnsortedTable {
                    table: self.name.to_string(),
                    index,
                });
            }
            if range.lo <= prev.hi {
                return Err(TextError::OverlappingRanges {
                    table: self.name.to_string(),
                    index,
                });
            }
        }
        Ok(())
    }
}

/// `const` counterpart of [`RangeTable::validate`].
pub const fn is_well_formed(ranges: &[CharRange]) -> bool {
    let mut i = 0;
    while i < ranges.len() {
        if ranges[i].lo > ranges[i].hi {
            return false;
        }
        if i > 0 && ranges[i].lo <= ranges[i - 1].hi {
            return false;
        }
        i += 1;
    }
    true
}
