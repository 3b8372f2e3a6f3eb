//! Error types for the character primitives.
//!
//! Classification, navigation and shaping never fail; errors only come
//! from building tables at runtime and from writing into caller buffers.

use thiserror::Error;

/// Main error type for table construction and buffer output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("Range table {table}: entry {index} is out of order")]
    UnsortedTable { table: String, index: usize },

    #[error("Range table {table}: entry {index} overlaps its predecessor")]
    OverlappingRanges { table: String, index: usize },

    #[error("Range table {table}: inverted range {lo:#06X}..={hi:#06X}")]
    InvertedRange { table: String, lo: u32, hi: u32 },

    #[error("Joining table: entry {index} (U+{code:04X}) is out of order")]
    UnsortedJoiningTable { index: usize, code: u32 },

    #[error("Output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Result type alias
pub type TextResult<T> = Result<T, TextError>;
