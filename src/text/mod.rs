//! Script shaping for the glyph stream.
//!
//! Currently Arabic only:
//! - `joining` holds the letter-to-presentation-form table
//! - `shape` picks forms from neighbouring letters

pub mod joining;
pub mod shape;

pub use joining::{can_join, lookup, verify_joining_table, JoiningChar, JoiningForm};
pub use shape::{
    is_shaping_domain, joining_context, shape, shape_codepoint, shape_line, IsolatedForm, Shaper,
    ShapingConfig,
};
