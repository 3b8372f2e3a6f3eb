//! Neomacs character primitives
//!
//! UTF-8 helpers used by the editor's rendering and cursor-motion code:
//! character-boundary navigation, display widths, printability, and
//! contextual Arabic shaping.
//!
//! # Architecture
//!
//! ```text
//! utf8 codec ──► nav ──► classify / width (range tables) ──► rendering
//!                  └───► text::shape (joining table) ─────► glyph stream
//! ```
//!
//! Everything operates on caller-owned byte buffers and returns owned
//! values, so all functions can be called from any thread.

pub mod core;
#[cfg(feature = "shaping")]
pub mod text;
#[cfg(feature = "ffi")]
pub mod ffi;

pub use crate::core::*;
#[cfg(feature = "shaping")]
pub use crate::text::{shape, Shaper, ShapingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging and check the static tables.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init() -> TextResult<()> {
    if let Err(err) = env_logger::try_init() {
        log::debug!("logger already installed: {}", err);
    }
    log::info!("Neomacs character primitives v{} initializing", VERSION);

    crate::core::verify_tables()?;
    #[cfg(feature = "shaping")]
    crate::text::verify_joining_table()?;
    Ok(())
}
