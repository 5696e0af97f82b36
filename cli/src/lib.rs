//! Terminal presentation backend for the bunnymark.
//!
//! Sprites are drawn as glyph art into an in-memory cell grid that is written
//! to the terminal once per frame with `crossterm`. Mouse clicks and the
//! Shift modifier come from crossterm's mouse capture.

pub mod glyph;
pub mod terminal;

pub use glyph::{CELL_HEIGHT, CELL_WIDTH, GlyphTexture};
pub use terminal::TerminalBackend;
