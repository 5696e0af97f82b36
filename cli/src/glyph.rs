use std::path::{Path, PathBuf};

use bunny_engine::gfx::{BackendError, FilterMode, Texture, TextureId};
use log::debug;

/// Pixels covered by one terminal cell.
pub const CELL_WIDTH: u32 = 8;
pub const CELL_HEIGHT: u32 = 16;

/// A texture made of terminal glyphs.
///
/// Loaded from a text file, one row of glyphs per line. Spaces are
/// transparent. Only the opaque glyphs are kept, as offsets from the top-left
/// cell, so drawing touches nothing but visible cells.
#[derive(Debug)]
pub struct GlyphTexture {
    id: TextureId,
    source: PathBuf,
    columns: u32,
    rows: u32,
    opaque: Vec<(u16, u16, char)>,
    filter: FilterMode,
}

impl GlyphTexture {
    /// Parse glyph art. Trailing blank lines are ignored.
    pub fn parse(id: TextureId, source: &Path, art: &str) -> Result<Self, BackendError> {
        let lines: Vec<&str> = art.trim_end().lines().collect();
        let mut opaque = Vec::new();
        let mut columns = 0;

        for (row, line) in lines.iter().enumerate() {
            let line = line.trim_end();
            columns = columns.max(line.chars().count());
            for (column, glyph) in line.chars().enumerate() {
                if !glyph.is_whitespace() {
                    opaque.push((column as u16, row as u16, glyph));
                }
            }
        }

        if opaque.is_empty() {
            return Err(BackendError::EmptyTexture {
                path: source.to_path_buf(),
            });
        }

        Ok(Self {
            id,
            source: source.to_path_buf(),
            columns: columns as u32,
            rows: lines.len() as u32,
            opaque,
            filter: FilterMode::default(),
        })
    }

    /// Width in cells.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Height in cells.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Visible glyphs as `(column, row, glyph)` offsets.
    pub fn opaque(&self) -> &[(u16, u16, char)] {
        &self.opaque
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    /// Map a pixel position to the cell this texture's top-left lands in.
    pub fn cell_of(&self, x: f32, y: f32) -> (i64, i64) {
        let column = x / CELL_WIDTH as f32;
        let row = y / CELL_HEIGHT as f32;
        match self.filter {
            FilterMode::Point => (column.floor() as i64, row.floor() as i64),
            FilterMode::Bilinear => (column.round() as i64, row.round() as i64),
        }
    }
}

impl Texture for GlyphTexture {
    fn id(&self) -> TextureId {
        self.id
    }

    fn width(&self) -> u32 {
        self.columns * CELL_WIDTH
    }

    fn height(&self) -> u32 {
        self.rows * CELL_HEIGHT
    }

    fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }
}

impl Drop for GlyphTexture {
    fn drop(&mut self) {
        debug!("released texture {:?} ({})", self.id, self.source.display());
    }
}
