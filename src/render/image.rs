//! The cell buffer every drawing operation ends up in.
//!
//! Row 0 is the **bottom** row; the blit walks rows from the top down.

use crate::core::{
    color::AnsiCode,
    constants::BLANK,
    error::PlotError,
};

/// One character position: a glyph and its foreground colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub glyph: char,
    pub color: AnsiCode,
}

impl Cell {
    #[inline]
    #[must_use]
    pub const fn new(glyph: char, color: AnsiCode) -> Self {
        Self { glyph, color }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(BLANK, AnsiCode::white())
    }
}

/// Fixed-size, row-major grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Image {
    /// Blank image; both dimensions must be positive.
    pub fn new(width: usize, height: usize) -> Result<Self, PlotError> {
        let invalid = || PlotError::InvalidDimensions { width, height };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let w = i32::try_from(width).map_err(|_| invalid())?;
        let h = i32::try_from(height).map_err(|_| invalid())?;
        let len = width.checked_mul(height).ok_or_else(invalid)?;
        Ok(Self {
            width: w,
            height: h,
            cells: vec![Cell::default(); len],
        })
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        // both non-negative and in range here
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Writes outside the image are dropped silently.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, glyph: char, color: AnsiCode) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell::new(glyph, color);
        }
    }

    /// Reads outside the image are an error.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Result<Cell, PlotError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or(PlotError::OutOfRange { x, y })
    }

    pub fn fill(&mut self, glyph: char, color: AnsiCode) {
        self.cells.fill(Cell::new(glyph, color));
    }

    /// Cells of row `y` (0 = bottom), left to right.
    #[must_use]
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        let start = self.index(0, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Rows in screen order: top row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize).rev()
    }

    /// Glyphs only, one string per row, top row first.
    #[must_use]
    pub fn to_lines(&self) -> Vec<String> {
        self.rows_top_down()
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect()
    }
}
