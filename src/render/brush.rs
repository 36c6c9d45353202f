//! Brushes pick glyphs, pens pair a brush with a colour.
//!
//! Point brushes are a closed set: a plain character at cell resolution,
//! 2×2 quadrant blocks, or 2×4 braille dots.

use crate::{
    core::{
        color::AnsiCode,
        constants::{BRAILLE_HORIZONTAL_RESOLUTION, BRAILLE_VERTICAL_RESOLUTION, QUADRANT_RESOLUTION},
    },
    render::braille::{self, BRAILLE_FULL},
};

/// Quadrant glyphs indexed by bit mask; bit `y * 2 + x`, `y = 0` is the lower half.
const QUADRANT_GLYPHS: [char; 16] = [
    ' ', '▖', '▗', '▄', '▘', '▌', '▚', '▙', '▝', '▞', '▐', '▟', '▀', '▛', '▜', '█',
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointBrush {
    /// One glyph per cell, no sub-resolution.
    Char(char),
    /// 2×2 quadrant blocks.
    Quadrant,
    /// 2×4 braille dots.
    Braille,
}

impl PointBrush {
    pub const BRAILLE: Self = Self::Braille;
    pub const QUADRANT: Self = Self::Quadrant;
    pub const BLOCK: Self = Self::Char('█');
    pub const STAR: Self = Self::Char('*');
    pub const DOT: Self = Self::Char('•');

    #[inline]
    #[must_use]
    pub const fn horizontal_resolution(self) -> i32 {
        match self {
            Self::Char(_) => 1,
            Self::Quadrant => QUADRANT_RESOLUTION,
            Self::Braille => BRAILLE_HORIZONTAL_RESOLUTION,
        }
    }

    #[inline]
    #[must_use]
    pub const fn vertical_resolution(self) -> i32 {
        match self {
            Self::Char(_) => 1,
            Self::Quadrant => QUADRANT_RESOLUTION,
            Self::Braille => BRAILLE_VERTICAL_RESOLUTION,
        }
    }

    /// Glyph with every sub-position on.
    #[must_use]
    pub const fn full_glyph(self) -> char {
        match self {
            Self::Char(c) => c,
            Self::Quadrant => QUADRANT_GLYPHS[15],
            Self::Braille => BRAILLE_FULL,
        }
    }

    /// New glyph for `current` with sub-position `(x, y)` turned on.
    #[must_use]
    pub fn render_point(self, current: char, x: i32, y: i32) -> char {
        match self {
            Self::Char(c) => c,
            Self::Braille => braille::add_dot(current, x, y),
            Self::Quadrant => {
                if !(0..QUADRANT_RESOLUTION).contains(&x) || !(0..QUADRANT_RESOLUTION).contains(&y) {
                    return current;
                }
                let index = QUADRANT_GLYPHS
                    .iter()
                    .position(|&g| g == current)
                    .unwrap_or(0);
                // x, y in 0..2 here
                QUADRANT_GLYPHS[index | 1 << (y * 2 + x) as usize]
            }
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "braille" => Some(Self::BRAILLE),
            "quadrant" => Some(Self::QUADRANT),
            "block" => Some(Self::BLOCK),
            "star" => Some(Self::STAR),
            "dot" => Some(Self::DOT),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Self::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

/// Glyphs for axis-aligned strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineBrush {
    pub vertical: char,
    pub horizontal: char,
    pub cross: char,
}

impl LineBrush {
    pub const THIN: Self = Self::new('│', '─', '┼');
    pub const BOLD: Self = Self::new('┃', '━', '╋');
    pub const DOUBLE: Self = Self::new('║', '═', '╬');
    pub const DOTTED: Self = Self::new('┊', '╌', '┼');
    pub const DOTTED_BOLD: Self = Self::new('┋', '╍', '╋');
    pub const DASHED: Self = Self::new('╎', '╴', '┤');
    pub const DASHED_BOLD: Self = Self::new('╏', '╸', '┫');
    pub const ASCII: Self = Self::new('|', '-', '+');

    #[must_use]
    pub const fn new(vertical: char, horizontal: char, cross: char) -> Self {
        Self {
            vertical,
            horizontal,
            cross,
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "thin" => Some(Self::THIN),
            "bold" => Some(Self::BOLD),
            "double" => Some(Self::DOUBLE),
            "dotted" => Some(Self::DOTTED),
            "dottedbold" => Some(Self::DOTTED_BOLD),
            "dashed" => Some(Self::DASHED),
            "dashedbold" => Some(Self::DASHED_BOLD),
            "ascii" => Some(Self::ASCII),
            _ => None,
        }
    }
}

/// Style for series and single points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointPen {
    pub brush: PointBrush,
    pub color: AnsiCode,
}

impl PointPen {
    #[must_use]
    pub const fn new(brush: PointBrush, color: AnsiCode) -> Self {
        Self { brush, color }
    }
}

/// Style for grid, axis and tick strokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LinePen {
    pub brush: LineBrush,
    pub color: AnsiCode,
}

impl LinePen {
    #[must_use]
    pub const fn new(brush: LineBrush, color: AnsiCode) -> Self {
        Self { brush, color }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(brush: PointBrush) -> char {
        let mut c = ' ';
        for x in 0..brush.horizontal_resolution() {
            for y in 0..brush.vertical_resolution() {
                c = brush.render_point(c, x, y);
            }
        }
        c
    }

    #[test]
    fn filling_every_sub_position_gives_full_glyph() {
        for brush in [PointBrush::BRAILLE, PointBrush::QUADRANT, PointBrush::STAR] {
            assert_eq!(fill(brush), brush.full_glyph());
        }
    }

    #[test]
    fn quadrant_corners() {
        let q = PointBrush::QUADRANT;
        assert_eq!(q.render_point(' ', 0, 0), '▖');
        assert_eq!(q.render_point(' ', 1, 0), '▗');
        assert_eq!(q.render_point(' ', 0, 1), '▘');
        assert_eq!(q.render_point(' ', 1, 1), '▝');
        assert_eq!(q.render_point('▖', 1, 0), '▄');
        // unknown glyphs count as blank
        assert_eq!(q.render_point('x', 1, 1), '▝');
    }

    #[test]
    fn char_brush_always_replaces() {
        assert_eq!(PointBrush::STAR.render_point('⣿', 0, 0), '*');
        assert_eq!(PointBrush::STAR.horizontal_resolution(), 1);
    }

    #[test]
    fn brushes_by_name() {
        assert_eq!(PointBrush::from_name("Braille"), Some(PointBrush::BRAILLE));
        assert_eq!(PointBrush::from_name("o"), Some(PointBrush::Char('o')));
        assert_eq!(PointBrush::from_name("nope"), None);
        assert_eq!(LineBrush::from_name("dotted-bold"), Some(LineBrush::DOTTED_BOLD));
        assert_eq!(LineBrush::from_name("wavy"), None);
    }
}
