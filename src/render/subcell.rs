//! Sub-cell compositor.
//!
//! Presents the image as a finer virtual grid (`width * h_res` by
//! `height * v_res`) and folds every virtual point into the glyph of the
//! cell it falls in.  Points of the pen's colour accumulate; a cell showing
//! another colour is treated as blank first.

use crate::render::{
    brush::PointPen,
    image::Image,
    raster,
    rect::{Point, Rectangle},
};

pub struct SubCellGraphics<'a> {
    image: &'a mut Image,
    pen: PointPen,
    clip: Rectangle,
}

impl<'a> SubCellGraphics<'a> {
    pub fn new(image: &'a mut Image, pen: PointPen) -> Self {
        let clip = Rectangle::new(0, 0, image.width(), image.height())
            .scaled(pen.brush.horizontal_resolution(), pen.brush.vertical_resolution());
        Self { image, pen, clip }
    }

    #[inline]
    #[must_use]
    pub fn horizontal_resolution(&self) -> i32 {
        self.pen.brush.horizontal_resolution()
    }

    #[inline]
    #[must_use]
    pub fn vertical_resolution(&self) -> i32 {
        self.pen.brush.vertical_resolution()
    }

    /// Current clip in virtual coordinates.
    #[inline]
    #[must_use]
    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    /// Restrict drawing to the cells of `cells`.
    pub fn set_cell_clip(&mut self, cells: Rectangle) {
        let full = Rectangle::new(0, 0, self.image.width(), self.image.height());
        let x = cells.x.max(0);
        let y = cells.y.max(0);
        let cut = Rectangle::new(
            x,
            y,
            cells.width.min(full.width - x),
            cells.height.min(full.height - y),
        );
        self.clip = cut.scaled(self.horizontal_resolution(), self.vertical_resolution());
    }

    pub fn draw_point(&mut self, x: i32, y: i32) {
        if !self.clip.contains(x, y) {
            return;
        }
        let (h, v) = (self.horizontal_resolution(), self.vertical_resolution());
        let (cell_x, sub_x) = (x.div_euclid(h), x.rem_euclid(h));
        let (cell_y, sub_y) = (y.div_euclid(v), y.rem_euclid(v));

        if let Ok(cell) = self.image.get(cell_x, cell_y) {
            let current = if cell.color == self.pen.color {
                cell.glyph
            } else {
                ' '
            };
            let glyph = self.pen.brush.render_point(current, sub_x, sub_y);
            self.image.set(cell_x, cell_y, glyph, self.pen.color);
        }
    }

    pub fn draw_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        let clip = self.clip;
        raster::draw_line(&clip, Point::new(x1, y1), Point::new(x2, y2), |x, y| {
            self.draw_point(x, y);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::color::AnsiCode,
        render::brush::{PointBrush, PointPen},
    };

    const BLUE_BRAILLE: PointPen = PointPen::new(PointBrush::BRAILLE, AnsiCode::blue());

    #[test]
    fn points_map_to_cells_and_sub_positions() {
        let mut img = Image::new(3, 2).unwrap();
        let mut g = SubCellGraphics::new(&mut img, BLUE_BRAILLE);
        assert_eq!(g.clip(), Rectangle::new(0, 0, 6, 8));
        g.draw_point(3, 7); // cell (1, 1), right column, top row
        let cell = img.get(1, 1).unwrap();
        assert_eq!(cell.glyph, '⠈');
        assert_eq!(cell.color, AnsiCode::blue());
    }

    #[test]
    fn same_colour_accumulates_to_full_glyph() {
        for brush in [PointBrush::BRAILLE, PointBrush::QUADRANT, PointBrush::DOT] {
            let mut img = Image::new(2, 2).unwrap();
            let pen = PointPen::new(brush, AnsiCode::green());
            let mut g = SubCellGraphics::new(&mut img, pen);
            for x in 0..brush.horizontal_resolution() {
                for y in 0..brush.vertical_resolution() {
                    g.draw_point(x, y);
                }
            }
            assert_eq!(img.get(0, 0).unwrap().glyph, brush.full_glyph());
        }
    }

    #[test]
    fn other_colour_replaces_instead_of_blending() {
        let mut img = Image::new(1, 1).unwrap();
        let mut g = SubCellGraphics::new(&mut img, BLUE_BRAILLE);
        g.draw_point(0, 0);
        g.draw_point(1, 3);
        let red = PointPen::new(PointBrush::BRAILLE, AnsiCode::red());
        let mut g = SubCellGraphics::new(&mut img, red);
        g.draw_point(1, 0);
        let cell = img.get(0, 0).unwrap();
        assert_eq!(cell.glyph, '⢀');
        assert_eq!(cell.color, AnsiCode::red());
    }

    #[test]
    fn points_outside_are_ignored() {
        let mut img = Image::new(1, 1).unwrap();
        let mut g = SubCellGraphics::new(&mut img, BLUE_BRAILLE);
        g.draw_point(-1, 0);
        g.draw_point(2, 0);
        g.draw_point(0, 4);
        assert_eq!(img.get(0, 0).unwrap().glyph, ' ');
    }

    #[test]
    fn infinite_ends_clamp_to_extreme_column() {
        let mut img = Image::new(4, 1).unwrap();
        let mut g = SubCellGraphics::new(&mut img, BLUE_BRAILLE);
        g.draw_line(0, 0, i32::MAX, 0);
        for x in 0..4 {
            assert_eq!(img.get(x, 0).unwrap().glyph, '⣀');
        }
    }

    #[test]
    fn cell_clip_limits_virtual_drawing() {
        let mut img = Image::new(4, 1).unwrap();
        let mut g = SubCellGraphics::new(&mut img, BLUE_BRAILLE);
        g.set_cell_clip(Rectangle::new(1, 0, 2, 1));
        assert_eq!(g.clip(), Rectangle::new(2, 0, 4, 4));
        g.draw_line(0, 0, 7, 0);
        assert_eq!(img.to_lines(), vec![" ⣀⣀ ".to_owned()]);
    }
}
