//! Cell-resolution drawing surface with a clip rectangle.

use crate::{
    core::{color::AnsiCode, constants::BLANK, error::PlotError},
    render::{
        brush::{LinePen, PointPen},
        image::Image,
        raster,
        rect::{Point, Rectangle},
    },
};

/// Direction successive characters of a string advance in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

pub struct Graphics<'a> {
    image: &'a mut Image,
    clip: Rectangle,
}

impl<'a> Graphics<'a> {
    pub fn new(image: &'a mut Image) -> Self {
        let clip = Rectangle::new(0, 0, image.width(), image.height());
        Self { image, clip }
    }

    #[inline]
    #[must_use]
    pub fn clip(&self) -> Rectangle {
        self.clip
    }

    #[inline]
    #[must_use]
    pub fn image(&self) -> &Image {
        self.image
    }

    #[inline]
    pub fn image_mut(&mut self) -> &mut Image {
        self.image
    }

    pub fn clear(&mut self) {
        self.image.fill(BLANK, AnsiCode::white());
    }

    /// Confine drawing to `clip`, cut down to the image.
    pub fn set_clip(&mut self, clip: Rectangle) {
        let x = clip.x.max(0);
        let y = clip.y.max(0);
        let width = clip.width.min(self.image.width() - x);
        let height = clip.height.min(self.image.height() - y);
        self.clip = Rectangle::new(x, y, width, height);
    }

    pub fn reset_clip(&mut self) {
        self.clip = Rectangle::new(0, 0, self.image.width(), self.image.height());
    }

    pub fn draw_point(&mut self, pen: &PointPen, x: i32, y: i32) {
        if self.clip.contains(x, y) {
            self.image.set(x, y, pen.brush.full_glyph(), pen.color);
        }
    }

    pub fn draw_line(&mut self, pen: &PointPen, x1: i32, y1: i32, x2: i32, y2: i32) {
        let clip = self.clip;
        raster::draw_line(&clip, Point::new(x1, y1), Point::new(x2, y2), |x, y| {
            self.draw_point(pen, x, y);
        });
    }

    /// Horizontal line across the whole clip rectangle.
    pub fn draw_horizontal(&mut self, pen: &LinePen, y: i32) {
        if self.clip.contains_y(y) {
            for x in self.clip.left()..=self.clip.right() {
                self.horizontal_cell(pen, x, y);
            }
        }
    }

    /// Horizontal line between `x1` and `x2` (either order), both included.
    pub fn draw_horizontal_span(&mut self, pen: &LinePen, x1: i32, x2: i32, y: i32) {
        if !self.clip.contains_y(y) {
            return;
        }
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        for x in lo.max(self.clip.left())..=hi.min(self.clip.right()) {
            self.horizontal_cell(pen, x, y);
        }
    }

    /// Single horizontal stroke at `(x, y)`.
    pub fn draw_horizontal_at(&mut self, pen: &LinePen, x: i32, y: i32) {
        if self.clip.contains(x, y) {
            self.horizontal_cell(pen, x, y);
        }
    }

    /// Vertical line across the whole clip rectangle.
    pub fn draw_vertical(&mut self, pen: &LinePen, x: i32) {
        if self.clip.contains_x(x) {
            for y in self.clip.bottom()..=self.clip.top() {
                self.vertical_cell(pen, x, y);
            }
        }
    }

    /// Vertical line between `y1` and `y2` (either order), both included.
    pub fn draw_vertical_span(&mut self, pen: &LinePen, x: i32, y1: i32, y2: i32) {
        if !self.clip.contains_x(x) {
            return;
        }
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        for y in lo.max(self.clip.bottom())..=hi.min(self.clip.top()) {
            self.vertical_cell(pen, x, y);
        }
    }

    /// Single vertical stroke at `(x, y)`.
    pub fn draw_vertical_at(&mut self, pen: &LinePen, x: i32, y: i32) {
        if self.clip.contains(x, y) {
            self.vertical_cell(pen, x, y);
        }
    }

    // Crossing an existing stroke of the other orientation yields the cross glyph.
    fn horizontal_cell(&mut self, pen: &LinePen, x: i32, y: i32) {
        let b = &pen.brush;
        let glyph = match self.image.get(x, y) {
            Ok(cell) if cell.glyph == b.vertical || cell.glyph == b.cross => b.cross,
            _ => b.horizontal,
        };
        self.image.set(x, y, glyph, pen.color);
    }

    fn vertical_cell(&mut self, pen: &LinePen, x: i32, y: i32) {
        let b = &pen.brush;
        let glyph = match self.image.get(x, y) {
            Ok(cell) if cell.glyph == b.horizontal || cell.glyph == b.cross => b.cross,
            _ => b.vertical,
        };
        self.image.set(x, y, glyph, pen.color);
    }

    /// Write `text` one character per cell starting at `(x, y)`.
    ///
    /// With `ensure_visible` the anchor is moved so the whole string lies in
    /// the clip rectangle, failing if it is longer than the clip extent or
    /// the clip is empty. Otherwise characters outside the clip are skipped.
    pub fn draw_string(
        &mut self,
        text: &str,
        color: AnsiCode,
        mut x: i32,
        mut y: i32,
        direction: TextDirection,
        ensure_visible: bool,
    ) -> Result<(), PlotError> {
        let len = text.chars().count();
        if ensure_visible && len > 0 {
            let available = match direction {
                TextDirection::Horizontal => self.clip.width,
                TextDirection::Vertical => self.clip.height,
            };
            if self.clip.is_empty() {
                return Err(PlotError::OversizeContent {
                    len,
                    available: available.max(0),
                });
            }
            let n = i32::try_from(len)
                .ok()
                .filter(|&n| n <= available)
                .ok_or(PlotError::OversizeContent { len, available })?;
            match direction {
                TextDirection::Horizontal => {
                    x = x.clamp(self.clip.left(), self.clip.right() - n + 1);
                    y = y.clamp(self.clip.bottom(), self.clip.top());
                }
                TextDirection::Vertical => {
                    x = x.clamp(self.clip.left(), self.clip.right());
                    y = y.clamp(self.clip.bottom() + n - 1, self.clip.top());
                }
            }
        }

        let (mut cx, mut cy) = (x, y);
        for ch in text.chars() {
            if self.clip.contains(cx, cy) {
                self.image.set(cx, cy, ch, color);
            } else if ensure_visible {
                break;
            }
            match direction {
                TextDirection::Horizontal => cx = cx.saturating_add(1),
                TextDirection::Vertical => cy = cy.saturating_sub(1),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::brush::{LineBrush, PointBrush};

    const PEN: LinePen = LinePen::new(LineBrush::ASCII, AnsiCode::white());

    fn lines(img: &Image) -> Vec<String> {
        img.to_lines()
    }

    #[test]
    fn clip_is_cut_to_image() {
        let mut img = Image::new(5, 4).unwrap();
        let mut g = Graphics::new(&mut img);
        g.set_clip(Rectangle::new(-2, 1, 10, 10));
        assert_eq!(g.clip(), Rectangle::new(0, 1, 5, 3));
        g.reset_clip();
        assert_eq!(g.clip(), Rectangle::new(0, 0, 5, 4));
    }

    #[test]
    fn crossing_lines_merge_in_either_order() {
        let mut a = Image::new(3, 3).unwrap();
        let mut g = Graphics::new(&mut a);
        g.draw_horizontal(&PEN, 1);
        g.draw_vertical(&PEN, 1);

        let mut b = Image::new(3, 3).unwrap();
        let mut g = Graphics::new(&mut b);
        g.draw_vertical(&PEN, 1);
        g.draw_horizontal(&PEN, 1);

        assert_eq!(lines(&a), vec![" | ", "-+-", " | "]);
        assert_eq!(lines(&a), lines(&b));
        // redrawing over a cross keeps it
        let mut g = Graphics::new(&mut b);
        g.draw_horizontal_at(&PEN, 1, 1);
        assert_eq!(b.get(1, 1).unwrap().glyph, '+');
    }

    #[test]
    fn spans_clip_to_rectangle() {
        let mut img = Image::new(6, 3).unwrap();
        let mut g = Graphics::new(&mut img);
        g.set_clip(Rectangle::new(1, 0, 3, 3));
        g.draw_horizontal_span(&PEN, 10, -3, 0);
        g.draw_vertical_span(&PEN, 5, 0, 2);
        g.draw_vertical_at(&PEN, 2, 7);
        assert_eq!(lines(&img), vec!["      ", "      ", " ---  "]);
    }

    #[test]
    fn lines_use_point_glyph_and_clip() {
        let mut img = Image::new(4, 4).unwrap();
        let mut g = Graphics::new(&mut img);
        let pen = PointPen::new(PointBrush::STAR, AnsiCode::red());
        g.set_clip(Rectangle::new(0, 0, 3, 3));
        g.draw_line(&pen, 0, 0, 10, 10);
        assert_eq!(lines(&img), vec!["    ", "  * ", " *  ", "*   "]);
    }

    #[test]
    fn ensure_visible_moves_text_inside() {
        let mut img = Image::new(6, 2).unwrap();
        let mut g = Graphics::new(&mut img);
        g.draw_string("abc", AnsiCode::white(), 5, -3, TextDirection::Horizontal, true)
            .unwrap();
        assert_eq!(lines(&img), vec!["      ", "   abc"]);
    }

    #[test]
    fn ensure_visible_vertical() {
        let mut img = Image::new(2, 4).unwrap();
        let mut g = Graphics::new(&mut img);
        g.draw_string("ab", AnsiCode::white(), 0, 0, TextDirection::Vertical, true)
            .unwrap();
        assert_eq!(lines(&img), vec!["  ", "  ", "a ", "b "]);
    }

    #[test]
    fn oversize_text_fails_when_forced_visible() {
        let mut img = Image::new(3, 3).unwrap();
        let mut g = Graphics::new(&mut img);
        let err = g
            .draw_string("long", AnsiCode::white(), 0, 0, TextDirection::Horizontal, true)
            .unwrap_err();
        assert!(matches!(
            err,
            PlotError::OversizeContent {
                len: 4,
                available: 3
            }
        ));
        assert!(lines(&img).iter().all(|l| l == "   "));
    }

    #[test]
    fn unforced_text_skips_cells_outside_clip() {
        let mut img = Image::new(4, 1).unwrap();
        {
            let mut g = Graphics::new(&mut img);
            g.draw_string("hello", AnsiCode::white(), 1, 0, TextDirection::Horizontal, false)
                .unwrap();
        }
        assert_eq!(lines(&img), vec![" hel"]);

        let mut img = Image::new(4, 1).unwrap();
        let mut g = Graphics::new(&mut img);
        g.draw_string("zz", AnsiCode::white(), -1, 0, TextDirection::Horizontal, false)
            .unwrap();
        assert_eq!(lines(g.image()), vec!["z   "]);
    }

    #[test]
    fn unforced_vertical_text_enters_clip_from_above() {
        let mut img = Image::new(1, 3).unwrap();
        let mut g = Graphics::new(&mut img);
        g.draw_string("abcd", AnsiCode::white(), 0, 3, TextDirection::Vertical, false)
            .unwrap();
        assert_eq!(lines(g.image()), vec!["b", "c", "d"]);
    }

    #[test]
    fn forced_text_in_empty_clip_is_oversize() {
        let mut img = Image::new(5, 4).unwrap();
        let mut g = Graphics::new(&mut img);
        g.set_clip(Rectangle::new(0, 10, 5, 5));
        assert!(g.clip().is_empty());
        for direction in [TextDirection::Horizontal, TextDirection::Vertical] {
            let err = g
                .draw_string("a", AnsiCode::white(), 0, 0, direction, true)
                .unwrap_err();
            assert!(matches!(err, PlotError::OversizeContent { len: 1, .. }));
        }

        g.set_clip(Rectangle::new(10, 0, 5, 4));
        assert!(g.clip().is_empty());
        let err = g
            .draw_string("a", AnsiCode::white(), 0, 0, TextDirection::Vertical, true)
            .unwrap_err();
        assert!(matches!(err, PlotError::OversizeContent { len: 1, .. }));
        assert!(lines(g.image()).iter().all(|l| l == "     "));
    }
}
