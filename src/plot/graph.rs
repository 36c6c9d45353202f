//! Drawing in data coordinates on top of a cell-resolution [`Graphics`].

use crate::{
    plot::converter::{CoordinateConverter, to_grid},
    render::{
        brush::{LinePen, PointPen},
        graphics::Graphics,
        subcell::SubCellGraphics,
    },
};

pub struct DataGraphics<'g, 'a> {
    graphics: &'g mut Graphics<'a>,
    converter: &'g CoordinateConverter,
}

impl<'g, 'a> DataGraphics<'g, 'a> {
    pub fn new(graphics: &'g mut Graphics<'a>, converter: &'g CoordinateConverter) -> Self {
        Self {
            graphics,
            converter,
        }
    }

    /// Full-height stroke at data `x`.
    pub fn draw_vertical(&mut self, pen: &LinePen, x: f64) {
        let x = self.cell_x(x);
        self.graphics.draw_vertical(pen, x);
    }

    /// Single vertical stroke at data `(x, y)`.
    pub fn draw_vertical_at(&mut self, pen: &LinePen, x: f64, y: f64) {
        let (x, y) = (self.cell_x(x), self.cell_y(y));
        self.graphics.draw_vertical_at(pen, x, y);
    }

    /// Full-width stroke at data `y`.
    pub fn draw_horizontal(&mut self, pen: &LinePen, y: f64) {
        let y = self.cell_y(y);
        self.graphics.draw_horizontal(pen, y);
    }

    /// Single horizontal stroke at data `(x, y)`.
    pub fn draw_horizontal_at(&mut self, pen: &LinePen, x: f64, y: f64) {
        let (x, y) = (self.cell_x(x), self.cell_y(y));
        self.graphics.draw_horizontal_at(pen, x, y);
    }

    /// Polyline through `(xs[i], ys[i])` at the pen's sub-cell resolution.
    ///
    /// A NaN coordinate ends the current run.  Infinite coordinates map to
    /// the extreme grid value and get clipped to the frame edge.  A sample
    /// with no drawable neighbour still shows up as a single dot.
    pub fn draw_lines(&mut self, pen: &PointPen, xs: &[f64], ys: &[f64]) {
        let clip = self.graphics.clip();
        let mut sub = SubCellGraphics::new(self.graphics.image_mut(), *pen);
        sub.set_cell_clip(clip);
        let conv = self
            .converter
            .scaled(sub.horizontal_resolution(), sub.vertical_resolution());

        let to_sub = |x: f64, y: f64| -> Option<(i32, i32)> {
            if x.is_nan() || y.is_nan() {
                return None;
            }
            Some((sub_coord(x, |v| conv.convert_x(v)), sub_coord(y, |v| conv.convert_y(v))))
        };

        let mut prev: Option<(i32, i32)> = None;
        for (&x, &y) in xs.iter().zip(ys) {
            let next = to_sub(x, y);
            match (prev, next) {
                (Some((x1, y1)), Some((x2, y2))) => sub.draw_line(x1, y1, x2, y2),
                (None, Some((x2, y2))) => sub.draw_line(x2, y2, x2, y2),
                _ => {}
            }
            prev = next;
        }
    }

    fn cell_x(&self, x: f64) -> i32 {
        to_grid(self.converter.convert_x(x))
    }

    fn cell_y(&self, y: f64) -> i32 {
        to_grid(self.converter.convert_y(y))
    }
}

#[inline]
fn sub_coord(value: f64, convert: impl Fn(f64) -> f64) -> i32 {
    if value == f64::INFINITY {
        i32::MAX
    } else if value == f64::NEG_INFINITY {
        i32::MIN
    } else {
        to_grid(convert(value))
    }
}
