//! Affine data-space -> grid-space mapping, one axis at a time.

use crate::{core::bounds::Bounds, render::rect::Rectangle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateConverter {
    pub source_x: (f64, f64),
    pub source_y: (f64, f64),
    pub target_x: (f64, f64),
    pub target_y: (f64, f64),
}

impl CoordinateConverter {
    /// Source intervals must have non-zero width.
    #[must_use]
    pub const fn new(
        source_x: (f64, f64),
        target_x: (f64, f64),
        source_y: (f64, f64),
        target_y: (f64, f64),
    ) -> Self {
        Self {
            source_x,
            source_y,
            target_x,
            target_y,
        }
    }

    /// Map `bounds` onto the cells of `area`: min to left/bottom, max to right/top.
    #[must_use]
    pub fn for_area(bounds: &Bounds, area: &Rectangle) -> Self {
        Self::new(
            (bounds.x_min, bounds.x_max),
            (f64::from(area.left()), f64::from(area.right())),
            (bounds.y_min, bounds.y_max),
            (f64::from(area.bottom()), f64::from(area.top())),
        )
    }

    /// Same mapping onto a grid `h_res`×`v_res` times finer.
    #[must_use]
    pub fn scaled(&self, h_res: i32, v_res: i32) -> Self {
        let (h, v) = (f64::from(h_res), f64::from(v_res));
        Self::new(
            self.source_x,
            (self.target_x.0 * h, self.target_x.1 * h),
            self.source_y,
            (self.target_y.0 * v, self.target_y.1 * v),
        )
    }

    #[inline]
    #[must_use]
    pub fn convert_x(&self, value: f64) -> f64 {
        map(value, self.source_x, self.target_x)
    }

    #[inline]
    #[must_use]
    pub fn convert_y(&self, value: f64) -> f64 {
        map(value, self.source_y, self.target_y)
    }

    #[inline]
    #[must_use]
    pub fn convert(&self, x: f64, y: f64) -> (f64, f64) {
        (self.convert_x(x), self.convert_y(y))
    }

    /// Grid -> data.
    #[inline]
    #[must_use]
    pub fn invert_x(&self, value: f64) -> f64 {
        map(value, self.target_x, self.source_x)
    }

    #[inline]
    #[must_use]
    pub fn invert_y(&self, value: f64) -> f64 {
        map(value, self.target_y, self.source_y)
    }
}

#[inline]
fn map(value: f64, (src_min, src_max): (f64, f64), (tgt_min, tgt_max): (f64, f64)) -> f64 {
    (value - src_min) / (src_max - src_min) * (tgt_max - tgt_min) + tgt_min
}

/// Nearest grid coordinate; halves go to the even neighbour, out-of-range
/// values saturate and NaN becomes 0.
#[inline]
#[must_use]
pub fn to_grid(value: f64) -> i32 {
    value.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn conv() -> CoordinateConverter {
        CoordinateConverter::for_area(
            &Bounds::new(-0.5, 10.0, 2.0, 4.0),
            &Rectangle::new(3, 1, 22, 9),
        )
    }

    #[test]
    fn extremes_map_to_edges() {
        let c = conv();
        assert_eq!(c.convert(-0.5, 2.0), (3.0, 1.0));
        assert_eq!(c.convert(10.0, 4.0), (24.0, 9.0));
        assert_eq!(c.convert_y(3.0), 5.0);
    }

    #[test]
    fn grid_round_trip_within_one_cell() {
        let c = conv();
        for g in 3..=24 {
            let back = to_grid(c.convert_x(c.invert_x(f64::from(g))));
            assert!((back - g).abs() <= 1);
        }
        for g in 1..=9 {
            let back = to_grid(c.convert_y(c.invert_y(f64::from(g))));
            assert!((back - g).abs() <= 1);
        }
    }

    #[test]
    fn scaling_multiplies_targets() {
        let c = conv().scaled(2, 4);
        assert_eq!(c.target_x, (6.0, 48.0));
        assert_eq!(c.target_y, (4.0, 36.0));
        assert_eq!(c.convert_x(10.0), 48.0);
    }

    #[test]
    fn rounding_is_banker_style_and_saturating() {
        assert_eq!(to_grid(2.5), 2);
        assert_eq!(to_grid(3.5), 4);
        assert_eq!(to_grid(-0.6), -1);
        assert_eq!(to_grid(1e20), i32::MAX);
        assert_eq!(to_grid(f64::NAN), 0);
    }
}
