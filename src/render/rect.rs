//! Integer rectangles in cell (or sub-cell) space. `y` grows upwards.

/// Integer grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its bottom-left cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// Negative extents are stored as zero.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width: if width < 0 { 0 } else { width },
            height: if height < 0 { 0 } else { height },
        }
    }

    #[inline]
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y
    }
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.width - 1
    }
    #[inline]
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y + self.height - 1
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    #[must_use]
    pub const fn contains_x(&self, x: i32) -> bool {
        x >= self.left() && x <= self.right()
    }

    #[inline]
    #[must_use]
    pub const fn contains_y(&self, y: i32) -> bool {
        y >= self.bottom() && y <= self.top()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        self.contains_x(x) && self.contains_y(y)
    }

    /// Same rectangle measured in sub-cells of `h_res`×`v_res`.
    #[must_use]
    pub fn scaled(&self, h_res: i32, v_res: i32) -> Self {
        Self::new(
            self.x.saturating_mul(h_res),
            self.y.saturating_mul(v_res),
            self.width.saturating_mul(h_res),
            self.height.saturating_mul(v_res),
        )
    }
}
