//! Geometry helpers: data extents + terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

/// Rectangle in data space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Raw extrema of all finite values, no padding.
    ///
    /// An axis without a single finite value falls back to `(0.0, 1.0)`.
    #[must_use]
    pub fn from_values(
        xs: impl IntoIterator<Item = f64>,
        ys: impl IntoIterator<Item = f64>,
    ) -> Self {
        let (x_min, x_max) = extent(xs).unwrap_or((0.0, 1.0));
        let (y_min, y_max) = extent(ys).unwrap_or((0.0, 1.0));
        Self::new(x_min, x_max, y_min, y_max)
    }

    /// Flat axes get ±0.5 of breathing room so they still map onto a range.
    #[must_use]
    pub fn widen_flat(self) -> Self {
        let widen = |lo: f64, hi: f64| {
            if hi - lo > 0.0 {
                (lo, hi)
            } else {
                (lo - 0.5, hi + 0.5)
            }
        };
        let (x_min, x_max) = widen(self.x_min, self.x_max);
        let (y_min, y_max) = widen(self.y_min, self.y_max);
        Self::new(x_min, x_max, y_min, y_max)
    }
}

/// Smallest and largest finite value, `None` if there are none.
#[must_use]
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let (mut low, mut high) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values.into_iter().filter(|v| v.is_finite()) {
        low = low.min(v);
        high = high.max(v);
    }
    (low <= high).then_some((low, high))
}

/// Current terminal geometry (80×22 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (Width, Height) {
    terminal_size().unwrap_or((
        Width(u16::try_from(DEFAULT_WIDTH).unwrap_or(u16::MAX)),
        Height(u16::try_from(DEFAULT_HEIGHT).unwrap_or(u16::MAX)),
    ))
}

/// Frame size for a plot filling the terminal, keeping `reserved_rows`
/// free below it for the prompt or a legend.
#[inline]
#[must_use]
pub fn frame_dims((w, h): (Width, Height), reserved_rows: usize) -> (usize, usize) {
    let width = usize::from(w.0).max(1);
    let height = usize::from(h.0).saturating_sub(reserved_rows).max(1);
    (width, height)
}
