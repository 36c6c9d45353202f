//! One X/Y data series and the pen it is drawn with.

use crate::{core::error::PlotError, render::brush::PointPen};

/// Immutable once built.  NaN breaks the line, ±inf clamps to the frame edge.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    xs: Vec<f64>,
    ys: Vec<f64>,
    pen: PointPen,
}

impl Series {
    pub fn new(
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        pen: PointPen,
    ) -> Result<Self, PlotError> {
        let (xs, ys) = (xs.into(), ys.into());
        if xs.len() != ys.len() {
            return Err(PlotError::ArgumentMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        Ok(Self { xs, ys, pen })
    }

    #[inline]
    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[inline]
    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    #[inline]
    #[must_use]
    pub fn pen(&self) -> &PointPen {
        &self.pen
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::color::AnsiCode, render::brush::PointBrush};

    const PEN: PointPen = PointPen::new(PointBrush::BRAILLE, AnsiCode::blue());

    #[test]
    fn keeps_values_in_order() {
        let s = Series::new([1.0, 2.0], vec![3.0, f64::NAN], PEN).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.xs(), &[1.0, 2.0]);
        assert!(s.ys()[1].is_nan());
        assert_eq!(s.points().next(), Some((1.0, 3.0)));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let err = Series::new([1.0, 2.0, 3.0], [1.0], PEN).unwrap_err();
        assert!(matches!(err, PlotError::ArgumentMismatch { xs: 3, ys: 1 }));
    }

    #[test]
    fn empty_series_is_allowed() {
        let s = Series::new(Vec::new(), Vec::new(), PEN).unwrap();
        assert!(s.is_empty());
    }
}
