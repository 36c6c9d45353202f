//! Plotting layer: series, layout planning and the render pass.

pub mod converter;
pub mod graph;
pub mod layout;
pub mod renderer;
pub mod series;
pub mod ticks;

use std::io::Write;

use log::debug;

pub use converter::CoordinateConverter;
pub use layout::PlotLayout;
pub use renderer::{FrameReport, render_frame};
pub use series::Series;
pub use ticks::Tick;

use crate::{
    core::{
        color::{AnsiCode, SERIES_PALETTE},
        config::PlotSettings,
        error::PlotError,
    },
    render::{
        brush::PointPen,
        frame::{print_image, write_image},
        image::Image,
    },
};

/// A plot session: one buffer, one settings snapshot, a list of series.
///
/// Adding series never touches the buffer; [`Plot::draw`] recomputes the
/// whole frame from scratch each time it is called.
#[derive(Debug)]
pub struct Plot {
    image: Image,
    settings: PlotSettings,
    series: Vec<Series>,
}

impl Plot {
    pub fn new(width: usize, height: usize) -> Result<Self, PlotError> {
        Self::with_settings(width, height, PlotSettings::default())
    }

    pub fn with_settings(
        width: usize,
        height: usize,
        settings: PlotSettings,
    ) -> Result<Self, PlotError> {
        Ok(Self {
            image: Image::new(width, height)?,
            settings,
            series: Vec::new(),
        })
    }

    #[inline]
    #[must_use]
    pub fn settings(&self) -> &PlotSettings {
        &self.settings
    }

    #[inline]
    pub fn settings_mut(&mut self) -> &mut PlotSettings {
        &mut self.settings
    }

    /// Append a series.  Without a pen it gets the default brush and the
    /// first palette colour nobody else is using.
    pub fn add_series(
        &mut self,
        xs: impl Into<Vec<f64>>,
        ys: impl Into<Vec<f64>>,
        pen: Option<PointPen>,
    ) -> Result<&Series, PlotError> {
        let (xs, ys) = (xs.into(), ys.into());
        if xs.len() != ys.len() {
            return Err(PlotError::ArgumentMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }
        let pen = pen.unwrap_or_else(|| PointPen::new(self.settings.default_brush, self.next_color()));
        let index = self.series.len();
        self.series.push(Series::new(xs, ys, pen)?);
        debug!("series {index} added with {pen:?}");
        Ok(&self.series[index])
    }

    #[inline]
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Paint the frame into the buffer.
    pub fn draw(&mut self) -> Result<FrameReport, PlotError> {
        render_frame(&mut self.image, &self.series, &self.settings)
    }

    #[inline]
    #[must_use]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Blit the last drawn frame to stdout.
    pub fn render(&self) -> Result<(), PlotError> {
        Ok(print_image(&self.image)?)
    }

    pub fn render_to<W: Write>(&self, out: &mut W) -> Result<(), PlotError> {
        Ok(write_image(&self.image, out)?)
    }

    fn next_color(&self) -> AnsiCode {
        let taken: Vec<AnsiCode> = self
            .series
            .iter()
            .map(|s| s.pen().color)
            .chain(self.settings.decoration_colors())
            .collect();
        SERIES_PALETTE
            .iter()
            .copied()
            .find(|c| !taken.contains(c))
            .unwrap_or(SERIES_PALETTE[self.series.len() % SERIES_PALETTE.len()])
    }
}
