//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod plot;
pub mod render;

pub use core::{
    bounds::{Bounds, frame_dims, terminal_geometry},
    color::{AnsiCode, ColorError, SERIES_PALETTE, colorize},
    config::{
        AxisSettings, GridSettings, LabelSettings, PlotSettings, PlotSettingsBuilder, TickSettings,
    },
    error::{AxisName, ConfigError, PlotError},
    format::LabelFormat,
};

pub use plot::{FrameReport, Plot, PlotLayout, Series, Tick, render_frame};

pub use render::{
    Cell, Image, LineBrush, LinePen, PointBrush, PointPen, Rectangle, print_image, write_image,
};

/// Plot one series with default settings, sized to the terminal, straight
/// to stdout.
pub fn plot_xy(xs: &[f64], ys: &[f64]) -> Result<(), PlotError> {
    let (width, height) = frame_dims(terminal_geometry(), 1);
    let mut plot = Plot::new(width, height)?;
    plot.add_series(xs, ys, None)?;
    plot.draw()?;
    plot.render()
}
