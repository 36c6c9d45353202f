//! Aggregates the configuration / data layer.

pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod format;

// re-export frequently-used items for convenience
pub use bounds::Bounds;
pub use color::{AnsiCode, ColorError, colorize};
pub use config::{
    AxisSettings, GridSettings, LabelSettings, PlotSettings, PlotSettingsBuilder, TickSettings,
};
pub use data::CsvTable;
pub use error::{AxisName, ConfigError, PlotError};
pub use format::LabelFormat;
