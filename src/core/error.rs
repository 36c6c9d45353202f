//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::{color::ColorError, data::ParseCsvError};

/// Which axis a configuration fault refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisName {
    X,
    Y,
}

impl fmt::Display for AxisName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisName::X => f.write_str("x"),
            AxisName::Y => f.write_str("y"),
        }
    }
}

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingPen(&'static str),
    InvalidTickStep { axis: AxisName, value: u32 },
    InvalidFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingPen(x) => write!(f, "{x} pen cannot be empty"),
            ConfigError::InvalidTickStep { axis, value } => {
                write!(f, "desired {axis} tick step must be positive, got {value}")
            }
            ConfigError::InvalidFormat(s) => {
                write!(f, "unsupported label format `{s}` (expected G<n> or F<n>)")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum PlotError {
    /// X and Y sequences of a series differ in length.
    ArgumentMismatch { xs: usize, ys: usize },
    /// Settings failed validation; nothing was drawn.
    InvalidConfiguration(ConfigError),
    /// A cell read outside the buffer.
    OutOfRange { x: i32, y: i32 },
    /// Text that must stay fully visible is longer than the space for it.
    OversizeContent { len: usize, available: i32 },
    /// Frames need at least one cell in each direction.
    InvalidDimensions { width: usize, height: usize },
    Io(io::Error),
    Csv(ParseCsvError),
    Color(ColorError),
}

impl fmt::Display for PlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotError::ArgumentMismatch { xs, ys } => write!(
                f,
                "X and Y collections must have the same length ({xs} vs {ys})"
            ),
            PlotError::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            PlotError::OutOfRange { x, y } => write!(f, "cell ({x}, {y}) is out of bounds"),
            PlotError::OversizeContent { len, available } => write!(
                f,
                "text of {len} characters does not fit into {available} cells"
            ),
            PlotError::InvalidDimensions { width, height } => {
                write!(f, "width and height must be positive, got {width}×{height}")
            }
            PlotError::Io(e) => write!(f, "{e}"),
            PlotError::Csv(e) => write!(f, "{e}"),
            PlotError::Color(e) => write!(f, "{e}"),
        }
    }
}

impl Error for PlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PlotError::InvalidConfiguration(e) => Some(e),
            PlotError::Io(e) => Some(e),
            PlotError::Csv(e) => Some(e),
            PlotError::Color(e) => Some(e),
            _ => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for PlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for PlotError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ColorError> for PlotError {
    fn from(e: ColorError) -> Self {
        Self::Color(e)
    }
}
impl From<ConfigError> for PlotError {
    fn from(e: ConfigError) -> Self {
        Self::InvalidConfiguration(e)
    }
}
