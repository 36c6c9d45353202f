//! A collection of constants.

/// Frame width used when the terminal size cannot be queried.
pub const DEFAULT_WIDTH: usize = 80;
/// Frame height used when the terminal size cannot be queried.
pub const DEFAULT_HEIGHT: usize = 22;

/// Desired number of cells between two X ticks.
pub const DEFAULT_X_TICK_STEP: u32 = 11;
/// Desired number of cells between two Y ticks.
pub const DEFAULT_Y_TICK_STEP: u32 = 3;

/// X tick labels occupy exactly one row.
pub const X_TICK_LABEL_SIZE: i32 = 1;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: i32 = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: i32 = 4;

/// Quadrant blocks split a cell in half both ways.
pub const QUADRANT_RESOLUTION: i32 = 2;

/// Labels use four significant digits unless configured otherwise.
///
/// 14.832 becomes 14.83
pub const DEFAULT_LABEL_PRECISION: usize = 4;

/// Blank glyph written by `clear`.
pub const BLANK: char = ' ';
