use clap::{Args, Parser, Subcommand};

use crate::{
    core::{
        color::AnsiCode,
        constants::{DEFAULT_X_TICK_STEP, DEFAULT_Y_TICK_STEP},
        format::LabelFormat,
    },
    render::brush::{LineBrush, PointBrush},
};

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "console-plot",
    about = "Plot X/Y data in the terminal with braille, quadrant or plain glyphs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Squares of 1..5 with default settings
    Basic(FrameArgs),
    /// sin(x) and 1/x in one frame
    Multi(FrameArgs),
    /// Every setting changed from its default
    Settings(FrameArgs),
    /// ASCII-only strokes and glyphs
    Ascii(FrameArgs),
    /// Plot data from a CSV file
    Csv(CsvArgs),
    /// Show available color names / hex syntax
    Colors,
    /// Show the built-in point and line brushes
    Brushes,
    /// Print example invocations
    Examples,
}

/// Frame size; defaults to the terminal.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FrameArgs {
    /// Frame width in cells
    #[arg(long)]
    pub width: Option<usize>,
    /// Frame height in cells
    #[arg(long)]
    pub height: Option<usize>,
}

/// `console-plot csv …`
#[derive(Parser, Debug)]
pub struct CsvArgs {
    /// CSV path (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    #[command(flatten)]
    pub frame: FrameArgs,

    /// Point brush: braille, quadrant, block, star, dot or any single character
    #[arg(long, default_value = "braille", value_parser = parse_point_brush)]
    pub brush: PointBrush,

    /// Color for every series (name or `#RRGGBB`); automatic if omitted
    #[arg(long, value_parser = parse_color)]
    pub color: Option<AnsiCode>,

    /// Line brush for axis, grid and tick marks: thin, bold, double, dotted, dashed, ascii …
    #[arg(long, value_parser = parse_line_brush)]
    pub lines: Option<LineBrush>,

    /// Desired cells between two X ticks
    #[arg(long, default_value_t = DEFAULT_X_TICK_STEP)]
    pub x_step: u32,

    /// Desired cells between two Y ticks
    #[arg(long, default_value_t = DEFAULT_Y_TICK_STEP)]
    pub y_step: u32,

    /// Label number format: G<digits> or F<decimals>
    #[arg(long, default_value = "G4")]
    pub format: LabelFormat,

    /// Hide the grid
    #[arg(long)]
    pub no_grid: bool,
    /// Hide the axis lines
    #[arg(long)]
    pub no_axis: bool,
    /// Hide the tick marks
    #[arg(long)]
    pub no_ticks: bool,
    /// Hide the tick labels
    #[arg(long)]
    pub no_labels: bool,
    /// Put labels along the frame edges instead of next to the axes
    #[arg(long)]
    pub detach_labels: bool,
}

fn parse_point_brush(s: &str) -> Result<PointBrush, String> {
    PointBrush::from_name(s).ok_or_else(|| format!("unknown point brush '{s}'"))
}

fn parse_line_brush(s: &str) -> Result<LineBrush, String> {
    LineBrush::from_name(s).ok_or_else(|| format!("unknown line brush '{s}'"))
}

fn parse_color(s: &str) -> Result<AnsiCode, String> {
    AnsiCode::from_name(s).map_err(|e| format!("'{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn csv_flags_parse() {
        let cli = Cli::try_parse_from([
            "console-plot",
            "csv",
            "data.csv",
            "--brush",
            "star",
            "--color",
            "dark-cyan",
            "--format",
            "f1",
            "--width",
            "60",
            "--detach-labels",
        ])
        .unwrap();
        let Command::Csv(a) = cli.cmd else {
            panic!("expected csv subcommand");
        };
        assert_eq!(a.file, "data.csv");
        assert_eq!(a.brush, PointBrush::STAR);
        assert_eq!(a.color, Some(AnsiCode::dark_cyan()));
        assert_eq!(a.format, LabelFormat::Fixed(1));
        assert_eq!(a.frame.width, Some(60));
        assert_eq!(a.frame.height, None);
        assert!(a.detach_labels && !a.no_grid);
        assert_eq!(a.x_step, 11);
    }

    #[test]
    fn unknown_brush_is_rejected() {
        assert!(Cli::try_parse_from(["console-plot", "csv", "--brush", "zigzag"]).is_err());
    }
}
