use log::info;

use crate::{
    core::{
        bounds::{frame_dims, terminal_geometry},
        color::{AnsiCode, NAMED_COLORS, colorize},
        config::PlotSettings,
        data::read_csv_from_path,
        error::PlotError,
        format::LabelFormat,
    },
    plot::Plot,
    render::brush::{LineBrush, LinePen, PointBrush, PointPen},
};

use super::parse::{CsvArgs, FrameArgs};

/// Rows kept free below the frame for the shell prompt / legend.
const RESERVED_ROWS: usize = 2;

fn frame_size(args: FrameArgs) -> (usize, usize) {
    let (width, height) = frame_dims(terminal_geometry(), RESERVED_ROWS);
    (args.width.unwrap_or(width), args.height.unwrap_or(height))
}

fn show(mut plot: Plot) -> Result<(), PlotError> {
    let report = plot.draw()?;
    plot.render()?;
    for e in &report.label_errors {
        eprintln!("warning: {e}");
    }
    Ok(())
}

/// `xs = 1..5`, `ys = xs²`, default settings.
pub fn basic(a: FrameArgs) -> Result<(), PlotError> {
    let (width, height) = frame_size(a);
    let mut plot = Plot::new(width, height)?;
    plot.add_series([1.0, 2.0, 3.0, 4.0, 5.0], [1.0, 4.0, 9.0, 16.0, 25.0], None)?;
    show(plot)
}

/// sin(x) and 1/x over [-3, 3]; 1/x is cut where it leaves [-3, 3].
pub fn multi(a: FrameArgs) -> Result<(), PlotError> {
    let (width, height) = frame_size(a);
    let mut plot = Plot::new(width, height)?;

    let xs: Vec<f64> = (-30..=30).map(|i| f64::from(i) * 0.1).collect();
    let sin: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let reciprocal: Vec<f64> = xs
        .iter()
        .map(|&x| {
            let y = 1.0 / x;
            if y.is_finite() && (-3.0..=3.0).contains(&y) {
                y
            } else {
                f64::NAN
            }
        })
        .collect();

    plot.add_series(
        xs.clone(),
        sin,
        Some(PointPen::new(PointBrush::BRAILLE, AnsiCode::blue())),
    )?;
    plot.add_series(
        xs,
        reciprocal,
        Some(PointPen::new(PointBrush::BRAILLE, AnsiCode::red())),
    )?;
    show(plot)?;

    println!("{}", colorize(&AnsiCode::blue(), "Blue: sin(x)"));
    println!(
        "{}",
        colorize(&AnsiCode::red(), "Red: 1/x (limited to range [-3, 3])")
    );
    Ok(())
}

/// Damped sine with every setting changed.
pub fn settings(a: FrameArgs) -> Result<(), PlotError> {
    let (width, height) = frame_size(a);
    let settings = PlotSettings::builder()
        .axis(true)
        .axis_pen(LinePen::new(LineBrush::DOUBLE, AnsiCode::yellow()))
        .grid(true)
        .grid_pen(LinePen::new(LineBrush::DOTTED, AnsiCode::dark_gray()))
        .ticks(true)
        .tick_pen(LinePen::new(LineBrush::THIN, AnsiCode::cyan()))
        .tick_steps(10, 5)
        .labels(true)
        .label_color(AnsiCode::green())
        .attach_labels_to_axis(false)
        .label_format(LabelFormat::Fixed(2))
        .build()?;
    let mut plot = Plot::with_settings(width, height, settings)?;

    let xs: Vec<f64> = (0..100).map(|i| f64::from(i) * 0.1).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin() * (-x * 0.1).exp()).collect();
    plot.add_series(
        xs,
        ys,
        Some(PointPen::new(PointBrush::STAR, AnsiCode::magenta())),
    )?;
    show(plot)
}

/// Output that survives a terminal without Unicode.
pub fn ascii(a: FrameArgs) -> Result<(), PlotError> {
    let (width, height) = frame_size(a);
    let settings = PlotSettings::builder()
        .axis_pen(LinePen::new(LineBrush::ASCII, AnsiCode::white()))
        .grid_pen(LinePen::new(LineBrush::ASCII, AnsiCode::dark_gray()))
        .tick_pen(LinePen::new(LineBrush::ASCII, AnsiCode::white()))
        .build()?;
    let mut plot = Plot::with_settings(width, height, settings)?;

    let xs: Vec<f64> = (0..50).map(|i| f64::from(i) * 0.2).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    plot.add_series(
        xs,
        ys,
        Some(PointPen::new(PointBrush::STAR, AnsiCode::yellow())),
    )?;
    show(plot)
}

pub fn csv(a: CsvArgs) -> Result<(), PlotError> {
    let table = read_csv_from_path(&a.file)?;
    info!(
        "{}: {} rows, {} series",
        a.file,
        table.xs.len(),
        table.columns.len()
    );

    let mut builder = PlotSettings::builder()
        .axis(!a.no_axis)
        .grid(!a.no_grid)
        .ticks(!a.no_ticks)
        .labels(!a.no_labels)
        .attach_labels_to_axis(!a.detach_labels)
        .tick_steps(a.x_step, a.y_step)
        .label_format(a.format)
        .default_brush(a.brush);
    if let Some(brush) = a.lines {
        let defaults = PlotSettings::default();
        let color = |pen: Option<LinePen>| pen.map_or(AnsiCode::white(), |p| p.color);
        builder = builder
            .axis_pen(LinePen::new(brush, color(defaults.axis.pen)))
            .grid_pen(LinePen::new(brush, color(defaults.grid.pen)))
            .tick_pen(LinePen::new(brush, color(defaults.ticks.pen)));
    }

    let (width, height) = frame_size(a.frame);
    let mut plot = Plot::with_settings(width, height, builder.build()?)?;
    let pen = a.color.map(|c| PointPen::new(a.brush, c));
    for column in &table.columns {
        plot.add_series(table.xs.as_slice(), column.as_slice(), pen)?;
    }
    let legend: Vec<String> = plot
        .series()
        .iter()
        .enumerate()
        .map(|(i, s)| colorize(&s.pen().color, &table.column_name(i)))
        .collect();
    show(plot)?;
    if legend.len() > 1 {
        println!("{}", legend.join("  "));
    }
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    for (name, code) in NAMED_COLORS {
        println!("{}", colorize(&code, name));
    }
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Sample every built-in brush.
pub fn brushes() {
    println!("\nPoint brushes:");
    for (name, brush) in [
        ("braille", PointBrush::BRAILLE),
        ("quadrant", PointBrush::QUADRANT),
        ("block", PointBrush::BLOCK),
        ("star", PointBrush::STAR),
        ("dot", PointBrush::DOT),
    ] {
        println!(
            "  {name:<12} {}×{}  {}",
            brush.horizontal_resolution(),
            brush.vertical_resolution(),
            brush.full_glyph()
        );
    }
    println!("\nLine brushes:");
    for (name, b) in [
        ("thin", LineBrush::THIN),
        ("bold", LineBrush::BOLD),
        ("double", LineBrush::DOUBLE),
        ("dotted", LineBrush::DOTTED),
        ("dotted-bold", LineBrush::DOTTED_BOLD),
        ("dashed", LineBrush::DASHED),
        ("dashed-bold", LineBrush::DASHED_BOLD),
        ("ascii", LineBrush::ASCII),
    ] {
        println!(
            "  {name:<12} {}{}{}{}{}",
            b.horizontal, b.horizontal, b.cross, b.horizontal, b.vertical
        );
    }
    println!();
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "cargo run --"; // adjust if you rename the binary
    println!(
        "
Example invocations
-------------------
• Squares          : {bin} basic
• Two series       : {bin} multi --width 100 --height 30
• Custom settings  : {bin} settings
• Plain ASCII      : {bin} ascii
• CSV file         : {bin} csv data.csv --brush quadrant --color cyan
• CSV from stdin   : seq 1 50 | awk '{{print $1\",\"sin($1/5)}}' | {bin} csv -
• Fixed labels     : {bin} csv data.csv --format F2 --detach-labels
• Bare curve       : {bin} csv data.csv --no-grid --no-axis --no-ticks --no-labels
• Verbose planner  : RUST_LOG=debug {bin} basic
"
    );
}
