//! Bounds & tick planner.
//!
//! Turns the raw data extents into bounds where every tick sits exactly on
//! a character cell.  Y is planned first because the width of its labels
//! decides how much room the X axis has.
//!
//! Per axis:
//! 1. pick a nice step for the desired tick spacing,
//! 2. generate rounded ticks to learn their span,
//! 3. choose the largest whole number of cells per tick interval that
//!    still fits data and ticks, then anchor and centre the range,
//! 4. regenerate ticks, keeping only those inside the new range.

use log::debug;

use crate::{
    core::{bounds::Bounds, config::PlotSettings, constants::X_TICK_LABEL_SIZE},
    plot::{
        series::Series,
        ticks::{Tick, TickFit, axis_cross, generate_ticks, label_width, tick_step},
    },
    render::rect::Rectangle,
};

/// Everything a render pass needs besides the series themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotLayout {
    /// Data range mapped onto `drawing_area`.
    pub bounds: Bounds,
    pub drawing_area: Rectangle,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    /// Data-space point where the axis lines meet.
    pub axis_cross: (f64, f64),
}

/// Final range and ticks of one axis.
#[derive(Clone, Debug, PartialEq)]
struct AxisPlan {
    min: f64,
    max: f64,
    ticks: Vec<Tick>,
}

impl PlotLayout {
    #[must_use]
    pub fn calculate(series: &[Series], settings: &PlotSettings, width: i32, height: i32) -> Self {
        let raw = Bounds::from_values(
            series.iter().flat_map(|s| s.xs().iter().copied()),
            series.iter().flat_map(|s| s.ys().iter().copied()),
        );
        debug!(
            "raw bounds x=[{}, {}] y=[{}, {}]",
            raw.x_min, raw.x_max, raw.y_min, raw.y_max
        );

        if !settings.has_decorations() {
            return Self {
                bounds: raw.widen_flat(),
                drawing_area: Rectangle::new(0, 0, width, height),
                x_ticks: Vec::new(),
                y_ticks: Vec::new(),
                axis_cross: (0.0, 0.0),
            };
        }

        let y = plan_axis(
            settings,
            (raw.y_min, raw.y_max),
            settings.ticks.desired_y_step,
            height,
            X_TICK_LABEL_SIZE,
        );
        let y_label = label_width(&y.ticks);
        let x = plan_axis(
            settings,
            (raw.x_min, raw.x_max),
            settings.ticks.desired_x_step,
            width,
            y_label,
        );

        let dx = drawing_range(settings, y_label, width);
        let dy = drawing_range(settings, X_TICK_LABEL_SIZE, height);
        let drawing_area = Rectangle::new(width - dx, height - dy, dx, dy);
        let axis_cross = (
            axis_cross(&x.ticks).unwrap_or(0.0),
            axis_cross(&y.ticks).unwrap_or(0.0),
        );
        debug!("drawing area {drawing_area:?}, axes cross at {axis_cross:?}");

        Self {
            bounds: Bounds::new(x.min, x.max, y.min, y.max),
            drawing_area,
            x_ticks: x.ticks,
            y_ticks: y.ticks,
            axis_cross,
        }
    }
}

/// Cells available to the data along an axis of `size` cells.
fn drawing_range(settings: &PlotSettings, label_size: i32, size: i32) -> i32 {
    let range = if settings.labels_reserve_space() {
        size - label_size
    } else {
        size
    };
    range.max(1)
}

fn plan_axis(
    settings: &PlotSettings,
    (min, max): (f64, f64),
    desired_step: u32,
    size: i32,
    label_size: i32,
) -> AxisPlan {
    let format = settings.ticks.labels.format;
    let total = drawing_range(settings, label_size, size);

    if max - min <= 0.0 {
        return plan_flat_axis(settings, min, total);
    }

    let step = tick_step(min, max, desired_step, size);
    let rough = generate_ticks(min, max, step, format, TickFit::Round);
    if rough.is_empty() {
        // only when the range overflows f64
        return AxisPlan {
            min,
            max,
            ticks: Vec::new(),
        };
    }

    let (lo, hi) = align_to_cells(settings, (min, max), &rough, step, total, label_size);
    let ticks = generate_ticks(lo, hi, step, format, TickFit::Within);
    debug!(
        "axis [{min}, {max}] -> [{lo}, {hi}], step {step}, {} ticks over {total} cells",
        ticks.len()
    );
    AxisPlan {
        min: lo,
        max: hi,
        ticks,
    }
}

/// A single value: one tick on it, centred in a range two "decades" wide.
fn plan_flat_axis(settings: &PlotSettings, value: f64, total: i32) -> AxisPlan {
    let step = if value == 0.0 {
        1.0
    } else {
        10f64.powf(value.abs().log10().floor())
    };
    let span = (total - 1).max(1);
    let cell = 2.0 * step / f64::from(span);
    let min = value - f64::from((total - 1).max(0) / 2) * cell;
    let max = min + f64::from(span) * cell;
    debug!("flat axis at {value}: [{min}, {max}]");
    AxisPlan {
        min,
        max,
        ticks: vec![Tick::new(value, settings.ticks.labels.format)],
    }
}

/// Widen `[min, max]` so `total` cells hold the data and all `ticks`, each
/// tick landing on a whole cell, with any spare cells split evenly.
fn align_to_cells(
    settings: &PlotSettings,
    (min, max): (f64, f64),
    ticks: &[Tick],
    step: f64,
    total: i32,
    label_size: i32,
) -> (f64, f64) {
    let (Some(first_tick), Some(last_tick)) = (ticks.first(), ticks.last()) else {
        return (min, max);
    };
    let (min_tick, max_tick) = (first_tick.value, last_tick.value);
    let lo = min.min(min_tick);
    let hi = max.max(max_tick);
    let cross = axis_cross(ticks).unwrap_or(0.0);
    let span = f64::from((total - 1).max(1));

    let by_full_range = (hi - lo) / span;
    // attached labels may need `label_size` cells before the first tick
    let room = total - 1 - label_size;
    let (label_at_start, min_cell) = if settings.labels_on_axis() && room > 0 {
        let with_label = (hi - cross) / f64::from(room);
        if with_label > by_full_range {
            (true, with_label)
        } else {
            (false, by_full_range)
        }
    } else {
        (false, by_full_range)
    };

    let interval = if ticks.len() > 1 {
        (max_tick - min_tick) / (ticks.len() - 1) as f64
    } else {
        step
    };
    let cells_per_tick = (interval / min_cell).floor().max(1.0);
    let cell = interval / cells_per_tick;

    let mut first = if label_at_start {
        min_tick - f64::from(label_size) * cell
    } else {
        min_tick - ((min_tick - min) / cell).ceil() * cell
    };
    let used = ((max - first) / cell).ceil();
    let unused = ((f64::from(total) - used) / 2.0).trunc();
    first -= unused * cell;
    let last = first + span * cell;

    if first.is_finite() && last.is_finite() && last > first {
        (first, last)
    } else {
        (min, max)
    }
}
