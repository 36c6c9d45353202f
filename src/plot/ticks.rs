//! "Nice" tick steps and tick lists.

use crate::core::format::LabelFormat;

/// Upper bound on ticks per axis; a frame cannot show more anyway.
const MAX_TICKS: i64 = 4096;

/// `range / 10^exp` of an exactly nice range can land an ulp above it.
const FRACTION_SLACK: f64 = 1e-9;

/// One labelled position on an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    #[must_use]
    pub fn new(value: f64, format: LabelFormat) -> Self {
        Self {
            value,
            label: format.format(value),
        }
    }

    /// Label width in cells.
    #[must_use]
    pub fn width(&self) -> i32 {
        i32::try_from(self.label.chars().count()).unwrap_or(i32::MAX)
    }
}

/// How the end multiples of a tick list are chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFit {
    /// Nearest multiples; ticks may fall just outside `[min, max]`.
    Round,
    /// Innermost multiples; every tick lies inside `[min, max]`.
    Within,
}

/// Round `range` to 1, 2, 5 or 10 times a power of ten.
///
/// With `round` the nearest nice value is picked, otherwise the smallest
/// nice value not below `range`.  Non-positive or non-finite input yields 1.
#[must_use]
pub fn nice_number(range: f64, round: bool) -> f64 {
    if !(range.is_finite() && range > 0.0) {
        return 1.0;
    }
    let exponent = range.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = range / magnitude;

    let nice = if round {
        if fraction < 1.5 {
            1.0
        } else if fraction < 3.0 {
            2.0
        } else if fraction < 7.0 {
            5.0
        } else {
            10.0
        }
    } else if fraction <= 1.0 + FRACTION_SLACK {
        1.0
    } else if fraction <= 2.0 + FRACTION_SLACK {
        2.0
    } else if fraction <= 5.0 + FRACTION_SLACK {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Step giving roughly one tick every `desired_step` cells across `size` cells.
#[must_use]
pub fn tick_step(min: f64, max: f64, desired_step: u32, size: i32) -> f64 {
    let desired = i32::try_from(desired_step).unwrap_or(i32::MAX).max(1);
    let tick_count = (size / desired).max(1);
    nice_number((max - min) / f64::from(tick_count), true)
}

/// Multiples of `step` covering `[min, max]`, ascending.
#[must_use]
pub fn generate_ticks(min: f64, max: f64, step: f64, format: LabelFormat, fit: TickFit) -> Vec<Tick> {
    if !(step.is_finite() && step > 0.0 && min.is_finite() && max.is_finite()) {
        return Vec::new();
    }
    let (first, last) = match fit {
        TickFit::Round => ((min / step).round_ties_even(), (max / step).round_ties_even()),
        TickFit::Within => ((min / step).ceil(), (max / step).floor()),
    };
    // saturating float -> int casts; the span is capped right below
    let (first, last) = (first as i64, last as i64);
    if last < first {
        return Vec::new();
    }
    let last = last.min(first.saturating_add(MAX_TICKS - 1));

    let mut ticks: Vec<Tick> = (first..=last)
        .map(|k| Tick::new(k as f64 * step, format))
        .collect();
    if fit == TickFit::Within {
        ticks.retain(|t| t.value >= min && t.value <= max);
    }
    ticks
}

/// Tick value nearest to zero; that is where the other axis crosses.
#[must_use]
pub fn axis_cross(ticks: &[Tick]) -> Option<f64> {
    ticks
        .iter()
        .map(|t| t.value)
        .min_by(|a, b| a.abs().total_cmp(&b.abs()))
}

/// Widest label, 0 without ticks.
#[must_use]
pub fn label_width(ticks: &[Tick]) -> i32 {
    ticks.iter().map(Tick::width).max().unwrap_or(0)
}
