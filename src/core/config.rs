//! Plot settings snapshot + fluent builder.
//!
//! A render pass only ever sees `&PlotSettings`; nothing in it is mutated
//! while drawing.

use crate::{
    core::{
        color::AnsiCode,
        constants::{DEFAULT_X_TICK_STEP, DEFAULT_Y_TICK_STEP},
        error::{AxisName, ConfigError},
        format::LabelFormat,
    },
    render::brush::{LineBrush, LinePen, PointBrush},
};

#[derive(Debug, Clone, PartialEq)]
pub struct AxisSettings {
    pub visible: bool,
    pub pen: Option<LinePen>,
}

impl Default for AxisSettings {
    fn default() -> Self {
        Self {
            visible: true,
            pen: Some(LinePen::new(LineBrush::THIN, AnsiCode::white())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridSettings {
    pub visible: bool,
    pub pen: Option<LinePen>,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            visible: true,
            pen: Some(LinePen::new(LineBrush::DASHED, AnsiCode::dark_gray())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelSettings {
    pub visible: bool,
    pub color: AnsiCode,
    /// Draw labels next to the axis lines instead of along the frame edges.
    pub attach_to_axis: bool,
    pub format: LabelFormat,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            visible: true,
            color: AnsiCode::white(),
            attach_to_axis: true,
            format: LabelFormat::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickSettings {
    pub visible: bool,
    pub pen: Option<LinePen>,
    /// Desired number of cells between two X ticks.
    pub desired_x_step: u32,
    /// Desired number of cells between two Y ticks.
    pub desired_y_step: u32,
    pub labels: LabelSettings,
}

impl Default for TickSettings {
    fn default() -> Self {
        Self {
            visible: true,
            pen: Some(LinePen::new(LineBrush::THIN, AnsiCode::white())),
            desired_x_step: DEFAULT_X_TICK_STEP,
            desired_y_step: DEFAULT_Y_TICK_STEP,
            labels: LabelSettings::default(),
        }
    }
}

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub axis: AxisSettings,
    pub grid: GridSettings,
    pub ticks: TickSettings,
    /// Brush for series added without a pen.
    pub default_brush: PointBrush,
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            axis: AxisSettings::default(),
            grid: GridSettings::default(),
            ticks: TickSettings::default(),
            default_brush: PointBrush::BRAILLE,
        }
    }
}

impl PlotSettings {
    #[inline]
    #[must_use]
    pub fn builder() -> PlotSettingsBuilder {
        PlotSettingsBuilder::new()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.axis.pen.is_none() {
            return Err(ConfigError::MissingPen("axis"));
        }
        if self.grid.pen.is_none() {
            return Err(ConfigError::MissingPen("grid"));
        }
        if self.ticks.pen.is_none() {
            return Err(ConfigError::MissingPen("tick"));
        }
        if self.ticks.desired_x_step == 0 {
            return Err(ConfigError::InvalidTickStep {
                axis: AxisName::X,
                value: 0,
            });
        }
        if self.ticks.desired_y_step == 0 {
            return Err(ConfigError::InvalidTickStep {
                axis: AxisName::Y,
                value: 0,
            });
        }
        Ok(())
    }

    /// `false` when axis, grid, ticks and labels are all hidden.
    #[must_use]
    pub fn has_decorations(&self) -> bool {
        self.axis.visible || self.grid.visible || self.ticks.visible || self.ticks.labels.visible
    }

    /// Labels sit along the frame edges and take space away from the drawing area.
    #[must_use]
    pub fn labels_reserve_space(&self) -> bool {
        self.ticks.labels.visible && !self.ticks.labels.attach_to_axis
    }

    /// Labels are glued to the axis lines.
    #[must_use]
    pub fn labels_on_axis(&self) -> bool {
        self.ticks.labels.visible && self.ticks.labels.attach_to_axis
    }

    /// Colours already taken by visible decorations.
    pub fn decoration_colors(&self) -> impl Iterator<Item = AnsiCode> + '_ {
        let axis = self.axis.pen.filter(|_| self.axis.visible).map(|p| p.color);
        let grid = self.grid.pen.filter(|_| self.grid.visible).map(|p| p.color);
        axis.into_iter().chain(grid)
    }
}

/// Fluent builder; `build` validates.
#[derive(Debug, Default)]
pub struct PlotSettingsBuilder {
    settings: PlotSettings,
}

impl PlotSettingsBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn axis(mut self, visible: bool) -> Self {
        self.settings.axis.visible = visible;
        self
    }
    #[inline]
    #[must_use]
    pub fn axis_pen(mut self, pen: LinePen) -> Self {
        self.settings.axis.pen = Some(pen);
        self
    }
    #[inline]
    #[must_use]
    pub fn grid(mut self, visible: bool) -> Self {
        self.settings.grid.visible = visible;
        self
    }
    #[inline]
    #[must_use]
    pub fn grid_pen(mut self, pen: LinePen) -> Self {
        self.settings.grid.pen = Some(pen);
        self
    }
    #[inline]
    #[must_use]
    pub fn ticks(mut self, visible: bool) -> Self {
        self.settings.ticks.visible = visible;
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_pen(mut self, pen: LinePen) -> Self {
        self.settings.ticks.pen = Some(pen);
        self
    }
    #[inline]
    #[must_use]
    pub fn tick_steps(mut self, x: u32, y: u32) -> Self {
        self.settings.ticks.desired_x_step = x;
        self.settings.ticks.desired_y_step = y;
        self
    }
    #[inline]
    #[must_use]
    pub fn labels(mut self, visible: bool) -> Self {
        self.settings.ticks.labels.visible = visible;
        self
    }
    #[inline]
    #[must_use]
    pub fn label_color<C: Into<AnsiCode>>(mut self, c: C) -> Self {
        self.settings.ticks.labels.color = c.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn attach_labels_to_axis(mut self, attach: bool) -> Self {
        self.settings.ticks.labels.attach_to_axis = attach;
        self
    }
    #[inline]
    #[must_use]
    pub fn label_format(mut self, format: LabelFormat) -> Self {
        self.settings.ticks.labels.format = format;
        self
    }
    #[inline]
    #[must_use]
    pub fn default_brush(mut self, brush: PointBrush) -> Self {
        self.settings.default_brush = brush;
        self
    }

    pub fn build(self) -> Result<PlotSettings, ConfigError> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<PlotSettingsBuilder> for Result<PlotSettings, ConfigError> {
    fn from(b: PlotSettingsBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid_and_decorated() {
        let s = PlotSettings::default();
        assert!(s.validate().is_ok());
        assert!(s.has_decorations());
        assert!(s.labels_on_axis());
        assert!(!s.labels_reserve_space());
        assert_eq!(s.ticks.desired_x_step, 11);
        assert_eq!(s.ticks.desired_y_step, 3);
    }

    #[test]
    fn missing_pen_is_reported() {
        let mut s = PlotSettings::default();
        s.grid.pen = None;
        assert_eq!(s.validate(), Err(ConfigError::MissingPen("grid")));
        s.grid.visible = false;
        // hidden elements still need their pen
        assert_eq!(s.validate(), Err(ConfigError::MissingPen("grid")));
    }

    #[test]
    fn builder_rejects_zero_tick_step() {
        let err = PlotSettings::builder().tick_steps(5, 0).build().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTickStep {
                axis: AxisName::Y,
                value: 0
            }
        );
    }

    #[test]
    fn builder_sets_fields() {
        let s = PlotSettings::builder()
            .axis_pen(LinePen::new(LineBrush::DOUBLE, AnsiCode::yellow()))
            .grid(false)
            .attach_labels_to_axis(false)
            .label_format(LabelFormat::Fixed(2))
            .label_color("green")
            .default_brush(PointBrush::STAR)
            .build()
            .unwrap();
        assert_eq!(s.axis.pen.unwrap().brush, LineBrush::DOUBLE);
        assert!(!s.grid.visible);
        assert!(s.labels_reserve_space());
        assert_eq!(s.ticks.labels.color, AnsiCode::green());
        assert_eq!(s.default_brush, PointBrush::STAR);
        let colors: Vec<_> = s.decoration_colors().collect();
        assert_eq!(colors, vec![AnsiCode::yellow()]);
    }
}
