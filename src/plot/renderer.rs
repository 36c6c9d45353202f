//! One complete render pass: layout, decorations, series, labels.
//!
//! The pass is a pure function of the series, the settings snapshot and the
//! buffer size; nothing survives between calls except the painted buffer.

use log::{trace, warn};

use crate::{
    core::{config::PlotSettings, error::PlotError},
    plot::{
        converter::{CoordinateConverter, to_grid},
        graph::DataGraphics,
        layout::PlotLayout,
        series::Series,
        ticks::label_width,
    },
    render::{
        brush::LinePen,
        graphics::{Graphics, TextDirection},
        image::Image,
    },
};

/// What a successful pass computed, plus the labels it had to skip.
#[derive(Debug)]
pub struct FrameReport {
    pub layout: PlotLayout,
    /// `OversizeContent` errors of labels too long for the frame.
    pub label_errors: Vec<PlotError>,
}

/// Paint a complete frame into `image`.
///
/// Settings are validated first; on `InvalidConfiguration` the buffer is
/// left untouched.
pub fn render_frame(
    image: &mut Image,
    series: &[Series],
    settings: &PlotSettings,
) -> Result<FrameReport, PlotError> {
    settings.validate()?;
    let layout = PlotLayout::calculate(series, settings, image.width(), image.height());
    let label_errors = PlotRenderer::new(&layout, settings).draw(image, series);
    Ok(FrameReport {
        layout,
        label_errors,
    })
}

struct PlotRenderer<'p> {
    layout: &'p PlotLayout,
    settings: &'p PlotSettings,
    converter: CoordinateConverter,
}

impl<'p> PlotRenderer<'p> {
    fn new(layout: &'p PlotLayout, settings: &'p PlotSettings) -> Self {
        Self {
            layout,
            settings,
            converter: CoordinateConverter::for_area(&layout.bounds, &layout.drawing_area),
        }
    }

    fn draw(&self, image: &mut Image, series: &[Series]) -> Vec<PlotError> {
        let mut graphics = Graphics::new(image);
        graphics.clear();
        graphics.set_clip(self.layout.drawing_area);

        {
            let mut data = DataGraphics::new(&mut graphics, &self.converter);
            if let Some(pen) = self.settings.grid.pen.filter(|_| self.settings.grid.visible) {
                trace!("grid");
                self.draw_grid(&mut data, &pen);
            }
            if let Some(pen) = self.settings.axis.pen.filter(|_| self.settings.axis.visible) {
                trace!("axes");
                self.draw_axes(&mut data, &pen);
            }
            if let Some(pen) = self.settings.ticks.pen.filter(|_| self.settings.ticks.visible) {
                trace!("tick marks");
                self.draw_tick_marks(&mut data, &pen);
            }
        }

        graphics.reset_clip();
        {
            let mut data = DataGraphics::new(&mut graphics, &self.converter);
            for s in series {
                trace!("series of {} points", s.len());
                data.draw_lines(s.pen(), s.xs(), s.ys());
            }
        }

        let mut errors = Vec::new();
        if self.settings.ticks.labels.visible {
            trace!("labels");
            self.draw_x_labels(&mut graphics, &mut errors);
            self.draw_y_labels(&mut graphics, &mut errors);
        }
        errors
    }

    fn draw_grid(&self, data: &mut DataGraphics<'_, '_>, pen: &LinePen) {
        for tick in &self.layout.x_ticks {
            data.draw_vertical(pen, tick.value);
        }
        for tick in &self.layout.y_ticks {
            data.draw_horizontal(pen, tick.value);
        }
    }

    fn draw_axes(&self, data: &mut DataGraphics<'_, '_>, pen: &LinePen) {
        let (cross_x, cross_y) = self.layout.axis_cross;
        data.draw_horizontal(pen, cross_y);
        data.draw_vertical(pen, cross_x);
    }

    fn draw_tick_marks(&self, data: &mut DataGraphics<'_, '_>, pen: &LinePen) {
        let (cross_x, cross_y) = self.layout.axis_cross;
        for tick in &self.layout.x_ticks {
            data.draw_vertical_at(pen, tick.value, cross_y);
        }
        for tick in &self.layout.y_ticks {
            data.draw_horizontal_at(pen, cross_x, tick.value);
        }
    }

    /// Centred under each X tick, one row below the axis (or on the bottom row).
    fn draw_x_labels(&self, graphics: &mut Graphics<'_>, errors: &mut Vec<PlotError>) {
        let labels = &self.settings.ticks.labels;
        let (cross_x, cross_y) = self.layout.axis_cross;
        let y = if labels.attach_to_axis {
            to_grid(self.converter.convert_y(cross_y))
        } else {
            0
        };

        for tick in &self.layout.x_ticks {
            // the Y labels already mark the origin
            if labels.attach_to_axis && tick.value == cross_x {
                continue;
            }
            let x = to_grid(self.converter.convert_x(tick.value));
            let result = graphics.draw_string(
                &tick.label,
                labels.color,
                x - tick.width() / 2,
                y - 1,
                TextDirection::Horizontal,
                true,
            );
            collect(result, &tick.label, errors);
        }
    }

    /// Right-aligned left of the axis (or of the drawing area).
    fn draw_y_labels(&self, graphics: &mut Graphics<'_>, errors: &mut Vec<PlotError>) {
        let labels = &self.settings.ticks.labels;
        let (cross_x, cross_y) = self.layout.axis_cross;
        let x = if labels.attach_to_axis {
            to_grid(self.converter.convert_x(cross_x))
        } else {
            label_width(&self.layout.y_ticks)
        };

        for tick in &self.layout.y_ticks {
            let mut y = to_grid(self.converter.convert_y(tick.value));
            // keep the origin label off the X axis line
            if labels.attach_to_axis && tick.value == cross_y {
                y -= 1;
            }
            let result = graphics.draw_string(
                &tick.label,
                labels.color,
                x - tick.width(),
                y,
                TextDirection::Horizontal,
                true,
            );
            collect(result, &tick.label, errors);
        }
    }
}

fn collect(result: Result<(), PlotError>, label: &str, errors: &mut Vec<PlotError>) {
    if let Err(e) = result {
        warn!("label {label:?} skipped: {e}");
        errors.push(e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::{color::AnsiCode, error::ConfigError},
        render::brush::{LineBrush, PointBrush, PointPen},
    };

    fn squares() -> Vec<Series> {
        vec![
            Series::new(
                [1.0, 2.0, 3.0],
                [1.0, 4.0, 9.0],
                PointPen::new(PointBrush::BRAILLE, AnsiCode::blue()),
            )
            .unwrap(),
        ]
    }

    fn find(image: &Image, glyph: char) -> Option<(i32, i32)> {
        (0..image.height())
            .flat_map(|y| (0..image.width()).map(move |x| (x, y)))
            .find(|&(x, y)| image.get(x, y).unwrap().glyph == glyph)
    }

    #[test]
    fn invalid_settings_leave_buffer_untouched() {
        let mut image = Image::new(20, 8).unwrap();
        image.set(3, 3, 'x', AnsiCode::red());
        let mut settings = PlotSettings::default();
        settings.axis.pen = None;

        let err = render_frame(&mut image, &squares(), &settings).unwrap_err();
        assert!(matches!(
            err,
            PlotError::InvalidConfiguration(ConfigError::MissingPen("axis"))
        ));
        assert_eq!(image.get(3, 3).unwrap().glyph, 'x');
        assert_eq!(image.get(4, 3).unwrap().glyph, ' ');
    }

    #[test]
    fn axes_cross_at_layout_point() {
        let mut image = Image::new(80, 22).unwrap();
        let report = render_frame(&mut image, &squares(), &PlotSettings::default()).unwrap();
        assert!(report.label_errors.is_empty());

        let conv =
            CoordinateConverter::for_area(&report.layout.bounds, &report.layout.drawing_area);
        let (cx, cy) = report.layout.axis_cross;
        let (gx, gy) = (to_grid(conv.convert_x(cx)), to_grid(conv.convert_y(cy)));
        let cell = image.get(gx, gy).unwrap();
        assert_eq!(cell.glyph, LineBrush::THIN.cross);
        assert_eq!(cell.color, AnsiCode::white());
        // Y labels sit left of the vertical axis
        assert_eq!(image.get(gx - 2, to_grid(conv.convert_y(10.0))).unwrap().glyph, '1');
    }

    #[test]
    fn series_are_painted_after_decorations() {
        let mut image = Image::new(80, 22).unwrap();
        render_frame(&mut image, &squares(), &PlotSettings::default()).unwrap();
        let braille = (0..22)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .filter(|&(x, y)| crate::render::braille::is_braille(image.get(x, y).unwrap().glyph))
            .count();
        assert!(braille > 0);
    }

    #[test]
    fn rendering_twice_is_idempotent() {
        let mut a = Image::new(40, 12).unwrap();
        let mut b = Image::new(40, 12).unwrap();
        b.fill('#', AnsiCode::red());
        let settings = PlotSettings::default();
        render_frame(&mut a, &squares(), &settings).unwrap();
        render_frame(&mut b, &squares(), &settings).unwrap();
        render_frame(&mut b, &squares(), &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn oversize_labels_are_reported_not_fatal() {
        let mut image = Image::new(3, 6).unwrap();
        let s = vec![
            Series::new(
                [0.0, 1.0],
                [12_345.0, 98_765.0],
                PointPen::new(PointBrush::STAR, AnsiCode::green()),
            )
            .unwrap(),
        ];
        let report = render_frame(&mut image, &s, &PlotSettings::default()).unwrap();
        assert!(!report.label_errors.is_empty());
        assert!(
            report
                .label_errors
                .iter()
                .all(|e| matches!(e, PlotError::OversizeContent { .. }))
        );
        assert!(find(&image, '*').is_some());
    }

    #[test]
    fn hidden_labels_draw_no_text() {
        let settings = PlotSettings::builder().labels(false).build().unwrap();
        let mut image = Image::new(80, 22).unwrap();
        render_frame(&mut image, &squares(), &settings).unwrap();
        assert_eq!(find(&image, '9'), None);
        assert_eq!(find(&image, '1'), None);
    }
}
