//! Chart rendering for the windowed telemetry series.

use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::data::frame_view::{format_timestamp_label, FrameView};
use crate::data::path::PathPoint;
use crate::data::record::Metric;
use crate::data::scale::AxisRange;
use crate::theme;

/// The visual presentation of a chart series.
#[derive(Debug, Clone)]
pub struct ChartLook {
    pub color: Color32,
    pub width: f32,
    pub show_points: bool,
    pub point_radius: f32,
    pub height: f32,
}

impl Default for ChartLook {
    fn default() -> Self {
        Self {
            color: theme::ACCENT,
            width: 2.0,
            show_points: false,
            point_radius: 4.0,
            height: 140.0,
        }
    }
}

impl ChartLook {
    /// Thicker line with sample markers, used for altitude and velocity.
    pub fn emphasized() -> Self {
        Self {
            width: 3.0,
            show_points: true,
            height: 260.0,
            ..Default::default()
        }
    }
}

/// X bounds spanning the window's timestamps.
fn time_bounds(points: &[[f64; 2]]) -> Option<(f64, f64)> {
    let first = points.first()?[0];
    let last = points.last()?[0];
    if !first.is_finite() || !last.is_finite() {
        return None;
    }
    if last > first {
        Some((first, last))
    } else {
        Some((first - 0.5, first + 0.5))
    }
}

/// Line chart of `metric` against time over the current window.
///
/// With `y_range` the y axis is pinned to it; otherwise it follows the data.
pub fn metric_chart(ui: &mut egui::Ui, view: &FrameView<'_>, metric: Metric, y_range: Option<AxisRange>, look: &ChartLook) {
    let points = view.series(metric);
    let x_bounds = time_bounds(&points);
    let label = metric.label();
    Plot::new(label)
        .height(look.height)
        .legend(Legend::default())
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Time (s)")
        .y_axis_label(label)
        .x_axis_formatter(|mark, _range| format_timestamp_label(mark.value))
        .show(ui, |plot_ui| {
            if let (Some((x0, x1)), Some(r)) = (x_bounds, y_range) {
                if r.max.is_finite() && !r.is_degenerate() {
                    plot_ui.set_plot_bounds_x(x0..=x1);
                    plot_ui.set_plot_bounds_y(r.min..=r.max);
                }
            }
            if look.show_points {
                plot_ui.points(
                    Points::new(format!("{label} samples"), PlotPoints::from(points.clone()))
                        .radius(look.point_radius)
                        .color(look.color),
                );
            }
            plot_ui.line(
                Line::new(label, PlotPoints::from(points))
                    .color(look.color)
                    .width(look.width),
            );
        });
}

/// Pitch (x) against roll (y) over the window, interpolated path plus the raw samples.
pub fn path_chart(ui: &mut egui::Ui, view: &FrameView<'_>, look: &ChartLook) {
    let path: Vec<[f64; 2]> = view.path.iter().copied().map(<[f64; 2]>::from).collect();
    let samples: Vec<[f64; 2]> = view.orientation.iter().map(|r| PathPoint::from(r).into()).collect();
    let head = samples.last().copied();
    Plot::new("pitch_roll_path")
        .height(look.height * 2.0)
        .legend(Legend::default())
        .data_aspect(1.0)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Pitch (°)")
        .y_axis_label("Roll (°)")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new("Path", PlotPoints::from(path))
                    .color(look.color)
                    .width(look.width),
            );
            plot_ui.points(
                Points::new("Samples", PlotPoints::from(samples))
                    .radius(2.5)
                    .color(theme::SAMPLE_MARKER),
            );
            if let Some(p) = head {
                plot_ui.points(Points::new("Current", vec![p]).radius(5.0).color(Color32::YELLOW));
            }
        });
}
