//! Visual theme: green phosphor on black.

use eframe::egui::{Color32, Context, Stroke, Visuals};

/// Primary trace and heading colour.
pub const ACCENT: Color32 = Color32::from_rgb(0, 255, 0);
/// Marker colour for the original samples of the path trace.
pub const SAMPLE_MARKER: Color32 = Color32::from_rgb(180, 255, 180);

/// Apply the viewer visuals to an egui context.
pub fn apply(ctx: &Context) {
    let mut v = Visuals::dark();
    let bg = Color32::BLACK;
    let panel = Color32::from_rgb(0, 20, 0);
    v.panel_fill = bg;
    v.window_fill = panel;
    v.extreme_bg_color = bg;
    v.faint_bg_color = panel;
    v.override_text_color = Some(Color32::WHITE);
    v.widgets.noninteractive.bg_fill = panel;
    v.widgets.noninteractive.bg_stroke = Stroke::new(1.0, Color32::from_rgb(0, 77, 0));
    v.widgets.inactive.bg_fill = panel;
    v.widgets.inactive.fg_stroke.color = ACCENT;
    v.widgets.hovered.bg_fill = Color32::from_rgb(0, 60, 0);
    v.widgets.active.bg_fill = Color32::from_rgb(0, 90, 0);
    ctx.set_visuals(v);
}
