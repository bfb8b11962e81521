//! Rocket wireframe: geometry, rotation and projection onto the viewer canvas.

use eframe::egui::{self, Pos2, Rect, Sense, Stroke};

use crate::data::record::TelemetryRecord;
use crate::theme;

type Vec3 = [f64; 3];

const BODY_RADIUS: f64 = 0.2;
const BODY_HALF_LENGTH: f64 = 2.0;
const NOSE_TIP: f64 = 2.5;
const RING_SEGMENTS: usize = 16;
const CAMERA_DISTANCE: f64 = 10.0;
const FOV_DEG: f64 = 75.0;

/// Line segments of the rocket in model space (nose along +Y).
pub fn rocket_segments() -> Vec<(Vec3, Vec3)> {
    let mut segs = Vec::new();
    let ring = |y: f64| -> Vec<Vec3> {
        (0..RING_SEGMENTS)
            .map(|i| {
                let a = i as f64 / RING_SEGMENTS as f64 * std::f64::consts::TAU;
                [BODY_RADIUS * a.cos(), y, BODY_RADIUS * a.sin()]
            })
            .collect()
    };
    let top = ring(BODY_HALF_LENGTH);
    let bottom = ring(-BODY_HALF_LENGTH);
    for i in 0..RING_SEGMENTS {
        let j = (i + 1) % RING_SEGMENTS;
        segs.push((top[i], top[j]));
        segs.push((bottom[i], bottom[j]));
        if i % 4 == 0 {
            segs.push((top[i], bottom[i]));
            segs.push((top[i], [0.0, NOSE_TIP, 0.0]));
        }
    }
    // Four fins at the tail, one per side.
    for (dx, dz) in [(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)] {
        let root_hi = [BODY_RADIUS * dx, -1.7, BODY_RADIUS * dz];
        let root_lo = [BODY_RADIUS * dx, -BODY_HALF_LENGTH, BODY_RADIUS * dz];
        let tip = [0.5 * dx, -2.3, 0.5 * dz];
        segs.push((root_hi, tip));
        segs.push((tip, root_lo));
    }
    segs
}

/// Rotate by intrinsic X-Y-Z Euler angles in degrees: pitch about X, yaw about Y, roll about Z.
pub fn rotate(v: Vec3, pitch: f64, yaw: f64, roll: f64) -> Vec3 {
    let rz = rot_z(v, roll.to_radians());
    let ry = rot_y(rz, yaw.to_radians());
    rot_x(ry, pitch.to_radians())
}

fn rot_x([x, y, z]: Vec3, a: f64) -> Vec3 {
    let (s, c) = a.sin_cos();
    [x, y * c - z * s, y * s + z * c]
}

fn rot_y([x, y, z]: Vec3, a: f64) -> Vec3 {
    let (s, c) = a.sin_cos();
    [x * c + z * s, y, -x * s + z * c]
}

fn rot_z([x, y, z]: Vec3, a: f64) -> Vec3 {
    let (s, c) = a.sin_cos();
    [x * c - y * s, x * s + y * c, z]
}

/// Perspective projection to normalized device coordinates, camera on +Z looking at the origin.
pub fn project([x, y, z]: Vec3) -> [f64; 2] {
    let f = 1.0 / (FOV_DEG.to_radians() / 2.0).tan();
    let depth = (CAMERA_DISTANCE - z).max(1e-3);
    [x * f / depth, y * f / depth]
}

fn to_screen(rect: Rect, ndc: [f64; 2]) -> Pos2 {
    let scale = rect.height().min(rect.width()) as f64 / 2.0;
    let c = rect.center();
    Pos2::new(c.x + (ndc[0] * scale) as f32, c.y - (ndc[1] * scale) as f32)
}

/// Draw the rocket for `record` into the available space.
pub fn rocket_view(ui: &mut egui::Ui, record: &TelemetryRecord, height: f32) {
    let size = egui::vec2(ui.available_width(), height);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;
    painter.rect_filled(rect, 10.0, egui::Color32::BLACK);

    // NaN angles would collapse every point onto NaN; draw the rest pose instead.
    let angle = |a: f64| if a.is_finite() { a } else { 0.0 };
    let (pitch, yaw, roll) = (angle(record.pitch), angle(record.yaw), angle(record.roll));

    let stroke = Stroke::new(2.0, theme::ACCENT);
    for (a, b) in rocket_segments() {
        let pa = to_screen(rect, project(rotate(a, pitch, yaw, roll)));
        let pb = to_screen(rect, project(rotate(b, pitch, yaw, roll)));
        painter.line_segment([pa, pb], stroke);
    }
    painter.text(
        rect.left_top() + egui::vec2(10.0, 10.0),
        egui::Align2::LEFT_TOP,
        format!("pitch {:.1}°  yaw {:.1}°  roll {:.1}°", record.pitch, record.yaw, record.roll),
        egui::FontId::monospace(13.0),
        theme::ACCENT,
    );
}
