//! Top-level entry point for running the viewer as a native window.
//!
//! [`run_viewer`] starts the background loader, builds the [`ViewerApp`] and
//! enters the eframe event loop. The call blocks until the window is closed;
//! dropping the app stops the frame clock.

use eframe::egui;

use crate::config::ViewerConfig;
use crate::loader::spawn_loader;
use crate::theme;

use super::viewer_app::ViewerApp;

pub fn run_viewer(cfg: ViewerConfig) -> eframe::Result<()> {
    let rx = spawn_loader(cfg.load_plan());
    let app = ViewerApp::new(&cfg, rx);

    let mut opts = eframe::NativeOptions::default();
    opts.viewport = egui::ViewportBuilder::default()
        .with_title(cfg.title.clone())
        .with_inner_size(egui::vec2(1400.0, 900.0));

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            theme::apply(&cc.egui_ctx);
            app.attach_context(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
