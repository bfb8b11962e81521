//! The eframe application: loading state, frame clock and panel layout.

use std::sync::mpsc::Receiver;

use chrono::{DateTime, Local};
use eframe::egui;
use egui_phosphor::regular as icons;

use crate::app::charts::{metric_chart, path_chart, ChartLook};
use crate::app::rocket::rocket_view;
use crate::clock::FrameClock;
use crate::config::ViewerConfig;
use crate::data::frame_view::{format_timestamp_label, FrameView};
use crate::data::path::DEFAULT_INTERPOLATION_STEPS;
use crate::data::record::Metric;
use crate::data::sequence::TelemetrySources;
use crate::loader::{LoadEvent, LoadState};
use crate::theme;

pub struct ViewerApp {
    rx: Option<Receiver<LoadEvent>>,
    load: LoadState,
    sources: Option<TelemetrySources>,
    clock: FrameClock,
    window_size: usize,
    headline: String,
    loaded_at: Option<DateTime<Local>>,
    paused: bool,
}

impl ViewerApp {
    pub fn new(cfg: &ViewerConfig, rx: Receiver<LoadEvent>) -> Self {
        Self {
            rx: Some(rx),
            load: LoadState::default(),
            sources: None,
            clock: FrameClock::new(cfg.tick_interval()),
            window_size: cfg.window_size,
            headline: cfg.title.clone(),
            loaded_at: None,
            paused: false,
        }
    }

    /// Repaint whenever the clock ticks.
    pub fn attach_context(&self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.clock.on_tick(move |_| ctx.request_repaint());
    }

    /// Drain pending loader events; start the clock once both sources are in.
    fn update_rx(&mut self) {
        let Some(rx) = &self.rx else {
            return;
        };
        let mut disconnected = false;
        loop {
            match rx.try_recv() {
                Ok(ev) => self.load.apply(ev),
                Err(std::sync::mpsc::TryRecvError::Empty) => break,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }
        if disconnected {
            self.rx = None;
        }
        if self.sources.is_none() {
            if let Some(sources) = self.load.sources() {
                self.set_sources(sources);
            }
        }
    }

    /// Install loaded sequences and start the clock.
    ///
    /// An empty sequence leaves the clock suspended and the viewer in its
    /// loading state.
    pub fn set_sources(&mut self, sources: TelemetrySources) {
        self.clock
            .set_sequence_lengths(sources.orientation.len(), sources.flight.len());
        if sources.orientation.len() != sources.flight.len() {
            tracing::info!(
                orientation = sources.orientation.len(),
                flight = sources.flight.len(),
                "sources differ in length; cycling over the shorter one"
            );
        }
        if sources.is_ready() {
            self.loaded_at = Some(Local::now());
            if !self.paused {
                self.clock.start();
            }
        } else {
            tracing::warn!("a telemetry source is empty; waiting");
        }
        self.sources = Some(sources);
    }

    fn toggle_pause(&mut self) {
        if self.paused {
            self.paused = false;
            self.clock.start();
        } else {
            self.paused = true;
            self.clock.stop();
        }
    }

    fn top_bar(&mut self, ui: &mut egui::Ui, view: Option<&FrameView<'_>>) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(&self.headline).color(theme::ACCENT).strong());
            ui.separator();
            let ready = view.is_some();
            let (icon, text) = if self.paused { (icons::PLAY, "Resume") } else { (icons::PAUSE, "Pause") };
            if ui
                .add_enabled(ready, egui::Button::new(format!("{icon} {text}")))
                .clicked()
            {
                self.toggle_pause();
            }
            if ui
                .add_enabled(ready && self.paused, egui::Button::new(format!("{} Step", icons::SKIP_FORWARD)))
                .on_hover_text("Advance one frame")
                .clicked()
            {
                self.clock.tick();
            }
            if let Some(v) = view {
                ui.separator();
                ui.monospace(format!(
                    "frame {}/{}  t={} s",
                    v.frame + 1,
                    v.cycle_len,
                    format_timestamp_label(v.current.timestamp)
                ));
            }
            if let Some(at) = self.loaded_at {
                ui.separator();
                ui.label(format!("loaded {}", at.format("%H:%M:%S")));
            }
        });
    }

    fn loading_screen(&self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            if self.load.errors.is_empty() {
                ui.label("Loading data...");
            } else {
                ui.vertical_centered(|ui| {
                    ui.label("Loading data...");
                    for e in &self.load.errors {
                        ui.colored_label(egui::Color32::LIGHT_RED, e);
                    }
                });
            }
        });
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_rx();

        let frame = self.clock.frame();
        let sources = self.sources.clone();
        let view = sources
            .as_ref()
            .and_then(|s| FrameView::compute(s, frame, self.window_size, DEFAULT_INTERPOLATION_STEPS));

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            self.top_bar(ui, view.as_ref());
        });

        let Some(view) = view else {
            egui::CentralPanel::default().show(ctx, |ui| self.loading_screen(ui));
            // Keep polling the loader until data arrives.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
            return;
        };

        egui::SidePanel::right("orientation_graphs")
            .resizable(true)
            .min_width(300.0)
            .default_width(380.0)
            .show(ctx, |ui| {
                ui.heading(egui::RichText::new("Orientation Graphs").color(theme::ACCENT));
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let look = ChartLook::default();
                    for metric in Metric::ORIENTATION {
                        metric_chart(ui, &view, metric, None, &look);
                    }
                    ui.separator();
                    ui.label("Pitch / roll path");
                    path_chart(ui, &view, &look);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            rocket_view(ui, &view.current, 420.0);
            ui.add_space(12.0);
            ui.heading(egui::RichText::new("Altitude and Velocity Graphs").color(theme::ACCENT));
            let look = ChartLook::emphasized();
            ui.columns(2, |cols| {
                metric_chart(&mut cols[0], &view, Metric::Altitude, Some(view.altitude_range), &look);
                metric_chart(&mut cols[1], &view, Metric::Velocity, Some(view.velocity_range), &look);
            });
        });
    }
}
