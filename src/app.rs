//! Application loop and eframe integration
//!
//! Each frame: elapsed time → `Tick` events → simulation steps →
//! `RedrawRequested` → paint. Ticks for a frame all run before it paints.

use std::time::Instant;

use eframe::egui;

use crate::platform::{Event, TickTimer};
use crate::renderer::{self, PainterCanvas, colors};
use crate::settings::Settings;
use crate::sim::Simulation;

pub struct GravityApp {
    sim: Simulation,
    timer: TickTimer,
    last_frame: Option<Instant>,
    /// Set by a tick, cleared once painted
    redraw_pending: bool,
}

impl GravityApp {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sim: Simulation::new(&settings.sim, settings.history_capacity),
            timer: TickTimer::new(settings.tick_interval(), settings.max_ticks_per_frame),
            last_frame: None,
            redraw_pending: false,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Consume one event. A tick returns the redraw request it produces.
    pub fn handle(&mut self, event: Event, drawable_height: f32) -> Option<Event> {
        match event {
            Event::Tick => {
                self.sim.tick(drawable_height);
                Some(Event::RedrawRequested)
            }
            Event::RedrawRequested => {
                self.redraw_pending = true;
                None
            }
        }
    }

    /// Run every tick due after `elapsed`; returns true if a redraw was requested
    pub fn pump(&mut self, elapsed: std::time::Duration, drawable_height: f32) -> bool {
        for event in self.timer.events(elapsed) {
            if let Some(follow_up) = self.handle(event, drawable_height) {
                self.handle(follow_up, drawable_height);
            }
        }
        std::mem::take(&mut self.redraw_pending)
    }
}

impl eframe::App for GravityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let elapsed = self
            .last_frame
            .map(|last| now.duration_since(last))
            .unwrap_or_default();
        self.last_frame = Some(now);

        let [r, g, b, a] = colors::to_rgba8(colors::BACKGROUND);
        let panel = egui::CentralPanel::default().frame(
            egui::Frame::none().fill(egui::Color32::from_rgba_unmultiplied(r, g, b, a)),
        );
        panel.show(ctx, |ui| {
            let rect = ui.max_rect();
            // Ground follows the current panel height, so resizes apply next tick
            self.pump(elapsed, rect.height());

            // Host repaints (resize, expose) land here too and show the latest state
            let painter = ui.painter_at(rect);
            let mut canvas = PainterCanvas::new(&painter, rect.min);
            renderer::render(&mut canvas, &self.sim.state, &self.sim.history);
        });

        ctx.request_repaint_after(self.timer.interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_tick_requests_redraw() {
        let mut app = GravityApp::new(&Settings::default());
        assert_eq!(app.handle(Event::Tick, 700.0), Some(Event::RedrawRequested));
        assert_eq!(app.simulation().ticks, 1);
        assert_eq!(app.handle(Event::RedrawRequested, 700.0), None);
        assert_eq!(app.simulation().ticks, 1);
    }

    #[test]
    fn test_pump_runs_due_ticks() {
        let mut app = GravityApp::new(&Settings::default());
        assert!(!app.pump(Duration::from_millis(10), 700.0));
        assert_eq!(app.simulation().ticks, 0);

        assert!(app.pump(Duration::from_millis(40), 700.0));
        assert_eq!(app.simulation().ticks, 3);
        assert_eq!(app.simulation().history.len(), 3);

        // Redraw flag is consumed
        assert!(!app.pump(Duration::ZERO, 700.0));
    }

    #[test]
    fn test_pump_caps_ticks_per_frame() {
        let mut app = GravityApp::new(&Settings::default());
        assert!(app.pump(Duration::from_secs(5), 700.0));
        assert_eq!(app.simulation().ticks, 8);
    }

    #[test]
    fn test_ground_follows_height_between_frames() {
        let mut app = GravityApp::new(&Settings::default());
        for _ in 0..100 {
            app.pump(Duration::from_millis(16), 700.0);
        }
        app.pump(Duration::from_millis(16), 80.0);
        assert_eq!(app.simulation().state.position, 30.0);
    }
}
