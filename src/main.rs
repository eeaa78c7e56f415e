//! Gravity Sim entry point
//!
//! Loads settings, opens the window, and hands control to eframe.

use gravity_sim::{GravityApp, Settings};

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Gravity Sim starting...");

    let settings = Settings::load();
    log::info!(
        "Window {}x{}, tick every {}ms, {} samples per chart",
        settings.window_width,
        settings.window_height,
        settings.tick_interval_ms,
        settings.history_capacity
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height]),
        ..Default::default()
    };

    let app = GravityApp::new(&settings);
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
