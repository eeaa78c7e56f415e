//! Gravity Sim - a falling ball with live velocity/acceleration charts
//!
//! Core modules:
//! - `sim`: Fixed-step kinematics and bounded sample history
//! - `renderer`: Draw routines against an abstract canvas
//! - `platform`: Tick timing and the event messages driving the app loop
//! - `app`: Desktop window integration (eframe)
//! - `settings`: Startup configuration

pub mod app;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::GravityApp;
pub use settings::{Settings, SettingsError};

/// Simulation and layout constants
pub mod consts {
    /// Fixed simulation timestep in seconds (one tick)
    pub const SIM_DT: f32 = 0.016;
    /// Wall-clock interval between ticks
    pub const TICK_INTERVAL_MS: u64 = 16;
    /// Maximum ticks per frame to prevent spiral of death
    pub const MAX_TICKS_PER_FRAME: u32 = 8;

    /// Diameter of the falling object (pixels). The ground sits this far
    /// above the bottom of the drawable area.
    pub const OBJECT_DIAMETER: f32 = 50.0;

    /// Starting vertical offset (top edge of the ball)
    pub const INITIAL_POSITION: f32 = 50.0;
    /// Gravity (pixels/s²)
    pub const GRAVITY: f32 = 9.81;
    /// Fraction of velocity kept after a bounce
    pub const RESTITUTION: f32 = 0.8;
    pub const MASS: f32 = 1.0;

    /// Samples kept per chart (one pixel per sample)
    pub const HISTORY_CAPACITY: usize = 300;

    /// Window defaults
    pub const WINDOW_TITLE: &str = "Scientific Gravity Simulation";
    pub const WINDOW_WIDTH: f32 = 600.0;
    pub const WINDOW_HEIGHT: f32 = 700.0;
}

/// Ground line for a drawable area of the given height
#[inline]
pub fn ground_level(drawable_height: f32) -> f32 {
    drawable_height - consts::OBJECT_DIAMETER
}
