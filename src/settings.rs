//! Startup settings
//!
//! Read once from `gravity-sim.json` in the working directory. Anything
//! missing from the file takes its default; a broken file falls back to
//! defaults entirely.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::SimParams;

/// Errors from reading or validating a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid setting: {0}")]
    Invalid(String),
}

/// Window and simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,

    /// Wall-clock time between ticks (ms)
    pub tick_interval_ms: u64,
    /// Cap on ticks run in a single frame
    pub max_ticks_per_frame: u32,
    /// Samples kept per chart
    pub history_capacity: usize,

    /// Starting physics values
    pub sim: SimParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: WINDOW_TITLE.to_string(),
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tick_interval_ms: TICK_INTERVAL_MS,
            max_ticks_per_frame: MAX_TICKS_PER_FRAME,
            history_capacity: HISTORY_CAPACITY,
            sim: SimParams::default(),
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "gravity-sim.json";

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Reject values the simulation can't run with
    pub fn validate(&self) -> Result<(), SettingsError> {
        let sim = &self.sim;
        if !(0.0..=1.0).contains(&sim.restitution) {
            return Err(SettingsError::Invalid(format!(
                "restitution must be within [0, 1], got {}",
                sim.restitution
            )));
        }
        if !sim.time_step.is_finite() || sim.time_step <= 0.0 {
            return Err(SettingsError::Invalid(format!(
                "time_step must be positive, got {}",
                sim.time_step
            )));
        }
        if [sim.position, sim.velocity, sim.acceleration, sim.mass]
            .iter()
            .any(|v| !v.is_finite())
        {
            return Err(SettingsError::Invalid(
                "physics values must be finite".to_string(),
            ));
        }
        if self.history_capacity == 0 {
            return Err(SettingsError::Invalid(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "tick_interval_ms must be at least 1".to_string(),
            ));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(SettingsError::Invalid(
                "max_ticks_per_frame must be at least 1".to_string(),
            ));
        }
        if !(self.window_width > 0.0 && self.window_height > 0.0) {
            return Err(SettingsError::Invalid(format!(
                "window size must be positive, got {}x{}",
                self.window_width, self.window_height
            )));
        }
        Ok(())
    }

    /// Read and validate a settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the working directory, falling back to defaults
    pub fn load() -> Self {
        Self::load_or_default(Self::FILE_NAME)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("No {} found, using default settings", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }
}
