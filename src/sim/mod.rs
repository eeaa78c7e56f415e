//! Simulation module
//!
//! Everything that moves lives here. This module must stay headless:
//! - Fixed timestep only
//! - Ground height passed in per tick, never read from a window
//! - No rendering or platform dependencies

pub mod history;
pub mod state;
pub mod tick;

pub use history::{History, HistoryBuffer};
pub use state::{SimParams, SimulationState};
pub use tick::{Simulation, StepOutcome};
