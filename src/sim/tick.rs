//! Fixed timestep simulation tick
//!
//! Semi-implicit Euler: velocity is updated before position, then the
//! ground bounce is applied against the current drawable height.

use super::history::History;
use super::state::{SimParams, SimulationState};
use crate::ground_level;

/// Result of advancing the state by one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: SimulationState,
    /// Ground was reached or crossed this tick
    pub bounced: bool,
    /// Velocity after integration, before any bounce reflection
    pub impact_velocity: f32,
}

impl SimulationState {
    /// Advance by one timestep against a drawable area of the given height.
    pub fn advance(&self, drawable_height: f32) -> StepOutcome {
        let mut next = *self;
        next.velocity += next.acceleration * next.time_step;
        next.position += next.velocity * next.time_step;
        let impact_velocity = next.velocity;

        // Ground is recomputed every tick so a resized window takes effect
        // on the next step.
        let ground = ground_level(drawable_height);
        let bounced = next.position >= ground;
        if bounced {
            next.position = ground;
            next.velocity *= -next.restitution;
        }

        StepOutcome {
            state: next,
            bounced,
            impact_velocity,
        }
    }
}

/// The running simulation: state plus the charted history
#[derive(Debug, Clone)]
pub struct Simulation {
    pub state: SimulationState,
    pub history: History,
    /// Ticks run since start
    pub ticks: u64,
    pub bounces: u32,
}

impl Simulation {
    pub fn new(params: &SimParams, history_capacity: usize) -> Self {
        Self {
            state: SimulationState::new(params),
            history: History::new(history_capacity),
            ticks: 0,
            bounces: 0,
        }
    }

    /// Run one tick and record its samples. The caller requests a redraw.
    pub fn tick(&mut self, drawable_height: f32) -> StepOutcome {
        let outcome = self.state.advance(drawable_height);
        self.state = outcome.state;
        self.ticks += 1;

        if outcome.bounced {
            self.bounces += 1;
            log::debug!(
                "Bounce #{} at tick {}: {:.3} -> {:.3} (KE {:.3})",
                self.bounces,
                self.ticks,
                outcome.impact_velocity,
                self.state.velocity,
                self.state.kinetic_energy()
            );
        }

        // Acceleration is constant, so its series is flat.
        self.history
            .record(self.state.velocity, self.state.acceleration);

        outcome
    }
}
