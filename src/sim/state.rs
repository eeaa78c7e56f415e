//! Point-mass state and its starting parameters

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Starting values for a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimParams {
    /// Initial vertical offset (top edge of the ball, pixels, down is positive)
    pub position: f32,
    pub velocity: f32,
    /// Constant acceleration (pixels/s²)
    pub acceleration: f32,
    /// Carried for display only; dynamics ignore it
    pub mass: f32,
    /// Fraction of velocity kept after a bounce (0-1)
    pub restitution: f32,
    /// Seconds advanced per tick
    pub time_step: f32,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            position: INITIAL_POSITION,
            velocity: 0.0,
            acceleration: GRAVITY,
            mass: MASS,
            restitution: RESTITUTION,
            time_step: SIM_DT,
        }
    }
}

/// Kinematic state of the single falling object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    pub position: f32,
    pub velocity: f32,
    pub acceleration: f32,
    pub mass: f32,
    pub restitution: f32,
    pub time_step: f32,
}

impl SimulationState {
    pub fn new(params: &SimParams) -> Self {
        Self {
            position: params.position,
            velocity: params.velocity,
            acceleration: params.acceleration,
            mass: params.mass,
            restitution: params.restitution,
            time_step: params.time_step,
        }
    }

    /// Kinetic energy (½mv²)
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity * self.velocity
    }
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(&SimParams::default())
    }
}
