//! Fixed-step forward Euler integration for the chemostat model.
//!
//! y(t + dt) = y(t) + dt · f(y(t))
//!
//! First-order accurate and only conditionally stable. With dt = 0.03 h and
//! the rates reachable from the control panel (D, μmax ≤ 0.8 1/h) the step is
//! well inside the stability limit; larger steps are not guarded against.
//!
//! Reference: Press et al., Numerical Recipes, 3rd ed., Cambridge University Press 2007

use super::model::{step, ModelParameters};
use crate::config::{require_positive, ConfigError};
use crate::state::SimulationState;

/// Forward Euler stepper with a simulated clock
#[derive(Debug, Clone)]
pub struct EulerIntegrator {
    /// Integration timestep in hours
    dt_h: f64,
    /// Simulated time since the last reset (h)
    pub time_h: f64,
    /// Number of steps since the last reset
    pub step_count: u64,
}

impl EulerIntegrator {
    pub fn new(dt_h: f64) -> Result<Self, ConfigError> {
        require_positive("integrator.dt_h", dt_h)?;
        Ok(Self {
            dt_h,
            time_h: 0.0,
            step_count: 0,
        })
    }

    pub fn dt_h(&self) -> f64 {
        self.dt_h
    }

    /// Perform one integration step and advance the clock
    pub fn advance(&mut self, state: &SimulationState, params: &ModelParameters) -> SimulationState {
        let next = step(state, params, self.dt_h);
        self.step_count += 1;
        self.time_h = self.step_count as f64 * self.dt_h;
        next
    }

    /// Run for at least `duration_h` hours, returning the final state
    pub fn run(&mut self, state: SimulationState, params: &ModelParameters, duration_h: f64) -> SimulationState {
        let n_steps = (duration_h / self.dt_h).ceil() as usize;
        (0..n_steps).fold(state, |current, _| self.advance(&current, params))
    }

    /// Reset the simulated clock
    pub fn reset(&mut self) {
        self.time_h = 0.0;
        self.step_count = 0;
    }
}
