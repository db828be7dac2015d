//! Per-frame metrics snapshot for HUD display and headless reports.
//!
//! Aggregates what the presentation layer shows beside the reactor into one
//! plain struct so drawing code never reaches into the controller.

use crate::kinetics::{self, CultureStatus, SteadyState};
use crate::simulation::SimulationController;

use super::simulation::RunState;

#[derive(Debug, Clone)]
pub struct SimulationMetrics {
    // === Timing ===
    /// Simulated time since the last reset (h)
    pub simulation_time_h: f64,
    /// Ticks since the last reset
    pub tick_count: u64,
    /// Frames per second (rendering performance)
    pub fps: f32,

    // === Run ===
    pub run_state: RunState,
    /// Samples in the history buffer
    pub history_len: usize,

    // === Reactor ===
    /// Biomass X (g/L)
    pub biomass_g_per_L: f64,
    /// Substrate S (g/L)
    pub substrate_g_per_L: f64,
    /// Current μ(S) (1/h)
    pub growth_rate_per_h: f64,
    /// Dilution rate of the active run (1/h)
    pub dilution_rate_per_h: f64,
    /// Critical dilution rate for washout (1/h)
    pub washout_rate_per_h: f64,

    // === Analysis ===
    pub steady_state: SteadyState,
    pub status: CultureStatus,
}

impl SimulationMetrics {
    /// Snapshot the controller at the end of a tick
    pub fn collect(controller: &SimulationController, fps: f32) -> Self {
        let state = controller.state();
        let params = controller.params();

        Self {
            simulation_time_h: controller.time_h(),
            tick_count: controller.tick_count(),
            fps,
            run_state: controller.run_state(),
            history_len: controller.history().len(),
            biomass_g_per_L: state.biomass_g_per_L,
            substrate_g_per_L: state.substrate_g_per_L,
            growth_rate_per_h: params.growth_rate(state.substrate_g_per_L),
            dilution_rate_per_h: params.dilution_rate_per_h(),
            washout_rate_per_h: kinetics::washout_dilution_rate(params),
            steady_state: kinetics::predict(params),
            status: kinetics::classify(state, params),
        }
    }
}
