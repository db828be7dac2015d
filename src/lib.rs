//! Chemostat Lab - interactive continuous-culture bioreactor simulator
//!
//! A Monod-kinetics chemostat integrated with fixed-step forward Euler,
//! driven by a draggable control panel and drawn as an animated reactor with
//! live biomass/substrate plots.

// Allow non-snake-case for unit suffixes in field names (g_per_L, etc.)
// This follows the project convention of including units in names.
#![allow(non_snake_case)]

pub mod config;
pub mod controls;
pub mod kinetics;
pub mod render;
pub mod simulation;
pub mod state;

pub use config::{ChemostatConfig, ConfigError};
pub use controls::{ActionControl, ControlAction, ControlPanel, HitTest, ParameterControl, ParameterId, PointerEvent};
pub use kinetics::{CultureStatus, EulerIntegrator, ModelParameters, SteadyState};
pub use render::{HudOverlay, HudState, RenderState};
pub use simulation::SimulationController;
pub use state::{CosmeticState, HistoryBuffer, HistorySample, RunState, SimulationMetrics, SimulationState};
