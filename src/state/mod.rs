//! State management for the chemostat simulation.
//!
//! Contains the physical reactor state, the run/pause flag, the per-run
//! history of samples and the per-frame metrics snapshot read by the HUD.

mod history;
mod metrics;
mod simulation;

pub use history::{HistoryBuffer, HistorySample};
pub use metrics::SimulationMetrics;
pub use simulation::{CosmeticState, RunState, SimulationState};
