//! Simulation control: run state, resets and the per-frame tick.

mod controller;

pub use controller::SimulationController;
