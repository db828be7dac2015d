//! Chemostat kinetics.
//!
//! This module implements:
//! - Monod specific growth rate
//! - Biomass and substrate mass balances for a constant-volume reactor
//! - Fixed-step forward Euler time integration
//! - Analytical steady state and washout threshold
//!
//! Mass balances (constant volume, sterile feed):
//!   dX/dt = (μ(S) - D)·X
//!   dS/dt = D·(Sf - S) - μ(S)·X / Yxs
//!
//! Reference: Monod J, Annales de l'Institut Pasteur, 1950;
//! Novick A, Szilard L, Science, 1950

pub mod integrator;
pub mod model;
pub mod monod;
pub mod steady_state;

pub use integrator::EulerIntegrator;
pub use model::{derivatives, step, ModelParameters};
pub use monod::specific_growth_rate;
pub use steady_state::{classify, predict, washout_dilution_rate, CultureStatus, SteadyState};
