//! Analytical steady state of the chemostat.
//!
//! Setting dX/dt = 0 with X > 0 gives μ(S*) = D, hence
//!   S* = Ks·D / (μmax - D),   X* = Yxs·(Sf - S*)
//! which exists only while S* < Sf, i.e. D below the washout rate
//!   Dc = μmax·Sf / (Ks + Sf).
//! At or above Dc the only steady state is washout: X* = 0, S* = Sf.

use super::model::ModelParameters;
use crate::state::SimulationState;

/// Biomass below which a washed-out culture counts as gone (g/L)
const WASHOUT_BIOMASS_G_PER_L: f64 = 1e-3;
/// Relative tolerance for "at steady state"
const STEADY_STATE_REL_TOL: f64 = 0.01;
/// Absolute floor on the steady-state tolerance (g/L)
const STEADY_STATE_ABS_TOL_G_PER_L: f64 = 1e-3;

/// Predicted long-run concentrations for a parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteadyState {
    pub biomass_g_per_L: f64,
    pub substrate_g_per_L: f64,
    /// True when the dilution rate is at or above the washout threshold
    pub washout: bool,
}

/// Where the current culture sits relative to its predicted steady state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CultureStatus {
    #[default]
    Transient,
    SteadyState,
    Washout,
}

/// Critical dilution rate Dc (1/h) above which cells are washed out
pub fn washout_dilution_rate(params: &ModelParameters) -> f64 {
    let sf = params.feed_substrate_g_per_L();
    params.max_growth_rate_per_h() * sf / (params.half_saturation_g_per_L() + sf)
}

/// Non-trivial steady state when it exists, washout otherwise
pub fn predict(params: &ModelParameters) -> SteadyState {
    let d = params.dilution_rate_per_h();
    let sf = params.feed_substrate_g_per_L();

    if d >= washout_dilution_rate(params) {
        return SteadyState {
            biomass_g_per_L: 0.0,
            substrate_g_per_L: sf,
            washout: true,
        };
    }

    let s_star = params.half_saturation_g_per_L() * d / (params.max_growth_rate_per_h() - d);
    SteadyState {
        biomass_g_per_L: params.yield_coefficient() * (sf - s_star),
        substrate_g_per_L: s_star,
        washout: false,
    }
}

/// Classify a state against the analytical prediction
pub fn classify(state: &SimulationState, params: &ModelParameters) -> CultureStatus {
    let target = predict(params);

    if target.washout && state.biomass_g_per_L < WASHOUT_BIOMASS_G_PER_L {
        return CultureStatus::Washout;
    }

    let near = |value: f64, expected: f64| {
        let tol = (expected.abs() * STEADY_STATE_REL_TOL).max(STEADY_STATE_ABS_TOL_G_PER_L);
        (value - expected).abs() <= tol
    };

    if near(state.biomass_g_per_L, target.biomass_g_per_L)
        && near(state.substrate_g_per_L, target.substrate_g_per_L)
    {
        CultureStatus::SteadyState
    } else {
        CultureStatus::Transient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_steady_state() {
        let params = ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap();
        let ss = predict(&params);

        // S* = 0.5·0.2/0.2 = 0.5, X* = 0.5·(30 - 0.5) = 14.75
        assert!(!ss.washout);
        assert!((ss.substrate_g_per_L - 0.5).abs() < 1e-12);
        assert!((ss.biomass_g_per_L - 14.75).abs() < 1e-12);
    }

    #[test]
    fn test_washout_threshold() {
        let params = ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap();
        let dc = washout_dilution_rate(&params);
        assert!((dc - 0.4 * 30.0 / 30.5).abs() < 1e-12);

        let fast = ModelParameters::new(0.4, 0.5, 0.5, 0.5, 30.0).unwrap();
        let ss = predict(&fast);
        assert!(ss.washout);
        assert_eq!(ss.biomass_g_per_L, 0.0);
        assert_eq!(ss.substrate_g_per_L, 30.0);
    }

    #[test]
    fn test_growth_rate_equals_dilution_at_steady_state() {
        let params = ModelParameters::new(0.6, 0.5, 0.5, 0.35, 25.0).unwrap();
        let ss = predict(&params);
        let mu = params.growth_rate(ss.substrate_g_per_L);
        assert!((mu - 0.35).abs() < 1e-12, "μ(S*) should equal D, got {}", mu);
    }

    #[test]
    fn test_classify() {
        let params = ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap();
        assert_eq!(classify(&SimulationState::new(14.75, 0.5), &params), CultureStatus::SteadyState);
        assert_eq!(classify(&SimulationState::new(0.1, 20.0), &params), CultureStatus::Transient);

        let fast = ModelParameters::new(0.4, 0.5, 0.5, 0.5, 30.0).unwrap();
        assert_eq!(classify(&SimulationState::new(0.0, 30.0), &fast), CultureStatus::Washout);
    }
}
