//! Chemostat mass balances and the single-step update.

use super::monod::specific_growth_rate;
use crate::config::{require_positive, ChemostatConfig, ConfigError};
use crate::state::SimulationState;

/// Kinetic and operating parameters for one run
///
/// Copied from the control panel at reset time and held fixed until the next
/// reset. All fields are strictly positive; construction enforces it so the
/// step function never divides by a zero yield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParameters {
    max_growth_rate_per_h: f64,
    half_saturation_g_per_L: f64,
    yield_coefficient: f64,
    dilution_rate_per_h: f64,
    feed_substrate_g_per_L: f64,
}

impl ModelParameters {
    pub fn new(
        max_growth_rate_per_h: f64,
        half_saturation_g_per_L: f64,
        yield_coefficient: f64,
        dilution_rate_per_h: f64,
        feed_substrate_g_per_L: f64,
    ) -> Result<Self, ConfigError> {
        require_positive("max_growth_rate", max_growth_rate_per_h)?;
        require_positive("half_saturation", half_saturation_g_per_L)?;
        require_positive("yield_coefficient", yield_coefficient)?;
        require_positive("dilution_rate", dilution_rate_per_h)?;
        require_positive("feed_substrate", feed_substrate_g_per_L)?;

        Ok(Self {
            max_growth_rate_per_h,
            half_saturation_g_per_L,
            yield_coefficient,
            dilution_rate_per_h,
            feed_substrate_g_per_L,
        })
    }

    /// Parameters at the slider starting positions, defaults clamped into range
    pub fn from_config(config: &ChemostatConfig) -> Result<Self, ConfigError> {
        Self::new(
            config.controls.max_growth_rate.clamped_default(),
            config.kinetics.half_saturation_g_per_L,
            config.kinetics.yield_coefficient,
            config.controls.dilution_rate.clamped_default(),
            config.controls.feed_substrate.clamped_default(),
        )
    }

    pub fn max_growth_rate_per_h(&self) -> f64 {
        self.max_growth_rate_per_h
    }

    pub fn half_saturation_g_per_L(&self) -> f64 {
        self.half_saturation_g_per_L
    }

    pub fn yield_coefficient(&self) -> f64 {
        self.yield_coefficient
    }

    pub fn dilution_rate_per_h(&self) -> f64 {
        self.dilution_rate_per_h
    }

    pub fn feed_substrate_g_per_L(&self) -> f64 {
        self.feed_substrate_g_per_L
    }

    /// μ(S) for these parameters
    pub fn growth_rate(&self, substrate_g_per_L: f64) -> f64 {
        specific_growth_rate(substrate_g_per_L, self.max_growth_rate_per_h, self.half_saturation_g_per_L)
    }
}

/// Time derivatives (dX/dt, dS/dt) in g/L/h
pub fn derivatives(state: &SimulationState, params: &ModelParameters) -> (f64, f64) {
    let x = state.biomass_g_per_L;
    let s = state.substrate_g_per_L;
    let mu = params.growth_rate(s);
    let d = params.dilution_rate_per_h;

    let dx_dt = (mu - d) * x;
    let ds_dt = d * (params.feed_substrate_g_per_L - s) - mu * x / params.yield_coefficient;

    (dx_dt, ds_dt)
}

/// Advance the state by one forward Euler step of `dt_h` hours.
///
/// Both concentrations are clamped at zero after the update; a large dt can
/// overshoot below zero, which the clamp hides rather than corrects.
pub fn step(state: &SimulationState, params: &ModelParameters, dt_h: f64) -> SimulationState {
    let (dx_dt, ds_dt) = derivatives(state, params);

    SimulationState {
        biomass_g_per_L: (state.biomass_g_per_L + dx_dt * dt_h).max(0.0),
        substrate_g_per_L: (state.substrate_g_per_L + ds_dt * dt_h).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_params() -> ModelParameters {
        ModelParameters::new(0.4, 0.5, 0.5, 0.2, 30.0).unwrap()
    }

    #[test]
    fn test_from_config_clamps_defaults() {
        let mut config = ChemostatConfig::default();
        config.controls.dilution_rate.default = 0.0;
        config.controls.feed_substrate.default = 80.0;

        let params = ModelParameters::from_config(&config).unwrap();
        assert_eq!(params.dilution_rate_per_h(), 0.05);
        assert_eq!(params.feed_substrate_g_per_L(), 50.0);
    }

    #[test]
    fn test_single_step_reference_values() {
        let state = SimulationState::new(0.1, 20.0);
        let next = step(&state, &reference_params(), 0.03);

        assert!(
            (next.biomass_g_per_L - 0.100571).abs() < 1e-5,
            "biomass after one step: {}",
            next.biomass_g_per_L
        );
        assert!(
            (next.substrate_g_per_L - 20.057659).abs() < 1e-5,
            "substrate after one step: {}",
            next.substrate_g_per_L
        );
    }

    #[test]
    fn test_clamp_on_overshoot() {
        // D > μ and consumption > feed: both raw updates land below zero
        let params = ModelParameters::new(0.8, 0.5, 0.5, 0.6, 10.0).unwrap();
        let state = SimulationState::new(50.0, 0.1);
        let next = step(&state, &params, 100.0);

        assert_eq!(next.biomass_g_per_L, 0.0);
        assert_eq!(next.substrate_g_per_L, 0.0);
    }

    #[test]
    fn test_zero_yield_rejected() {
        assert!(ModelParameters::new(0.4, 0.5, 0.0, 0.2, 30.0).is_err());
        assert!(ModelParameters::new(0.4, 0.5, -0.5, 0.2, 30.0).is_err());
    }

    #[test]
    fn test_step_is_pure() {
        let state = SimulationState::new(0.3, 12.0);
        let params = reference_params();
        assert_eq!(step(&state, &params, 0.03), step(&state, &params, 0.03));
    }

    #[test]
    fn test_sterile_reactor_only_dilutes() {
        let state = SimulationState::new(0.0, 20.0);
        let (dx, ds) = derivatives(&state, &reference_params());
        assert_eq!(dx, 0.0);
        assert!((ds - 2.0).abs() < 1e-12);
    }
}
