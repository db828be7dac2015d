//! The simulation controller.
//!
//! Owns the control panel, the physical state and everything derived from a
//! run. One instance lives for the whole session and is driven by the frame
//! loop: pointer events first, then `tick`, then rendering.

use crate::config::{ChemostatConfig, ConfigError, KineticConstants};
use crate::controls::{ControlAction, ControlPanel, ParameterId, PointerEvent};
use crate::kinetics::{EulerIntegrator, ModelParameters};
use crate::state::{CosmeticState, HistoryBuffer, RunState, SimulationState};

/// Ticks between progress log lines
const LOG_INTERVAL_TICKS: u64 = 500;

pub struct SimulationController {
    panel: ControlPanel,
    /// Fixed Ks and Yxs, combined with slider values at each reset
    constants: KineticConstants,
    params: ModelParameters,
    state: SimulationState,
    history: HistoryBuffer,
    integrator: EulerIntegrator,
    run_state: RunState,
    cosmetic: CosmeticState,
    agitator_step_rad: f32,
}

impl SimulationController {
    /// Build the panel from configuration and load its starting values.
    pub fn new(config: &ChemostatConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let panel = ControlPanel::from_config(&config.controls)?;
        let params = ModelParameters::from_config(config)?;
        let integrator = EulerIntegrator::new(config.integrator.dt_h)?;

        let mut controller = Self {
            panel,
            constants: config.kinetics.clone(),
            params,
            state: SimulationState::new(
                config.controls.biomass_initial.clamped_default(),
                config.controls.substrate_initial.clamped_default(),
            ),
            history: HistoryBuffer::new(),
            integrator,
            run_state: RunState::Stopped,
            cosmetic: CosmeticState::default(),
            agitator_step_rad: config.display.agitator_step_rad,
        };
        controller.reset();
        Ok(controller)
    }

    /// Copy the panel into the model, clear history and stop.
    pub fn reset(&mut self) {
        match self.read_parameters() {
            Ok(params) => self.params = params,
            Err(e) => log::error!("Rejected panel parameters ({}), keeping previous run's", e),
        }

        self.state = SimulationState::new(
            self.panel.value(ParameterId::BiomassInitial),
            self.panel.value(ParameterId::SubstrateInitial),
        );
        self.history.clear();
        self.integrator.reset();
        self.run_state = RunState::Stopped;

        log::debug!(
            "Reset: X0={:.3} g/L, S0={:.2} g/L, μmax={:.3} 1/h, D={:.3} 1/h, Sf={:.2} g/L",
            self.state.biomass_g_per_L,
            self.state.substrate_g_per_L,
            self.params.max_growth_rate_per_h(),
            self.params.dilution_rate_per_h(),
            self.params.feed_substrate_g_per_L()
        );
    }

    /// Reset from the current panel values and begin running.
    pub fn start(&mut self) {
        self.reset();
        self.run_state = RunState::Running;
        log::info!("Simulation started");
    }

    /// Advance one fixed step if running.
    pub fn tick(&mut self) {
        if !self.run_state.is_running() {
            return;
        }

        self.state = self.integrator.advance(&self.state, &self.params);
        self.history.append(self.state.into());
        self.cosmetic.advance(self.agitator_step_rad);

        if self.integrator.step_count % LOG_INTERVAL_TICKS == 0 {
            log::debug!(
                "t={:.1} h: X={:.4} g/L, S={:.4} g/L",
                self.integrator.time_h,
                self.state.biomass_g_per_L,
                self.state.substrate_g_per_L
            );
        }
    }

    /// Route a pointer event to the panel, firing any button it hits.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<ControlAction> {
        match event {
            PointerEvent::Pressed(pointer) => {
                let action = self.panel.press(pointer)?;
                match action {
                    ControlAction::Start => self.start(),
                    ControlAction::Reset => self.reset(),
                }
                Some(action)
            }
            PointerEvent::Dragged(pointer) => {
                self.panel.drag(pointer);
                None
            }
            PointerEvent::Released(_) => {
                self.panel.release();
                None
            }
        }
    }

    fn read_parameters(&self) -> Result<ModelParameters, ConfigError> {
        ModelParameters::new(
            self.panel.value(ParameterId::MaxGrowthRate),
            self.constants.half_saturation_g_per_L,
            self.constants.yield_coefficient,
            self.panel.value(ParameterId::DilutionRate),
            self.panel.value(ParameterId::FeedSubstrate),
        )
    }

    // === Read-only views for the presentation layer ===

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.panel
    }

    /// Direct panel access for keyboard nudges and tests
    pub fn controls_mut(&mut self) -> &mut ControlPanel {
        &mut self.panel
    }

    pub fn cosmetic(&self) -> &CosmeticState {
        &self.cosmetic
    }

    pub fn time_h(&self) -> f64 {
        self.integrator.time_h
    }

    pub fn tick_count(&self) -> u64 {
        self.integrator.step_count
    }

    pub fn dt_h(&self) -> f64 {
        self.integrator.dt_h()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SimulationController {
        SimulationController::new(&ChemostatConfig::default()).unwrap()
    }

    #[test]
    fn test_constructed_stopped_with_defaults() {
        let c = controller();
        assert_eq!(c.run_state(), RunState::Stopped);
        assert_eq!(*c.state(), SimulationState::new(0.1, 20.0));
        assert!(c.history().is_empty());
    }

    #[test]
    fn test_tick_is_noop_when_stopped() {
        let mut c = controller();
        c.tick();
        assert_eq!(c.tick_count(), 0);
        assert!(c.history().is_empty());
        assert_eq!(c.cosmetic().agitator_angle_rad, 0.0);
    }

    #[test]
    fn test_tick_appends_and_rotates() {
        let mut c = controller();
        c.start();
        c.tick();
        c.tick();

        assert_eq!(c.history().len(), 2);
        assert_eq!(c.history().last().copied(), Some((*c.state()).into()));
        assert!((c.cosmetic().agitator_angle_rad - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_midrun_slider_change_waits_for_reset() {
        let mut c = controller();
        c.start();
        c.tick();

        let slider = c.controls_mut().slider_mut(ParameterId::DilutionRate);
        slider.begin_drag();
        slider.update_drag(glam::Vec2::new(260.0, 350.0));
        slider.end_drag();
        assert_eq!(c.params().dilution_rate_per_h(), 0.2);

        c.reset();
        assert_eq!(c.params().dilution_rate_per_h(), 0.6);
    }
}
