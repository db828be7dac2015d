//! Physical and cosmetic state of the reactor.

/// Concentrations inside the reactor vessel
///
/// Only ever replaced with the output of the kinetic step, which clamps both
/// fields at zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationState {
    /// Biomass concentration X (g/L)
    pub biomass_g_per_L: f64,
    /// Limiting substrate concentration S (g/L)
    pub substrate_g_per_L: f64,
}

impl SimulationState {
    pub fn new(biomass_g_per_L: f64, substrate_g_per_L: f64) -> Self {
        Self {
            biomass_g_per_L: biomass_g_per_L.max(0.0),
            substrate_g_per_L: substrate_g_per_L.max(0.0),
        }
    }
}

/// Whether the controller advances the model on each frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Stopped,
    Running,
}

impl RunState {
    pub fn is_running(self) -> bool {
        self == RunState::Running
    }
}

/// Decorative animation state, never read by the kinetic model
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CosmeticState {
    /// Agitator rotation (rad), wrapped to [0, 2π)
    pub agitator_angle_rad: f32,
}

impl CosmeticState {
    pub fn advance(&mut self, step_rad: f32) {
        self.agitator_angle_rad = (self.agitator_angle_rad + step_rad).rem_euclid(std::f32::consts::TAU);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_negative_concentrations() {
        let state = SimulationState::new(-1.0, -0.5);
        assert_eq!(state.biomass_g_per_L, 0.0);
        assert_eq!(state.substrate_g_per_L, 0.0);
    }

    #[test]
    fn test_agitator_angle_wraps() {
        let mut cosmetic = CosmeticState::default();
        for _ in 0..100 {
            cosmetic.advance(0.1);
        }
        assert!(cosmetic.agitator_angle_rad >= 0.0);
        assert!(cosmetic.agitator_angle_rad < std::f32::consts::TAU);
    }
}
