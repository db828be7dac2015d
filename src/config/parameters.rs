//! Parameter structures for the chemostat control panel and kinetic model.
//!
//! Ranges and defaults mirror the classroom exercise: five slider-bound
//! quantities plus the fixed yield and half-saturation constants.

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{require_positive, ConfigError};

/// Parameter file read by the binary when no `--config` is given
pub const DEFAULT_CONFIG_PATH: &str = "data/parameters/chemostat.json";

/// Top-level configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChemostatConfig {
    /// Slider ranges and starting values
    pub controls: ControlsConfig,
    /// Kinetic constants with no control exposed
    pub kinetics: KineticConstants,
    /// Time stepping
    pub integrator: IntegratorSettings,
    /// Purely cosmetic animation settings
    pub display: DisplayConfig,
}

impl ChemostatConfig {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file or fall back to the built-in defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str::<Self>(&contents) {
                Ok(config) => {
                    log::info!("Loaded chemostat parameters from {:?}", path.as_ref());
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse chemostat parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Chemostat parameters file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Check every range and constant.
    ///
    /// Slider defaults outside their range are not an error; the control
    /// clamps them on construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, slider) in self.controls.iter() {
            slider.validate(name)?;
        }
        // Every value these sliders can reach feeds the model directly
        for (name, slider) in [
            ("controls.max_growth_rate.min", &self.controls.max_growth_rate),
            ("controls.dilution_rate.min", &self.controls.dilution_rate),
            ("controls.feed_substrate.min", &self.controls.feed_substrate),
        ] {
            require_positive(name, slider.min)?;
        }
        self.kinetics.validate()?;
        require_positive("integrator.dt_h", self.integrator.dt_h)?;
        Ok(())
    }
}

/// Range and starting value of one slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl SliderConfig {
    pub const fn new(min: f64, max: f64, default: f64) -> Self {
        Self { min, max, default }
    }

    pub fn validate(&self, name: &str) -> Result<(), ConfigError> {
        // Written so that NaN bounds are rejected too
        if !(self.min < self.max) {
            return Err(ConfigError::invalid_range(name, self.min, self.max));
        }
        Ok(())
    }

    /// Starting value pulled into range; only meaningful after `validate`
    pub fn clamped_default(&self) -> f64 {
        self.default.clamp(self.min, self.max)
    }
}

/// The five slider-bound quantities
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Initial biomass X₀ (g/L)
    pub biomass_initial: SliderConfig,
    /// Initial substrate S₀ (g/L)
    pub substrate_initial: SliderConfig,
    /// Maximum specific growth rate μmax (1/h)
    pub max_growth_rate: SliderConfig,
    /// Dilution rate D = F/V (1/h)
    pub dilution_rate: SliderConfig,
    /// Feed substrate concentration Sf (g/L)
    pub feed_substrate: SliderConfig,
}

impl ControlsConfig {
    /// Sliders in panel order, with their configuration keys
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &SliderConfig)> {
        [
            ("biomass_initial", &self.biomass_initial),
            ("substrate_initial", &self.substrate_initial),
            ("max_growth_rate", &self.max_growth_rate),
            ("dilution_rate", &self.dilution_rate),
            ("feed_substrate", &self.feed_substrate),
        ]
        .into_iter()
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            biomass_initial: SliderConfig::new(0.05, 1.0, 0.1),
            substrate_initial: SliderConfig::new(5.0, 40.0, 20.0),
            max_growth_rate: SliderConfig::new(0.1, 0.8, 0.4),
            dilution_rate: SliderConfig::new(0.05, 0.6, 0.2),
            feed_substrate: SliderConfig::new(10.0, 50.0, 30.0),
        }
    }
}

/// Kinetic constants that are not bound to any control
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticConstants {
    /// Monod half-saturation constant Ks (g/L)
    pub half_saturation_g_per_L: f64,
    /// Biomass yield on substrate Yxs (g biomass / g substrate)
    pub yield_coefficient: f64,
}

impl KineticConstants {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("kinetics.half_saturation_g_per_L", self.half_saturation_g_per_L)?;
        require_positive("kinetics.yield_coefficient", self.yield_coefficient)?;
        Ok(())
    }
}

impl Default for KineticConstants {
    fn default() -> Self {
        Self {
            half_saturation_g_per_L: 0.5,
            yield_coefficient: 0.5,
        }
    }
}

/// Fixed-step integration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratorSettings {
    /// Simulated hours advanced per tick
    pub dt_h: f64,
}

impl Default for IntegratorSettings {
    fn default() -> Self {
        Self { dt_h: 0.03 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Agitator rotation per running tick (rad)
    pub agitator_step_rad: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            agitator_step_rad: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ChemostatConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_range_rejected() {
        let mut config = ChemostatConfig::default();
        config.controls.dilution_rate = SliderConfig::new(0.6, 0.6, 0.6);

        match config.validate() {
            Err(ConfigError::InvalidRange { name, .. }) => assert_eq!(name, "dilution_rate"),
            other => panic!("expected InvalidRange, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_yield_rejected() {
        let mut config = ChemostatConfig::default();
        config.kinetics.yield_coefficient = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::NonPositive { .. })));
    }

    #[test]
    fn test_rate_slider_reaching_zero_rejected() {
        let mut config = ChemostatConfig::default();
        config.controls.dilution_rate = SliderConfig::new(0.0, 0.6, 0.2);
        assert!(matches!(config.validate(), Err(ConfigError::NonPositive { .. })));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{ "integrator": { "dt_h": 0.01 } }"#;
        let config: ChemostatConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.integrator.dt_h, 0.01);
        assert_eq!(config.kinetics.yield_coefficient, 0.5);
        assert_eq!(config.controls.feed_substrate, SliderConfig::new(10.0, 50.0, 30.0));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ChemostatConfig::load_or_default("does/not/exist.json");
        assert_eq!(config.integrator.dt_h, 0.03);
    }
}
