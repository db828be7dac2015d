//! Configuration module for loading reactor and control parameters.
//!
//! Slider ranges, fixed kinetic constants and the integrator timestep are read
//! once at startup and validated before any control or model is built.

mod error;
mod parameters;

pub use error::ConfigError;
pub(crate) use error::require_positive;
pub use parameters::{
    ChemostatConfig, ControlsConfig, DisplayConfig, IntegratorSettings, KineticConstants,
    SliderConfig, DEFAULT_CONFIG_PATH,
};
