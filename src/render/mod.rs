//! Rendering module using wgpu (WebGPU/Metal backend).
//!
//! The presentation layer only reads from the simulation controller; it never
//! mutates physical state.

pub mod hud;
mod pipeline;

pub use hud::{HudColors, HudOverlay, HudState, HudTheme};
pub use pipeline::RenderState;
