//! Pointer-driven controls for the chemostat panel.
//!
//! Coordinates are logical points with the origin at the top-left of the
//! window, the same space the HUD draws in.

mod button;
mod panel;
mod slider;

pub use button::ActionControl;
pub use panel::{ControlPanel, ParameterId};
pub use slider::{ParameterControl, HANDLE_HIT_RADIUS};

use glam::Vec2;

/// Anything that can claim a pointer position
pub trait HitTest {
    fn hit_test(&self, pointer: Vec2) -> bool;
}

/// Pointer events delivered between frames
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Vec2),
    Dragged(Vec2),
    Released(Vec2),
}

/// Discrete actions bound to buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Reset,
}
