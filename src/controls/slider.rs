//! Horizontal slider bound to one model parameter.

use glam::Vec2;

use super::HitTest;
use crate::config::{ConfigError, SliderConfig};

/// Distance from the handle centre that still grabs it (points)
pub const HANDLE_HIT_RADIUS: f32 = 10.0;

/// A draggable control mapping a horizontal track onto `[min, max]`
///
/// The value never leaves its range: it is clamped on construction and every
/// drag clamps the pointer to the track before mapping it back.
#[derive(Debug, Clone)]
pub struct ParameterControl {
    /// Left end of the track
    position: Vec2,
    /// Track length (points)
    length: f32,
    min: f64,
    max: f64,
    value: f64,
    label: String,
    unit: String,
    dragging: bool,
}

impl ParameterControl {
    pub fn new(
        label: impl Into<String>,
        unit: impl Into<String>,
        position: Vec2,
        length: f32,
        range: &SliderConfig,
    ) -> Result<Self, ConfigError> {
        let label = label.into();
        range.validate(&label)?;
        if !(length > 0.0) {
            return Err(ConfigError::non_positive(format!("{} track length", label), length as f64));
        }

        Ok(Self {
            position,
            length,
            min: range.min,
            max: range.max,
            value: range.clamped_default(),
            label,
            unit: unit.into(),
            dragging: false,
        })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Track endpoints (left, right)
    pub fn track(&self) -> (Vec2, Vec2) {
        (self.position, self.position + Vec2::new(self.length, 0.0))
    }

    /// Handle centre: the value interpolated along the track
    pub fn handle_position(&self) -> Vec2 {
        let t = ((self.value - self.min) / (self.max - self.min)) as f32;
        self.position + Vec2::new(t * self.length, 0.0)
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Follow the pointer's x while dragging; ignored otherwise
    pub fn update_drag(&mut self, pointer: Vec2) {
        if !self.dragging {
            return;
        }
        let x = pointer.x.clamp(self.position.x, self.position.x + self.length);
        let t = ((x - self.position.x) / self.length) as f64;
        // Endpoint-exact lerp: t = 0 gives min, t = 1 gives max
        self.value = (self.min * (1.0 - t) + self.max * t).clamp(self.min, self.max);
    }

    pub fn end_drag(&mut self) {
        self.dragging = false;
    }
}

impl HitTest for ParameterControl {
    fn hit_test(&self, pointer: Vec2) -> bool {
        pointer.distance(self.handle_position()) < HANDLE_HIT_RADIUS
    }
}
