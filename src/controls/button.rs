//! Rectangular push buttons.

use glam::Vec2;

use super::{ControlAction, HitTest};

/// A button that fires its action once per qualifying press
#[derive(Debug, Clone)]
pub struct ActionControl {
    /// Top-left corner
    position: Vec2,
    size: Vec2,
    label: String,
    action: ControlAction,
}

impl ActionControl {
    pub fn new(label: impl Into<String>, position: Vec2, size: Vec2, action: ControlAction) -> Self {
        Self {
            position,
            size,
            label: label.into(),
            action,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn action(&self) -> ControlAction {
        self.action
    }

    /// (top-left, bottom-right)
    pub fn bounds(&self) -> (Vec2, Vec2) {
        (self.position, self.position + self.size)
    }
}

impl HitTest for ActionControl {
    /// Strict containment; the border itself does not count
    fn hit_test(&self, pointer: Vec2) -> bool {
        let (min, max) = self.bounds();
        pointer.x > min.x && pointer.x < max.x && pointer.y > min.y && pointer.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_containment() {
        let button = ActionControl::new("START", Vec2::new(40.0, 470.0), Vec2::new(100.0, 35.0), ControlAction::Start);

        assert!(button.hit_test(Vec2::new(90.0, 487.0)));
        assert!(!button.hit_test(Vec2::new(40.0, 487.0)));
        assert!(!button.hit_test(Vec2::new(140.0, 487.0)));
        assert!(!button.hit_test(Vec2::new(90.0, 506.0)));
        assert!(!button.hit_test(Vec2::new(200.0, 487.0)));
    }
}
