//! Control panel layout and pointer routing.
//!
//! Five sliders stacked down the left edge and two buttons below them,
//! matching the classroom worksheet layout.

use glam::Vec2;

use super::button::ActionControl;
use super::slider::ParameterControl;
use super::{ControlAction, HitTest};
use crate::config::{ConfigError, ControlsConfig, SliderConfig};

const PANEL_LEFT: f32 = 40.0;
const TRACK_LENGTH: f32 = 220.0;
const FIRST_TRACK_Y: f32 = 140.0;
const TRACK_SPACING: f32 = 70.0;
const BUTTON_Y: f32 = 470.0;
const BUTTON_SIZE: Vec2 = Vec2::new(100.0, 35.0);
const BUTTON_GAP: f32 = 20.0;

/// Slider-bound parameters, in panel order
///
/// The discriminant is the slider's row; `ALL` lists variants in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterId {
    BiomassInitial = 0,
    SubstrateInitial = 1,
    MaxGrowthRate = 2,
    DilutionRate = 3,
    FeedSubstrate = 4,
}

impl ParameterId {
    pub const ALL: [ParameterId; 5] = [
        ParameterId::BiomassInitial,
        ParameterId::SubstrateInitial,
        ParameterId::MaxGrowthRate,
        ParameterId::DilutionRate,
        ParameterId::FeedSubstrate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ParameterId::BiomassInitial => "Initial biomass (X₀)",
            ParameterId::SubstrateInitial => "Initial substrate (S₀)",
            ParameterId::MaxGrowthRate => "μmax",
            ParameterId::DilutionRate => "Dilution rate (D)",
            ParameterId::FeedSubstrate => "Feed substrate (Sf)",
        }
    }

    /// This parameter's range in the configuration
    pub fn slider_config(self, config: &ControlsConfig) -> &SliderConfig {
        match self {
            ParameterId::BiomassInitial => &config.biomass_initial,
            ParameterId::SubstrateInitial => &config.substrate_initial,
            ParameterId::MaxGrowthRate => &config.max_growth_rate,
            ParameterId::DilutionRate => &config.dilution_rate,
            ParameterId::FeedSubstrate => &config.feed_substrate,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            ParameterId::BiomassInitial | ParameterId::SubstrateInitial | ParameterId::FeedSubstrate => "g/L",
            ParameterId::MaxGrowthRate | ParameterId::DilutionRate => "h⁻¹",
        }
    }
}

/// All controls on the panel
#[derive(Debug, Clone)]
pub struct ControlPanel {
    /// Indexed by `ParameterId as usize`
    sliders: Vec<ParameterControl>,
    buttons: Vec<ActionControl>,
}

impl ControlPanel {
    pub fn from_config(config: &ControlsConfig) -> Result<Self, ConfigError> {
        let sliders = ParameterId::ALL
            .iter()
            .map(|&id| {
                let row = id as usize;
                let position = Vec2::new(PANEL_LEFT, FIRST_TRACK_Y + row as f32 * TRACK_SPACING);
                ParameterControl::new(id.label(), id.unit(), position, TRACK_LENGTH, id.slider_config(config))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let start = Vec2::new(PANEL_LEFT, BUTTON_Y);
        let reset = start + Vec2::new(BUTTON_SIZE.x + BUTTON_GAP, 0.0);
        let buttons = vec![
            ActionControl::new("START", start, BUTTON_SIZE, ControlAction::Start),
            ActionControl::new("RESET", reset, BUTTON_SIZE, ControlAction::Reset),
        ];

        Ok(Self { sliders, buttons })
    }

    pub fn slider(&self, id: ParameterId) -> &ParameterControl {
        &self.sliders[id as usize]
    }

    pub fn slider_mut(&mut self, id: ParameterId) -> &mut ParameterControl {
        &mut self.sliders[id as usize]
    }

    pub fn value(&self, id: ParameterId) -> f64 {
        self.slider(id).value()
    }

    pub fn sliders(&self) -> &[ParameterControl] {
        &self.sliders
    }

    pub fn buttons(&self) -> &[ActionControl] {
        &self.buttons
    }

    /// Grab any slider under the pointer and report a button press.
    pub fn press(&mut self, pointer: Vec2) -> Option<ControlAction> {
        for slider in self.sliders.iter_mut() {
            if slider.hit_test(pointer) {
                slider.begin_drag();
            }
        }

        self.buttons
            .iter()
            .find(|button| button.hit_test(pointer))
            .map(ActionControl::action)
    }

    pub fn drag(&mut self, pointer: Vec2) {
        for slider in self.sliders.iter_mut() {
            slider.update_drag(pointer);
        }
    }

    pub fn release(&mut self) {
        for slider in self.sliders.iter_mut() {
            slider.end_drag();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        ControlPanel::from_config(&ControlsConfig::default()).unwrap()
    }

    #[test]
    fn test_layout_matches_config_order() {
        let panel = panel();
        assert_eq!(panel.sliders().len(), 5);
        assert_eq!(panel.value(ParameterId::BiomassInitial), 0.1);
        assert_eq!(panel.value(ParameterId::FeedSubstrate), 30.0);
        assert_eq!(panel.slider(ParameterId::DilutionRate).track().0, Vec2::new(40.0, 350.0));
    }

    #[test]
    fn test_each_id_reads_its_own_slider() {
        let config = ControlsConfig {
            biomass_initial: SliderConfig::new(0.0, 10.0, 1.0),
            substrate_initial: SliderConfig::new(0.0, 10.0, 2.0),
            max_growth_rate: SliderConfig::new(0.0, 10.0, 3.0),
            dilution_rate: SliderConfig::new(0.0, 10.0, 4.0),
            feed_substrate: SliderConfig::new(0.0, 10.0, 5.0),
        };
        let panel = ControlPanel::from_config(&config).unwrap();

        for (row, id) in ParameterId::ALL.iter().enumerate() {
            assert_eq!(*id as usize, row, "{:?} out of order in ALL", id);
            assert_eq!(panel.value(*id), id.slider_config(&config).default);
            assert_eq!(panel.slider(*id).label(), id.label());
        }
    }

    #[test]
    fn test_press_on_button_reports_action() {
        let mut panel = panel();
        assert_eq!(panel.press(Vec2::new(90.0, 487.0)), Some(ControlAction::Start));
        assert_eq!(panel.press(Vec2::new(210.0, 487.0)), Some(ControlAction::Reset));
        assert_eq!(panel.press(Vec2::new(600.0, 50.0)), None);
    }

    #[test]
    fn test_press_drag_release_moves_one_slider() {
        let mut panel = panel();
        let handle = panel.slider(ParameterId::MaxGrowthRate).handle_position();

        assert_eq!(panel.press(handle), None);
        assert!(panel.slider(ParameterId::MaxGrowthRate).is_dragging());
        assert!(!panel.slider(ParameterId::DilutionRate).is_dragging());

        panel.drag(Vec2::new(260.0, 600.0));
        panel.release();
        panel.drag(Vec2::new(40.0, 280.0));

        assert_eq!(panel.value(ParameterId::MaxGrowthRate), 0.8);
        assert_eq!(panel.value(ParameterId::DilutionRate), 0.2);
        assert!(!panel.slider(ParameterId::MaxGrowthRate).is_dragging());
    }
}
