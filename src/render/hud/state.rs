//! HUD panel visibility state management.

/// Panel visibility toggles
#[derive(Debug, Clone)]
pub struct HudState {
    /// Show run metrics and steady-state analysis
    pub show_info_panel: bool,
    /// Show keyboard help (toggle with H key)
    pub show_help: bool,
    /// Show FPS in the info panel
    pub show_fps: bool,
    /// Floating panels enabled at all; the reactor canvas is always drawn
    pub hud_enabled: bool,
}

impl Default for HudState {
    fn default() -> Self {
        Self {
            show_info_panel: true,
            show_help: false,
            show_fps: true,
            hud_enabled: true,
        }
    }
}

impl HudState {
    pub fn toggle_hud(&mut self) {
        self.hud_enabled = !self.hud_enabled;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn toggle_info(&mut self) {
        self.show_info_panel = !self.show_info_panel;
    }
}
