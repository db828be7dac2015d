//! HUD theme system - "Laboratory Precision" dark theme.
//!
//! Scientific instrument palette with the two process-variable colors used
//! consistently across the readouts, the plot and the reactor liquid.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

use crate::kinetics::CultureStatus;

/// HUD color palette
pub struct HudColors;

impl HudColors {
    // === Background Colors ===
    /// Near-black with blue tint - main background
    pub const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 15);
    /// Dark slate panel background (95% opacity)
    pub const PANEL_BG: Color32 = Color32::from_rgba_premultiplied(20, 22, 30, 242);
    /// Slightly lighter for hover states
    pub const PANEL_BG_HOVER: Color32 = Color32::from_rgb(30, 33, 42);

    // === Text Colors ===
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 235, 240);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 170, 180);
    pub const TEXT_LABEL: Color32 = Color32::from_rgb(110, 120, 128);

    // === Status Colors ===
    /// Scientific blue - accent color
    pub const ACCENT: Color32 = Color32::from_rgb(100, 180, 255);
    pub const SUCCESS: Color32 = Color32::from_rgb(80, 200, 120);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 50);
    pub const CRITICAL: Color32 = Color32::from_rgb(255, 80, 80);

    // === Process Colors ===
    /// Biomass trace and readout
    pub const BIOMASS: Color32 = Color32::from_rgb(60, 190, 90);
    /// Substrate trace and readout
    pub const SUBSTRATE: Color32 = Color32::from_rgb(220, 70, 70);
    /// Sterile medium
    pub const MEDIUM: Color32 = Color32::from_rgb(70, 160, 220);
    /// Dense culture (medium tinted by cells)
    pub const CULTURE: Color32 = Color32::from_rgb(120, 150, 70);
    /// Feed line
    pub const INLET: Color32 = Color32::from_rgb(0, 170, 60);
    /// Effluent line
    pub const OUTLET: Color32 = Color32::from_rgb(210, 40, 40);

    // === Vessel ===
    pub const VESSEL: Color32 = Color32::from_rgb(70, 76, 88);
    pub const SHAFT: Color32 = Color32::from_rgb(150, 155, 165);
    pub const IMPELLER: Color32 = Color32::from_rgb(200, 205, 215);

    // === UI Element Colors ===
    pub const BAR_BG: Color32 = Color32::from_rgb(30, 35, 45);
    pub const BUTTON: Color32 = Color32::from_rgb(45, 52, 66);
    pub const BORDER: Color32 = Color32::from_rgb(50, 55, 65);
    pub const BORDER_HIGHLIGHT: Color32 = Color32::from_rgb(80, 100, 120);
}

/// Typography settings
pub struct HudTypography;

impl HudTypography {
    pub const TITLE_SIZE: f32 = 14.0;
    pub const VALUE_SIZE: f32 = 14.0;
    pub const LABEL_SIZE: f32 = 12.0;
    pub const SMALL_SIZE: f32 = 10.0;
}

/// HUD theme configuration
pub struct HudTheme {
    pub panel_rounding: f32,
    pub button_rounding: f32,
    pub panel_padding: f32,
    pub item_spacing: f32,
}

impl Default for HudTheme {
    fn default() -> Self {
        Self {
            panel_rounding: 6.0,
            button_rounding: 4.0,
            panel_padding: 12.0,
            item_spacing: 6.0,
        }
    }
}

impl HudTheme {
    /// Apply theme to egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();
        let mut visuals = Visuals::dark();

        visuals.panel_fill = HudColors::PANEL_BG;
        visuals.window_fill = HudColors::PANEL_BG;
        visuals.extreme_bg_color = HudColors::BACKGROUND;
        visuals.faint_bg_color = HudColors::PANEL_BG_HOVER;
        visuals.override_text_color = Some(HudColors::TEXT_PRIMARY);

        visuals.widgets.noninteractive.bg_fill = HudColors::PANEL_BG;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, HudColors::TEXT_SECONDARY);
        visuals.widgets.noninteractive.rounding = Rounding::same(self.panel_rounding);

        visuals.widgets.inactive.bg_fill = HudColors::BAR_BG;
        visuals.widgets.inactive.rounding = Rounding::same(self.button_rounding);
        visuals.widgets.hovered.bg_fill = HudColors::PANEL_BG_HOVER;
        visuals.widgets.hovered.rounding = Rounding::same(self.button_rounding);
        visuals.widgets.active.bg_fill = HudColors::ACCENT;

        visuals.window_stroke = Stroke::new(1.0, HudColors::BORDER);
        visuals.window_rounding = Rounding::same(self.panel_rounding);

        style.visuals = visuals;

        style.spacing.item_spacing = egui::vec2(self.item_spacing, self.item_spacing);
        style.spacing.window_margin = egui::Margin::same(self.panel_padding);

        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(HudTypography::TITLE_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(HudTypography::LABEL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Small,
            FontId::new(HudTypography::SMALL_SIZE, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Monospace,
            FontId::new(HudTypography::VALUE_SIZE, FontFamily::Monospace),
        );

        ctx.set_style(style);
    }

    pub fn status_color(status: CultureStatus) -> Color32 {
        match status {
            CultureStatus::Transient => HudColors::WARNING,
            CultureStatus::SteadyState => HudColors::SUCCESS,
            CultureStatus::Washout => HudColors::CRITICAL,
        }
    }

    pub fn status_text(status: CultureStatus) -> &'static str {
        match status {
            CultureStatus::Transient => "Transient",
            CultureStatus::SteadyState => "Steady state",
            CultureStatus::Washout => "Washout",
        }
    }

    /// Liquid color, from clear medium toward turbid culture as biomass rises
    pub fn liquid_color(biomass_fraction: f64) -> Color32 {
        let t = biomass_fraction.clamp(0.0, 1.0) as f32;
        let lerp = |a: u8, b: u8| (a as f32 + t * (b as f32 - a as f32)) as u8;

        Color32::from_rgb(
            lerp(HudColors::MEDIUM.r(), HudColors::CULTURE.r()),
            lerp(HudColors::MEDIUM.g(), HudColors::CULTURE.g()),
            lerp(HudColors::MEDIUM.b(), HudColors::CULTURE.b()),
        )
    }
}
