//! HUD panel definitions and rendering.

use egui::{Align2, Context, Window};

use super::state::HudState;
use super::theme::{HudColors, HudTypography};
use super::widgets::{key_value, section_header, StatusBadge};
use crate::state::{RunState, SimulationMetrics};

/// Render all floating panels
pub fn render_panels(ctx: &Context, state: &HudState, metrics: &SimulationMetrics) {
    if !state.hud_enabled {
        return;
    }

    if state.show_info_panel {
        render_info_panel(ctx, state, metrics);
    }

    if state.show_help {
        render_help_overlay(ctx);
    }
}

/// Run metrics and steady-state analysis (between panel and reactor)
fn render_info_panel(ctx: &Context, state: &HudState, metrics: &SimulationMetrics) {
    Window::new("CULTURE")
        .fixed_pos([320.0, 170.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(230.0);

            key_value(ui, "Time", &format!("{:.2} h", metrics.simulation_time_h), None);

            let (run_text, run_color) = match metrics.run_state {
                RunState::Running => ("RUNNING", HudColors::SUCCESS),
                RunState::Stopped => ("STOPPED", HudColors::TEXT_SECONDARY),
            };
            key_value(ui, "Run", run_text, Some(run_color));

            if state.show_fps {
                let fps_color = if metrics.fps >= 55.0 {
                    HudColors::SUCCESS
                } else if metrics.fps >= 30.0 {
                    HudColors::WARNING
                } else {
                    HudColors::CRITICAL
                };
                key_value(ui, "FPS", &format!("{:.0}", metrics.fps), Some(fps_color));
            }

            section_header(ui, "GROWTH");
            key_value(ui, "μ(S)", &format!("{:.3} h⁻¹", metrics.growth_rate_per_h), None);
            key_value(ui, "D", &format!("{:.3} h⁻¹", metrics.dilution_rate_per_h), None);
            key_value(ui, "D washout", &format!("{:.3} h⁻¹", metrics.washout_rate_per_h), None);

            section_header(ui, "PREDICTED STEADY STATE");
            key_value(
                ui,
                "X*",
                &format!("{:.2} g/L", metrics.steady_state.biomass_g_per_L),
                Some(HudColors::BIOMASS),
            );
            key_value(
                ui,
                "S*",
                &format!("{:.2} g/L", metrics.steady_state.substrate_g_per_L),
                Some(HudColors::SUBSTRATE),
            );

            ui.add_space(4.0);
            ui.add(StatusBadge::new(metrics.status));
        });
}

/// Help overlay (center)
fn render_help_overlay(ctx: &Context) {
    Window::new("KEYBOARD SHORTCUTS")
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(true)
        .show(ctx, |ui| {
            ui.set_min_width(260.0);

            section_header(ui, "SIMULATION");
            key_value(ui, "Space", "Start", None);
            key_value(ui, "R", "Reset", None);
            key_value(ui, "Mouse drag", "Move slider", None);

            section_header(ui, "HUD");
            key_value(ui, "H", "Toggle help", None);
            key_value(ui, "I", "Toggle culture panel", None);
            key_value(ui, "Tab", "Toggle HUD", None);
            key_value(ui, "Escape", "Quit", None);

            ui.add_space(8.0);
            ui.label(
                egui::RichText::new("Press H to close")
                    .size(HudTypography::SMALL_SIZE)
                    .color(HudColors::TEXT_SECONDARY),
            );
        });
}
