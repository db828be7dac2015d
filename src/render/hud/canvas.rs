//! The reactor scene: control panel, vessel schematic and time-series plot.
//!
//! Painted on egui's background layer in the same logical-point coordinates
//! the controls hit-test in, so what is drawn is exactly what is clickable.

use egui::{Align2, Context, FontFamily, FontId, LayerId, Painter, Pos2, Rect, Shape, Stroke};
use glam::Vec2;

use super::theme::{HudColors, HudTheme, HudTypography};
use crate::controls::{ActionControl, ParameterControl};
use crate::simulation::SimulationController;
use crate::state::{HistoryBuffer, HistorySample};

const HANDLE_RADIUS: f32 = 7.0;
const BUTTON_ROUNDING: f32 = 8.0;

/// Top-left of the vessel
const REACTOR_ORIGIN: Vec2 = Vec2::new(650.0, 50.0);
/// Impeller hub, relative to the vessel
const IMPELLER_HUB: Vec2 = Vec2::new(130.0, 250.0);

const PLOT_ORIGIN: Pos2 = Pos2::new(310.0, 430.0);
const PLOT_SIZE: egui::Vec2 = egui::vec2(740.0, 150.0);

fn to_pos(v: Vec2) -> Pos2 {
    Pos2::new(v.x, v.y)
}

fn font(size: f32) -> FontId {
    FontId::new(size, FontFamily::Proportional)
}

/// Paint the full scene for this frame
pub fn draw_scene(ctx: &Context, controller: &SimulationController) {
    let painter = ctx.layer_painter(LayerId::background());
    painter.rect_filled(ctx.screen_rect(), 0.0, HudColors::BACKGROUND);

    draw_panel(&painter, controller);
    draw_guidance(&painter);
    draw_reactor(&painter, controller);
    draw_plot(&painter, controller.history(), controller.dt_h());
}

fn draw_panel(painter: &Painter, controller: &SimulationController) {
    painter.text(
        Pos2::new(40.0, 100.0),
        Align2::LEFT_BOTTOM,
        "CONTROL PANEL",
        font(HudTypography::TITLE_SIZE + 1.0),
        HudColors::TEXT_PRIMARY,
    );

    let panel = controller.controls();
    for slider in panel.sliders() {
        draw_slider(painter, slider);
    }
    for button in panel.buttons() {
        draw_button(painter, button);
    }

    let state = controller.state();
    painter.text(
        Pos2::new(40.0, 520.0),
        Align2::LEFT_CENTER,
        format!("Biomass (X): {:.2} g/L", state.biomass_g_per_L),
        font(HudTypography::VALUE_SIZE),
        HudColors::BIOMASS,
    );
    painter.text(
        Pos2::new(40.0, 545.0),
        Align2::LEFT_CENTER,
        format!("Substrate (S): {:.2} g/L", state.substrate_g_per_L),
        font(HudTypography::VALUE_SIZE),
        HudColors::SUBSTRATE,
    );
}

fn draw_slider(painter: &Painter, slider: &ParameterControl) {
    let (left, right) = slider.track();

    painter.text(
        to_pos(left) - egui::vec2(0.0, 15.0),
        Align2::LEFT_BOTTOM,
        slider.label(),
        font(HudTypography::LABEL_SIZE),
        HudColors::TEXT_SECONDARY,
    );
    painter.line_segment([to_pos(left), to_pos(right)], Stroke::new(2.0, HudColors::BORDER_HIGHLIGHT));

    let handle_fill = if slider.is_dragging() {
        HudColors::ACCENT
    } else {
        HudColors::TEXT_PRIMARY
    };
    painter.circle(
        to_pos(slider.handle_position()),
        HANDLE_RADIUS,
        handle_fill,
        Stroke::new(1.0, HudColors::BORDER),
    );

    painter.text(
        to_pos(right) + egui::vec2(15.0, 0.0),
        Align2::LEFT_CENTER,
        format!("{:.2} {}", slider.value(), slider.unit()),
        FontId::new(HudTypography::LABEL_SIZE, FontFamily::Monospace),
        HudColors::TEXT_PRIMARY,
    );
}

fn draw_button(painter: &Painter, button: &ActionControl) {
    let (min, max) = button.bounds();
    let rect = Rect::from_min_max(to_pos(min), to_pos(max));

    painter.rect(rect, BUTTON_ROUNDING, HudColors::BUTTON, Stroke::new(1.0, HudColors::BORDER_HIGHLIGHT));
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        button.label(),
        font(HudTypography::TITLE_SIZE),
        HudColors::TEXT_PRIMARY,
    );
}

fn draw_guidance(painter: &Painter) {
    let lines = [
        "Notes:",
        "1. The reactor runs at constant volume.",
        "2. D controls cell washout.",
        "3. At steady state μ ≈ D.",
    ];
    for (i, line) in lines.iter().enumerate() {
        painter.text(
            Pos2::new(320.0, 80.0 + i as f32 * 20.0),
            Align2::LEFT_CENTER,
            *line,
            font(HudTypography::SMALL_SIZE + 1.0),
            HudColors::TEXT_LABEL,
        );
    }
}

fn draw_reactor(painter: &Painter, controller: &SimulationController) {
    let at = |x: f32, y: f32| to_pos(REACTOR_ORIGIN + Vec2::new(x, y));

    painter.text(
        at(130.0, -55.0),
        Align2::CENTER_CENTER,
        "CONTINUOUS BIOREACTOR (CHEMOSTAT)",
        font(HudTypography::TITLE_SIZE),
        HudColors::TEXT_PRIMARY,
    );

    // Vessel
    painter.rect(
        Rect::from_min_size(at(0.0, 0.0), egui::vec2(260.0, 370.0)),
        45.0,
        HudColors::VESSEL,
        Stroke::new(2.0, HudColors::BORDER_HIGHLIGHT),
    );

    // Feed
    let inlet = Stroke::new(4.0, HudColors::INLET);
    painter.line_segment([at(130.0, -40.0), at(130.0, 0.0)], inlet);
    painter.add(Shape::convex_polygon(
        vec![at(125.0, -10.0), at(135.0, -10.0), at(130.0, 0.0)],
        HudColors::INLET,
        inlet,
    ));

    // Effluent
    painter.line_segment([at(260.0, 250.0), at(320.0, 250.0)], Stroke::new(4.0, HudColors::OUTLET));

    // Liquid, turbidity from biomass relative to the largest reachable X = Yxs·Sf
    let params = controller.params();
    let max_biomass = params.yield_coefficient() * params.feed_substrate_g_per_L();
    let turbidity = controller.state().biomass_g_per_L / max_biomass;
    painter.rect_filled(
        Rect::from_min_size(at(15.0, 120.0), egui::vec2(230.0, 240.0)),
        35.0,
        HudTheme::liquid_color(turbidity),
    );

    // Shaft
    painter.line_segment([at(130.0, 10.0), at(130.0, 350.0)], Stroke::new(4.0, HudColors::SHAFT));

    // Impeller
    let hub = REACTOR_ORIGIN + IMPELLER_HUB;
    let rotation = Vec2::from_angle(controller.cosmetic().agitator_angle_rad);
    let blade = Stroke::new(4.0, HudColors::IMPELLER);
    for (a, b) in [
        (Vec2::new(-55.0, 0.0), Vec2::new(55.0, 0.0)),
        (Vec2::new(0.0, -45.0), Vec2::new(0.0, 45.0)),
    ] {
        painter.line_segment([to_pos(hub + rotation.rotate(a)), to_pos(hub + rotation.rotate(b))], blade);
    }
}

fn draw_plot(painter: &Painter, history: &HistoryBuffer, dt_h: f64) {
    let rect = Rect::from_min_size(PLOT_ORIGIN, PLOT_SIZE);
    painter.rect(rect, 0.0, HudColors::BAR_BG, Stroke::new(1.0, HudColors::BORDER_HIGHLIGHT));

    let y_max = history.peak().max(1.0) * 1.1;
    let samples = history.samples();

    let biomass = plot_points(samples, rect, y_max, |s| s.biomass_g_per_L);
    let substrate = plot_points(samples, rect, y_max, |s| s.substrate_g_per_L);
    for (points, color) in [(biomass, HudColors::BIOMASS), (substrate, HudColors::SUBSTRATE)] {
        if points.len() >= 2 {
            painter.add(Shape::line(points, Stroke::new(1.5, color)));
        }
    }

    // Legend and axes
    let small = font(HudTypography::SMALL_SIZE);
    painter.text(rect.left_top() + egui::vec2(8.0, 6.0), Align2::LEFT_TOP, "X (g/L)", small.clone(), HudColors::BIOMASS);
    painter.text(rect.left_top() + egui::vec2(60.0, 6.0), Align2::LEFT_TOP, "S (g/L)", small.clone(), HudColors::SUBSTRATE);
    painter.text(
        rect.right_top() + egui::vec2(-8.0, 6.0),
        Align2::RIGHT_TOP,
        format!("{:.1} g/L", y_max),
        small.clone(),
        HudColors::TEXT_LABEL,
    );
    painter.text(
        rect.right_bottom() + egui::vec2(0.0, 4.0),
        Align2::RIGHT_TOP,
        format!("{:.1} h", plot_span(samples.len(), rect.width()) as f64 * dt_h),
        small.clone(),
        HudColors::TEXT_LABEL,
    );
    painter.text(
        Pos2::new(rect.center().x, rect.bottom() + 4.0),
        Align2::CENTER_TOP,
        "Time (h)",
        small,
        HudColors::TEXT_SECONDARY,
    );
}

/// Samples spanned by the plot's width: one per point until the run outgrows it
fn plot_span(len: usize, width: f32) -> usize {
    len.max(width as usize).max(2) - 1
}

/// Map one series onto the plot rectangle.
///
/// Long runs are compressed to fit and decimated to roughly one vertex per
/// point of width; values are clamped into the rectangle.
pub(crate) fn plot_points(
    samples: &[HistorySample],
    rect: Rect,
    y_max: f64,
    value: impl Fn(&HistorySample) -> f64,
) -> Vec<Pos2> {
    let span = plot_span(samples.len(), rect.width());
    let stride = samples.len().div_ceil(rect.width().max(1.0) as usize).max(1);

    samples
        .iter()
        .enumerate()
        .step_by(stride)
        .map(|(i, sample)| {
            let x = rect.left() + rect.width() * i as f32 / span as f32;
            let fraction = (value(sample) / y_max).clamp(0.0, 1.0) as f32;
            Pos2::new(x, rect.bottom() - rect.height() * fraction)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(n: usize) -> Vec<HistorySample> {
        (0..n)
            .map(|i| HistorySample {
                biomass_g_per_L: i as f64,
                substrate_g_per_L: 10.0,
            })
            .collect()
    }

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::new(310.0, 430.0), egui::vec2(740.0, 150.0))
    }

    #[test]
    fn test_short_run_one_point_per_sample() {
        let points = plot_points(&samples(100), rect(), 20.0, |s| s.substrate_g_per_L);

        assert_eq!(points.len(), 100);
        assert_eq!(points[0].x, 310.0);
        assert!((points[1].x - points[0].x - 740.0 / 739.0).abs() < 1e-3);
        assert!((points[0].y - (580.0 - 75.0)).abs() < 1e-3);
    }

    #[test]
    fn test_long_run_fits_in_plot() {
        let points = plot_points(&samples(10_000), rect(), 1e9, |s| s.biomass_g_per_L);

        assert!(points.len() <= 740);
        for p in &points {
            assert!(p.x >= 310.0 && p.x <= 1050.0 + 1e-3, "x out of plot: {}", p.x);
        }
    }

    #[test]
    fn test_values_clamped_vertically() {
        let points = plot_points(&samples(50), rect(), 5.0, |s| s.biomass_g_per_L);
        for p in &points {
            assert!(p.y >= 430.0 && p.y <= 580.0);
        }
    }
}
