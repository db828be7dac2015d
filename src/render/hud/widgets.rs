//! Custom HUD widgets for scientific data display.

use egui::{Color32, Pos2, Response, Sense, Stroke, Ui, Vec2, Widget};

use super::theme::{HudColors, HudTheme, HudTypography};
use crate::kinetics::CultureStatus;

/// Colored dot plus culture status text
pub struct StatusBadge {
    status: CultureStatus,
}

impl StatusBadge {
    pub fn new(status: CultureStatus) -> Self {
        Self { status }
    }
}

impl Widget for StatusBadge {
    fn ui(self, ui: &mut Ui) -> Response {
        let color = HudTheme::status_color(self.status);

        let response = ui.horizontal(|ui| {
            let (dot_rect, _) = ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
            ui.painter().circle_filled(dot_rect.center(), 4.0, color);

            ui.label(
                egui::RichText::new(HudTheme::status_text(self.status))
                    .size(HudTypography::TITLE_SIZE)
                    .color(color)
                    .strong(),
            );
        });

        response.response
    }
}

/// Section header with subtle line
pub fn section_header(ui: &mut Ui, text: &str) {
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(HudTypography::SMALL_SIZE)
                .color(HudColors::TEXT_LABEL)
                .strong(),
        );
        ui.add_space(4.0);
        let rect = ui.available_rect_before_wrap();
        ui.painter().line_segment(
            [
                Pos2::new(rect.left(), rect.center().y),
                Pos2::new(rect.right(), rect.center().y),
            ],
            Stroke::new(1.0, HudColors::BORDER),
        );
    });
    ui.add_space(2.0);
}

/// Key-value pair in compact format
pub fn key_value(ui: &mut Ui, key: &str, value: &str, color: Option<Color32>) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(key)
                .size(HudTypography::LABEL_SIZE)
                .color(HudColors::TEXT_LABEL),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value)
                    .size(HudTypography::VALUE_SIZE)
                    .family(egui::FontFamily::Monospace)
                    .color(color.unwrap_or(HudColors::TEXT_PRIMARY)),
            );
        });
    });
}
