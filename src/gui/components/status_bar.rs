// src/gui/components/status_bar.rs
use eframe::egui::{self, Color32};

use crate::{
    state::{AppState, Tone},
    update::Action,
};

fn colors(tone: Tone) -> (Color32, Color32) {
    // (fill, text)
    match tone {
        Tone::Success => (Color32::from_rgb(212, 237, 218), Color32::from_rgb(21, 87, 36)),
        Tone::Failure => (Color32::from_rgb(248, 215, 218), Color32::from_rgb(114, 28, 36)),
        Tone::Warning => (Color32::from_rgb(255, 243, 205), Color32::from_rgb(133, 100, 4)),
        Tone::Info => (Color32::from_rgb(209, 236, 241), Color32::from_rgb(12, 84, 96)),
    }
}

pub fn draw(ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
    let Some(status) = &state.status else { return };
    let (fill, text) = colors(status.tone);

    ui.add_space(6.0);
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(10, 6))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(status.to_string()).color(text).strong());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                        out.push(Action::DismissStatus);
                    }
                });
            });
        });
}
