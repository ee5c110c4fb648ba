// src/gui/components/header.rs
use eframe::egui;

use crate::{state::AppState, update::Action};

pub fn draw(ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
    ui.horizontal(|ui| {
        ui.heading("🛒 Mercado Scrape Dashboard");

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let pending = state.pending.trigger_scrape;
            let button = egui::Button::new("⚡ Trigger scrape");
            if ui
                .add_enabled(!pending, button)
                .on_hover_text("Run the scraper for every active query now")
                .clicked()
            {
                out.push(Action::TriggerScrape);
            }
            if pending {
                ui.spinner();
            }
        });
    });
    ui.weak("Track product prices on MercadoLibre");
}
