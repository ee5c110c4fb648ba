// src/gui/components/tabs.rs
//
// Top navigation. Switching is just an `Action::Navigate`; what entering
// a mode triggers (e.g. loading queries) is the reducer's business.

use eframe::egui;

use crate::{gui::router, state::AppState, update::Action};

pub fn draw(ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for page in router::all_pages() {
            let mode = page.mode();
            let selected = mode == state.view;

            // Re-selecting the current tab still navigates: View reloads.
            if ui.selectable_label(selected, page.title()).clicked() {
                out.push(Action::Navigate(mode));
            }
        }
    });
}
