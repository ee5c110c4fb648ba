// src/gui/pages/create_query.rs
use eframe::egui;

use crate::{
    present::{self, ListState},
    state::{AppState, QueryField, ViewMode},
    update::Action,
};

use super::{client_picker, loading, text_field};

pub struct CreateQueryPage;
pub static PAGE: CreateQueryPage = CreateQueryPage;

impl super::Page for CreateQueryPage {
    fn mode(&self) -> ViewMode { ViewMode::Create }

    fn draw(&self, ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
        let form = &state.query_form;

        ui.heading("➕ Create new product query");
        ui.add_space(8.0);

        if let Some(v) = text_field(ui, "Search text", &form.query_text, "e.g. iPhone 15 Pro Max") {
            out.push(Action::EditQuery(QueryField::QueryText, v));
        }
        ui.add_space(6.0);

        ui.label(egui::RichText::new("Client").strong());
        ui.horizontal(|ui| {
            match present::list_state(&state.clients) {
                ListState::Loading => loading(ui, "clients"),
                ListState::NotLoaded => { ui.weak("Clients not loaded"); }
                ListState::Empty | ListState::Rows(_) => {
                    if let Some(v) = client_picker(ui, "create_query_client", state) {
                        out.push(Action::EditQuery(QueryField::ClientId, v));
                    }
                }
            }
            if ui.small_button("↻").on_hover_text("Reload clients").clicked() {
                out.push(Action::RefreshClients);
            }
        });
        ui.add_space(6.0);

        ui.columns(2, |cols| {
            if let Some(v) = text_field(&mut cols[0], "Frequency", &form.frequency, "daily") {
                out.push(Action::EditQuery(QueryField::Frequency, v));
            }
            if let Some(v) = text_field(&mut cols[1], "Pages to scrape", &form.pages_to_scrape, "1") {
                out.push(Action::EditQuery(QueryField::PagesToScrape, v));
            }
        });

        ui.add_space(12.0);
        let pending = state.pending.create_query;
        ui.horizontal(|ui| {
            if ui.add_enabled(!pending, egui::Button::new("🚀 Create query")).clicked() {
                out.push(Action::SubmitQuery);
            }
            if pending {
                ui.spinner();
            }
        });
    }
}
