// src/gui/pages/create_client.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    present::{self, ListState},
    state::{AppState, ClientField, ViewMode},
    update::Action,
};

use super::{empty_state, loading, text_field};

pub struct CreateClientPage;
pub static PAGE: CreateClientPage = CreateClientPage;

impl super::Page for CreateClientPage {
    fn mode(&self) -> ViewMode { ViewMode::Client }

    fn draw(&self, ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
        let form = &state.client_form;

        ui.heading("👤 Create new client");
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.set_max_width(520.0);
            if let Some(v) = text_field(ui, "Client name", &form.client_name, "e.g. Juan Pérez") {
                out.push(Action::EditClient(ClientField::Name, v));
            }
            ui.add_space(6.0);
            if let Some(v) = text_field(ui, "Client email", &form.client_email, "e.g. juan@email.com") {
                out.push(Action::EditClient(ClientField::Email, v));
            }
            ui.add_space(12.0);

            let pending = state.pending.create_client;
            ui.horizontal(|ui| {
                if ui.add_enabled(!pending, egui::Button::new("✨ Create client")).clicked() {
                    out.push(Action::SubmitClient);
                }
                if pending {
                    ui.spinner();
                }
            });
        });

        ui.add_space(12.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.strong("Existing clients");
            if ui.small_button("↻").on_hover_text("Reload clients").clicked() {
                out.push(Action::RefreshClients);
            }
        });

        match present::list_state(&state.clients) {
            ListState::NotLoaded => { ui.weak("Clients not loaded"); }
            ListState::Loading => loading(ui, "clients"),
            ListState::Empty => empty_state(ui, "👤", "No clients yet", "Create the first one above"),
            ListState::Rows(rows) => {
                TableBuilder::new(ui)
                    .vscroll(false)
                    .striped(true)
                    .column(Column::auto().at_least(40.0))
                    .column(Column::auto().at_least(160.0))
                    .column(Column::remainder())
                    .header(22.0, |mut header| {
                        header.col(|ui| { ui.strong("ID"); });
                        header.col(|ui| { ui.strong("Name"); });
                        header.col(|ui| { ui.strong("Email"); });
                    })
                    .body(|mut body| {
                        for c in rows {
                            body.row(20.0, |mut row| {
                                row.col(|ui| { ui.monospace(c.id.to_string()); });
                                row.col(|ui| { ui.label(&c.name); });
                                row.col(|ui| { ui.label(&c.email); });
                            });
                        }
                    });
            }
        }
    }
}

