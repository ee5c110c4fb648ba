// src/gui/pages/view_queries.rs
use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::{
    api::Query,
    present::{self, ListState},
    state::{AppState, QueryField, ViewMode},
    update::Action,
};

use super::{client_picker, empty_state, loading};

pub struct ViewQueriesPage;
pub static PAGE: ViewQueriesPage = ViewQueriesPage;

const HEADERS: [&str; 6] = ["ID", "Search text", "Client", "Frequency", "Pages", "Created"];

impl super::Page for ViewQueriesPage {
    fn mode(&self) -> ViewMode { ViewMode::View }

    fn draw(&self, ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
        ui.heading("📋 Existing queries");
        ui.add_space(8.0);

        // Same selector as the create form; both edit `query_form.client_id`.
        ui.label(egui::RichText::new("Client").strong());
        ui.horizontal(|ui| {
            if let Some(v) = client_picker(ui, "view_queries_client", state) {
                out.push(Action::EditQuery(QueryField::ClientId, v));
            }
            if ui.button("🔍 Load queries").clicked() {
                out.push(Action::LoadQueries);
            }
        });
        ui.add_space(8.0);

        match present::list_state(&state.queries) {
            ListState::NotLoaded => empty_state(
                ui,
                "📋",
                "No queries loaded",
                "Pick a client and load its queries",
            ),
            ListState::Loading => loading(ui, "queries"),
            ListState::Empty => empty_state(
                ui,
                "📋",
                "No queries found",
                "This client has no queries yet",
            ),
            ListState::Rows(rows) => {
                if state.queries.is_loading() {
                    loading(ui, "queries");
                }
                table(ui, rows, state.queries_client_id);
            }
        }
    }
}

fn table(ui: &mut egui::Ui, rows: &[Query], requested_for: Option<i64>) {
    TableBuilder::new(ui)
        .vscroll(false)
        .striped(true)
        .column(Column::auto().at_least(40.0))
        .column(Column::remainder().at_least(200.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(140.0))
        .header(22.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|mut body| {
            for q in rows {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.monospace(q.query_id.to_string()); });
                    row.col(|ui| { ui.label(format!("🔍 {}", q.query_text)); });
                    row.col(|ui| { ui.label(present::query_owner(q, requested_for)); });
                    row.col(|ui| { ui.label(&q.frequency); });
                    row.col(|ui| { ui.label(q.pages_to_scrape.to_string()); });
                    row.col(|ui| { ui.weak(q.created_at.as_deref().unwrap_or("")); });
                });
            }
        });
}
