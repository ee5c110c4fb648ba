// src/gui/pages/results.rs
//
// Product cards: thumbnail on the left, title and one block per listing
// on the right. Everything shown is shaped by `present::product_card`.

use eframe::egui;

use crate::{
    config::consts::STORE_LABEL,
    present::{self, ListState, ProductCard},
    state::{AppState, ViewMode},
    update::Action,
};

use super::{empty_state, loading, text_field};

pub struct ResultsPage;
pub static PAGE: ResultsPage = ResultsPage;

const THUMB: f32 = 120.0;

impl super::Page for ResultsPage {
    fn mode(&self) -> ViewMode { ViewMode::Results }

    fn draw(&self, ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>) {
        ui.heading("📦 Product results");
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.set_max_width(320.0);
                if let Some(v) = text_field(ui, "Query ID", &state.results_query_id, "e.g. 123") {
                    out.push(Action::EditResultsQueryId(v));
                }
            });
            ui.with_layout(egui::Layout::bottom_up(egui::Align::Min), |ui| {
                if ui.button("📥 Load results").clicked() {
                    out.push(Action::LoadResults);
                }
            });
        });
        ui.weak("💡 Query IDs are listed under \"View queries\"");
        ui.add_space(8.0);

        match present::list_state(&state.results) {
            ListState::NotLoaded => empty_state(ui, "📦", "No results loaded", "Enter a query ID to see its products"),
            ListState::Loading => loading(ui, "results"),
            ListState::Empty => empty_state(ui, "📦", "No results found", "This query has no products yet"),
            ListState::Rows(products) => {
                if state.results.is_loading() {
                    loading(ui, "results");
                }
                for (i, p) in products.iter().enumerate() {
                    card(ui, i, &present::product_card(p));
                    ui.add_space(6.0);
                }
            }
        }
    }
}

fn card(ui: &mut egui::Ui, index: usize, card: &ProductCard<'_>) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_top(|ui| {
            ui.add(
                egui::Image::new(card.image_url)
                    .fit_to_exact_size(egui::vec2(THUMB, THUMB))
                    .maintain_aspect_ratio(true)
                    .corner_radius(egui::CornerRadius::same(8)),
            )
            .on_hover_text(&card.title);

            ui.vertical(|ui| {
                ui.label(egui::RichText::new(format!("🛍️ {}", card.title)).strong());
                ui.add_space(4.0);

                if card.listings.is_empty() {
                    ui.weak("No price information");
                }
                for (j, line) in card.listings.iter().enumerate() {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            if let Some(t) = line.title {
                                ui.weak(t);
                            }
                            ui.label(format!("Price: ${}", line.price));
                            ui.label(format!("Store: {STORE_LABEL}"));
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if line.url.is_empty() {
                                ui.add_enabled(false, egui::Button::new("View"));
                            } else {
                                ui.hyperlink_to("View", line.url);
                            }
                        });
                    });

                    if line.has_history() {
                        egui::CollapsingHeader::new(format!("Price history ({})", line.history.len()))
                            .id_salt(("price_history", index, j))
                            .show(ui, |ui| {
                                for point in &line.history {
                                    ui.horizontal(|ui| {
                                        ui.monospace(format!("${}", point.price));
                                        if let Some(at) = point.at {
                                            ui.weak(at);
                                        }
                                    });
                                }
                            });
                    }

                    if line.separator_after {
                        ui.separator();
                    }
                }
            });
        });
    });
}
