// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    present,
    state::{AppState, ViewMode},
    update::Action,
};

pub mod create_client;
pub mod create_query;
pub mod results;
pub mod view_queries;

/// One page per view mode. Pages only read state; anything the user does
/// is pushed onto `out` and dispatched after the frame is laid out.
pub trait Page: Send + Sync + 'static {
    fn mode(&self) -> ViewMode;

    fn title(&self) -> &'static str {
        self.mode().label()
    }

    fn draw(&self, ui: &mut egui::Ui, state: &AppState, out: &mut Vec<Action>);
}

/// Labelled single-line input. Returns the new text when it was edited.
pub(super) fn text_field(ui: &mut egui::Ui, label: &str, value: &str, hint: &str) -> Option<String> {
    let mut buf = s!(value);
    ui.label(egui::RichText::new(label).strong());
    let changed = ui
        .add(egui::TextEdit::singleline(&mut buf).hint_text(hint).desired_width(f32::INFINITY))
        .changed();
    changed.then_some(buf)
}

/// Client dropdown bound to `query_form.client_id`. Returns the new id when picked.
pub(super) fn client_picker(ui: &mut egui::Ui, id_salt: &str, state: &AppState) -> Option<String> {
    let selected = state.query_form.client_id.as_str();
    let selected_text = state
        .picked_client()
        .map(present::client_option)
        .unwrap_or_else(|| s!("Select a client..."));

    let mut choice = s!(selected);
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected_text)
        .width(ui.available_width().min(420.0))
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut choice, s!(), "Select a client...");
            for c in state.clients.items().unwrap_or_default() {
                ui.selectable_value(&mut choice, c.id.to_string(), present::client_option(c));
            }
        });

    (choice != selected).then_some(choice)
}

/// Centered placeholder for a list with nothing to show.
pub(super) fn empty_state(ui: &mut egui::Ui, icon: &str, title: &str, hint: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.label(egui::RichText::new(icon).size(40.0));
        ui.heading(title);
        ui.weak(hint);
        ui.add_space(24.0);
    });
}

pub(super) fn loading(ui: &mut egui::Ui, what: &str) {
    ui.horizontal(|ui| {
        ui.spinner();
        ui.label(format!("Loading {what}..."));
    });
}
