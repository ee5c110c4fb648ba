// src/state/mod.rs
//
// The whole session in one value. Only `update::update` mutates it.

pub mod collection;
pub mod forms;
pub mod status;
pub mod view;

use crate::api::{Client, Product, Query};

pub use collection::{Collection, Ticket};
pub use forms::{ClientField, ClientForm, FormError, QueryField, QueryForm};
pub use status::{Status, Tone};
pub use view::ViewMode;

/// Submissions currently awaiting a response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pending {
    pub create_client: bool,
    pub create_query: bool,
    pub trigger_scrape: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub view: ViewMode,
    pub status: Option<Status>,

    // forms survive navigation
    pub query_form: QueryForm,
    pub client_form: ClientForm,
    /// Lookup key for the results view; independent of `query_form`.
    pub results_query_id: String,

    pub clients: Collection<Client>,
    pub queries: Collection<Query>,
    /// Client the loaded `queries` belong to.
    pub queries_client_id: Option<i64>,
    pub results: Collection<Product>,

    pub pending: Pending,
}

impl AppState {
    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn client_by_id(&self, id: i64) -> Option<&Client> {
        self.clients.items()?.iter().find(|c| c.id == id)
    }

    /// Loaded client matching the query form's selector, if it parses and exists.
    pub fn picked_client(&self) -> Option<&Client> {
        let id = self.query_form.selected_client()?.ok()?;
        self.client_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_clients() -> AppState {
        let mut state = AppState::default();
        state.clients.replace(vec![
            Client { id: 1, name: s!("Ana"), email: s!("a@x.com") },
            Client { id: 2, name: s!("Beto"), email: s!("b@x.com") },
        ]);
        state
    }

    #[test]
    fn client_by_id_needs_loaded_directory() {
        assert_eq!(AppState::default().client_by_id(1), None);
        let state = with_clients();
        assert_eq!(state.client_by_id(2).map(|c| c.name.as_str()), Some("Beto"));
        assert_eq!(state.client_by_id(9), None);
    }

    #[test]
    fn picked_client_follows_query_form() {
        let mut state = with_clients();
        assert_eq!(state.picked_client(), None);

        state.query_form.set(QueryField::ClientId, s!("1"));
        assert_eq!(state.picked_client().map(|c| c.id), Some(1));

        state.query_form.set(QueryField::ClientId, s!("abc"));
        assert_eq!(state.picked_client(), None);

        state.query_form.set(QueryField::ClientId, s!("7"));
        assert_eq!(state.picked_client(), None);
    }
}
