// src/gui/router.rs
use crate::state::ViewMode::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::create_query::PAGE,
    &pages::view_queries::PAGE,
    &pages::results::PAGE,
    &pages::create_client::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(mode: ViewMode) -> &'static dyn Page {
    match mode {
        Create  => &pages::create_query::PAGE,
        View    => &pages::view_queries::PAGE,
        Results => &pages::results::PAGE,
        Client  => &pages::create_client::PAGE,
    }
}
