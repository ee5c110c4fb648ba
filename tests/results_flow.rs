// tests/results_flow.rs
//
// Results lookup by query id, and how the cards come out.
//
mod support;

use mercado_scrape::{
    api::ApiError,
    config::consts::PLACEHOLDER_IMG_URL,
    present::{self, ListState},
    runner::Controller,
    state::Tone,
    update::{Action, NEED_QUERY_ID},
};
use mockall::predicate::eq;
use support::{InMemoryBackend, MockApi, listing, product};

fn load(ctl: &mut Controller<impl mercado_scrape::api::Backend>, id: &str) -> usize {
    ctl.dispatch(Action::EditResultsQueryId(id.into()));
    ctl.dispatch(Action::LoadResults)
}

#[test]
fn latest_price_is_last_in_history() {
    let backend = InMemoryBackend::default();
    backend.add_results(7, vec![product(1, Some("Notebook"), vec![listing("https://example.com/1", &[Some(100.0), Some(150.0)])])]);
    let mut ctl = Controller::new(backend);

    assert_eq!(load(&mut ctl, "7"), 1);

    let products = ctl.state.results.items().unwrap();
    let card = present::product_card(&products[0]);
    assert_eq!(card.title, "Notebook");
    assert_eq!(card.listings[0].price, "150");
    assert_eq!(card.listings[0].history.len(), 2);
}

#[test]
fn empty_price_list_is_na() {
    let backend = InMemoryBackend::default();
    backend.add_results(7, vec![product(1, None, vec![listing("https://example.com/1", &[])])]);
    let mut ctl = Controller::new(backend);

    load(&mut ctl, "7");

    let card = present::product_card(&ctl.state.results.items().unwrap()[0]);
    assert_eq!(card.listings[0].price, "N/A");
    assert_eq!(card.title, "Producto 1");
    assert_eq!(card.image_url, PLACEHOLDER_IMG_URL);
}

#[test]
fn product_without_listings_has_no_lines() {
    let backend = InMemoryBackend::default();
    backend.add_results(7, vec![product(3, None, Vec::new())]);
    let mut ctl = Controller::new(backend);

    load(&mut ctl, "7");

    let card = present::product_card(&ctl.state.results.items().unwrap()[0]);
    assert!(card.listings.is_empty());
}

#[test]
fn unknown_query_is_loaded_empty_not_unloaded() {
    let mut ctl = Controller::new(InMemoryBackend::default());

    assert!(matches!(present::list_state(&ctl.state.results), ListState::NotLoaded));
    load(&mut ctl, "404");
    assert!(matches!(present::list_state(&ctl.state.results), ListState::Empty));
    assert!(ctl.state.status.is_none());
}

#[test]
fn missing_query_id_warns_without_request() {
    let mut api = MockApi::new();
    api.expect_query_results().times(0);
    let mut ctl = Controller::new(api);

    assert_eq!(ctl.dispatch(Action::LoadResults), 0);

    let status = ctl.state.status.clone().unwrap();
    assert_eq!(status.tone, Tone::Warning);
    assert_eq!(status.text, NEED_QUERY_ID);
}

#[test]
fn failure_keeps_previous_results() {
    let mut api = MockApi::new();
    api.expect_query_results()
        .with(eq(1))
        .times(1)
        .returning(|_| Ok(vec![product(1, Some("A"), Vec::new())]));
    api.expect_query_results()
        .with(eq(2))
        .times(1)
        .returning(|_| Err(ApiError::Status { status: 404, detail: Some("Query not found".into()) }));
    let mut ctl = Controller::new(api);

    load(&mut ctl, "1");
    load(&mut ctl, "2");

    let status = ctl.state.status.clone().unwrap();
    assert_eq!(status.tone, Tone::Failure);
    assert_eq!(status.text, "Error fetching results: Query not found");
    assert_eq!(ctl.state.results.items().map(|p| p.len()), Some(1));
}

#[test]
fn separators_between_listings() {
    let backend = InMemoryBackend::default();
    backend.add_results(
        7,
        vec![product(1, None, vec![listing("https://a", &[Some(1.0)]), listing("https://b", &[Some(2.0)])])],
    );
    let mut ctl = Controller::new(backend);

    load(&mut ctl, "7");

    let card = present::product_card(&ctl.state.results.items().unwrap()[0]);
    let seps: Vec<bool> = card.listings.iter().map(|l| l.separator_after).collect();
    assert_eq!(seps, vec![true, false]);
}

#[test]
fn scrape_trigger_reports_backend_message() {
    let mut ctl = Controller::new(InMemoryBackend::default());
    ctl.dispatch(Action::TriggerScrape);

    let status = ctl.state.status.clone().unwrap();
    assert_eq!(status.tone, Tone::Info);
    assert_eq!(status.text, "Scrape triggered");
    assert!(!ctl.state.pending.trigger_scrape);
}
