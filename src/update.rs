// src/update.rs
//
// One reducer for the whole dashboard. User input and fetch completions
// both arrive as `Action`s; the reducer mutates `AppState` and returns the
// requests to issue as `Effect`s. No I/O happens here.

use crate::api::{
    ApiResult, Client, CreateClientResponse, CreateQueryResponse, NewClient, NewQuery, Product,
    Query, TriggerScrapeResponse,
};
use crate::state::{AppState, ClientField, QueryField, Ticket, ViewMode, forms::parse_int};

pub const NO_CLIENTS: &str = "No clients found. Please create a client first.";
pub const NEED_CLIENT_ID: &str = "Please enter a Client ID to load queries.";
pub const NEED_QUERY_ID: &str = "Please enter a Query ID to load results.";
pub const QUERY_CREATED: &str = "Query created successfully!";
pub const SCRAPE_TRIGGERED: &str = "Scrape triggered successfully!";

#[derive(Debug)]
pub enum Action {
    /// Session start.
    Mounted,
    RefreshClients,
    Navigate(ViewMode),

    EditQuery(QueryField, String),
    EditClient(ClientField, String),
    EditResultsQueryId(String),

    SubmitQuery,
    SubmitClient,
    LoadQueries,
    LoadResults,
    TriggerScrape,
    DismissStatus,

    ClientsLoaded { ticket: Ticket, result: ApiResult<Vec<Client>> },
    QueriesLoaded { ticket: Ticket, client_id: i64, result: ApiResult<Vec<Query>> },
    ResultsLoaded { ticket: Ticket, query_id: i64, result: ApiResult<Vec<Product>> },
    ClientCreated(ApiResult<CreateClientResponse>),
    QueryCreated(ApiResult<CreateQueryResponse>),
    ScrapeTriggered(ApiResult<TriggerScrapeResponse>),
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Mounted => "Mounted",
            Action::RefreshClients => "RefreshClients",
            Action::Navigate(_) => "Navigate",
            Action::EditQuery(..) => "EditQuery",
            Action::EditClient(..) => "EditClient",
            Action::EditResultsQueryId(_) => "EditResultsQueryId",
            Action::SubmitQuery => "SubmitQuery",
            Action::SubmitClient => "SubmitClient",
            Action::LoadQueries => "LoadQueries",
            Action::LoadResults => "LoadResults",
            Action::TriggerScrape => "TriggerScrape",
            Action::DismissStatus => "DismissStatus",
            Action::ClientsLoaded { .. } => "ClientsLoaded",
            Action::QueriesLoaded { .. } => "QueriesLoaded",
            Action::ResultsLoaded { .. } => "ResultsLoaded",
            Action::ClientCreated(_) => "ClientCreated",
            Action::QueryCreated(_) => "QueryCreated",
            Action::ScrapeTriggered(_) => "ScrapeTriggered",
        }
    }
}

/// A request the reducer wants made. Each one resolves into exactly one `Action`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    FetchClients { ticket: Ticket },
    FetchQueries { ticket: Ticket, client_id: i64 },
    FetchResults { ticket: Ticket, query_id: i64 },
    CreateClient(NewClient),
    CreateQuery(NewQuery),
    TriggerScrape,
}

pub fn update(state: &mut AppState, action: Action) -> Vec<Effect> {
    logd!("Action: {}", action.name());

    match action {
        Action::Mounted | Action::RefreshClients => vec![fetch_clients(state)],

        Action::Navigate(mode) => {
            logf!("UI: View {:?} → {:?}", state.view, mode);
            state.view = mode;
            match mode {
                ViewMode::View => load_queries(state),
                ViewMode::Create | ViewMode::Results | ViewMode::Client => Vec::new(),
            }
        }

        Action::EditQuery(field, value) => {
            state.query_form.set(field, value);
            Vec::new()
        }
        Action::EditClient(field, value) => {
            state.client_form.set(field, value);
            Vec::new()
        }
        Action::EditResultsQueryId(value) => {
            state.results_query_id = value;
            Vec::new()
        }

        Action::SubmitQuery => submit_query(state),
        Action::SubmitClient => submit_client(state),
        Action::LoadQueries => load_queries(state),
        Action::LoadResults => load_results(state),
        Action::TriggerScrape => trigger_scrape(state),

        Action::DismissStatus => {
            state.clear_status();
            Vec::new()
        }

        Action::ClientsLoaded { ticket, result } => {
            if !state.clients.accept(ticket) {
                logd!("Clients: dropped stale response ticket={}", ticket);
                return Vec::new();
            }
            match result {
                Ok(clients) => {
                    logf!("Clients: loaded count={}", clients.len());
                    if clients.is_empty() {
                        state.set_status(status!(Warning, "{}", NO_CLIENTS));
                    }
                    state.clients.replace(clients);
                }
                Err(e) => {
                    loge!("Clients: fetch failed: {}", e);
                    state.set_status(status!(Failure, "Error fetching clients: {}", e.user_text()));
                }
            }
            Vec::new()
        }

        Action::QueriesLoaded { ticket, client_id, result } => {
            if !state.queries.accept(ticket) {
                logd!("Queries: dropped stale response ticket={}", ticket);
                return Vec::new();
            }
            match result {
                Ok(queries) => {
                    logf!("Queries: loaded client={} count={}", client_id, queries.len());
                    state.queries.replace(queries);
                    state.queries_client_id = Some(client_id);
                    state.clear_status();
                }
                Err(e) => {
                    loge!("Queries: fetch failed client={}: {}", client_id, e);
                    state.set_status(status!(Failure, "Error fetching queries: {}", e.user_text()));
                }
            }
            Vec::new()
        }

        Action::ResultsLoaded { ticket, query_id, result } => {
            if !state.results.accept(ticket) {
                logd!("Results: dropped stale response ticket={}", ticket);
                return Vec::new();
            }
            match result {
                Ok(products) => {
                    logf!("Results: loaded query={} products={}", query_id, products.len());
                    state.results.replace(products);
                    state.clear_status();
                }
                Err(e) => {
                    loge!("Results: fetch failed query={}: {}", query_id, e);
                    state.set_status(status!(Failure, "Error fetching results: {}", e.user_text()));
                }
            }
            Vec::new()
        }

        Action::ClientCreated(result) => {
            state.pending.create_client = false;
            match result {
                Ok(resp) => match resp.success_message() {
                    Some(msg) => {
                        logf!("Client: created");
                        state.set_status(status!(Success, "{}", msg));
                        state.client_form.clear();
                        vec![fetch_clients(state)]
                    }
                    None => {
                        logw!("Client: rejected: {}", resp.rejection());
                        state.set_status(status!(Failure, "{}", resp.rejection()));
                        Vec::new()
                    }
                },
                Err(e) => {
                    loge!("Client: create failed: {}", e);
                    state.set_status(status!(Failure, "Error: {}", e.user_text()));
                    Vec::new()
                }
            }
        }

        Action::QueryCreated(result) => {
            state.pending.create_query = false;
            // The query form is left as the user typed it, on any outcome.
            match result {
                Ok(resp) if resp.is_created() => {
                    logf!("Query: created");
                    state.set_status(status!(Success, "{}", QUERY_CREATED));
                }
                Ok(resp) => {
                    let why = resp.error.unwrap_or_else(|| s!("Unknown error"));
                    logw!("Query: rejected: {}", why);
                    state.set_status(status!(Failure, "{}", why));
                }
                Err(e) => {
                    loge!("Query: create failed: {}", e);
                    state.set_status(status!(Failure, "Error: {}", e.user_text()));
                }
            }
            Vec::new()
        }

        Action::ScrapeTriggered(result) => {
            state.pending.trigger_scrape = false;
            match result {
                Ok(resp) => {
                    let msg = resp
                        .message
                        .filter(|m| !m.is_empty())
                        .unwrap_or_else(|| s!(SCRAPE_TRIGGERED));
                    logf!("Scrape: {}", msg);
                    state.set_status(status!(Info, "{}", msg));
                }
                Err(e) => {
                    loge!("Scrape: trigger failed: {}", e);
                    state.set_status(status!(Failure, "Error triggering scrape: {}", e.user_text()));
                }
            }
            Vec::new()
        }
    }
}

fn fetch_clients(state: &mut AppState) -> Effect {
    Effect::FetchClients { ticket: state.clients.issue() }
}

fn load_queries(state: &mut AppState) -> Vec<Effect> {
    match state.query_form.selected_client() {
        None => {
            state.set_status(status!(Warning, "{}", NEED_CLIENT_ID));
            Vec::new()
        }
        Some(Err(e)) => {
            state.set_status(status!(Warning, "{}", e));
            Vec::new()
        }
        Some(Ok(client_id)) => {
            let ticket = state.queries.issue();
            vec![Effect::FetchQueries { ticket, client_id }]
        }
    }
}

fn load_results(state: &mut AppState) -> Vec<Effect> {
    if state.results_query_id.is_empty() {
        state.set_status(status!(Warning, "{}", NEED_QUERY_ID));
        return Vec::new();
    }
    match parse_int(&state.results_query_id, "Query ID") {
        Ok(query_id) => {
            let ticket = state.results.issue();
            vec![Effect::FetchResults { ticket, query_id }]
        }
        Err(e) => {
            state.set_status(status!(Warning, "{}", e));
            Vec::new()
        }
    }
}

fn submit_query(state: &mut AppState) -> Vec<Effect> {
    if state.pending.create_query {
        logw!("Query: submit ignored, previous submit still pending");
        return Vec::new();
    }
    match state.query_form.to_request() {
        Ok(body) => {
            state.pending.create_query = true;
            vec![Effect::CreateQuery(body)]
        }
        Err(e) => {
            state.set_status(status!(Warning, "{}", e));
            Vec::new()
        }
    }
}

fn submit_client(state: &mut AppState) -> Vec<Effect> {
    if state.pending.create_client {
        logw!("Client: submit ignored, previous submit still pending");
        return Vec::new();
    }
    match state.client_form.to_request() {
        Ok(body) => {
            state.pending.create_client = true;
            vec![Effect::CreateClient(body)]
        }
        Err(e) => {
            state.set_status(status!(Warning, "{}", e));
            Vec::new()
        }
    }
}

fn trigger_scrape(state: &mut AppState) -> Vec<Effect> {
    if state.pending.trigger_scrape {
        logw!("Scrape: trigger ignored, previous trigger still pending");
        return Vec::new();
    }
    state.pending.trigger_scrape = true;
    vec![Effect::TriggerScrape]
}
