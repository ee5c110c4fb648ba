// src/runner.rs
//
// Turns `Effect`s into backend calls. `perform` is what the GUI workers
// run on their threads; `Controller` runs the same loop synchronously for
// the CLI and for tests.

use std::collections::VecDeque;

use crate::api::{ApiError, Backend};
use crate::state::AppState;
use crate::update::{Action, Effect, update};

/// Execute one effect; the returned action feeds back into `update`.
pub fn perform<B: Backend + ?Sized>(backend: &B, effect: Effect) -> Action {
    logd!("Effect: {:?}", effect);
    match effect {
        Effect::FetchClients { ticket } => Action::ClientsLoaded { ticket, result: backend.list_clients() },
        Effect::FetchQueries { ticket, client_id } => Action::QueriesLoaded {
            ticket,
            client_id,
            result: backend.list_queries(client_id),
        },
        Effect::FetchResults { ticket, query_id } => Action::ResultsLoaded {
            ticket,
            query_id,
            result: backend.query_results(query_id),
        },
        Effect::CreateClient(body) => Action::ClientCreated(backend.create_client(&body)),
        Effect::CreateQuery(body) => Action::QueryCreated(backend.create_query(&body)),
        Effect::TriggerScrape => Action::ScrapeTriggered(backend.trigger_scrape()),
    }
}

/// The action an effect resolves to when it could not be performed at all.
pub fn fail(effect: Effect, err: ApiError) -> Action {
    match effect {
        Effect::FetchClients { ticket } => Action::ClientsLoaded { ticket, result: Err(err) },
        Effect::FetchQueries { ticket, client_id } => Action::QueriesLoaded { ticket, client_id, result: Err(err) },
        Effect::FetchResults { ticket, query_id } => Action::ResultsLoaded { ticket, query_id, result: Err(err) },
        Effect::CreateClient(_) => Action::ClientCreated(Err(err)),
        Effect::CreateQuery(_) => Action::QueryCreated(Err(err)),
        Effect::TriggerScrape => Action::ScrapeTriggered(Err(err)),
    }
}

/// Synchronous driver: every effect is performed and its action applied
/// before `dispatch` returns.
pub struct Controller<B> {
    pub state: AppState,
    backend: B,
}

impl<B: Backend> Controller<B> {
    pub fn new(backend: B) -> Self {
        Self { state: AppState::default(), backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Apply `action` and everything it transitively triggers.
    /// Returns how many effects were performed.
    pub fn dispatch(&mut self, action: Action) -> usize {
        let mut queue = VecDeque::from([action]);
        let mut performed = 0;
        while let Some(next) = queue.pop_front() {
            for effect in update(&mut self.state, next) {
                performed += 1;
                queue.push_back(perform(&self.backend, effect));
            }
        }
        performed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_effect_releases_pending_flag() {
        let mut st = AppState::default();
        let fx = update(&mut st, Action::TriggerScrape);
        assert!(st.pending.trigger_scrape);

        let action = fail(fx[0].clone(), ApiError::Transport(s!("spawn failed")));
        update(&mut st, action);
        assert!(!st.pending.trigger_scrape);
        assert_eq!(st.status.map(|s| s.text), Some(s!("Error triggering scrape: spawn failed")));
    }

    #[test]
    fn failed_fetch_settles_its_ticket() {
        let mut st = AppState::default();
        let fx = update(&mut st, Action::Mounted);
        update(&mut st, fail(fx[0].clone(), ApiError::Transport(s!("x"))));
        assert!(!st.clients.is_loading());
        assert!(!st.clients.is_loaded());
    }
}
