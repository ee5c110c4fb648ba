// src/api/mod.rs
//
// The backend contract. Nothing above this module does network I/O;
// the GUI workers, the CLI and the tests all talk to a `Backend`.

pub mod client;
pub mod types;

use thiserror::Error;

pub use client::ApiClient;
pub use types::*;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// Non-2xx. `detail` is the server's explanation, when it sent one.
    #[error("Request failed with status code {status}")]
    Status { status: u16, detail: Option<String> },

    /// 2xx, but the body did not match the expected schema.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the status slot: the server's detail if present, else our own message.
    pub fn user_text(&self) -> String {
        match self {
            ApiError::Status { detail: Some(d), .. } => d.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// The six dashboard endpoints.
pub trait Backend: Send + Sync {
    /// `GET /client`
    fn list_clients(&self) -> ApiResult<Vec<Client>>;
    /// `POST /client`
    fn create_client(&self, body: &NewClient) -> ApiResult<CreateClientResponse>;
    /// `POST /query`
    fn create_query(&self, body: &NewQuery) -> ApiResult<CreateQueryResponse>;
    /// `GET /query?client_id=`
    fn list_queries(&self, client_id: i64) -> ApiResult<Vec<Query>>;
    /// `GET /query/results?query_id=`
    fn query_results(&self, query_id: i64) -> ApiResult<Vec<Product>>;
    /// `POST /trigger-scrape`
    fn trigger_scrape(&self) -> ApiResult<TriggerScrapeResponse>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_text_prefers_detail() {
        let e = ApiError::Status { status: 400, detail: Some(s!("Client already exists")) };
        assert_eq!(e.user_text(), "Client already exists");
    }

    #[test]
    fn user_text_without_detail_uses_status_line() {
        let e = ApiError::Status { status: 500, detail: None };
        assert_eq!(e.user_text(), "Request failed with status code 500");
        let e = ApiError::Transport(s!("connection refused"));
        assert_eq!(e.user_text(), "connection refused");
    }
}
