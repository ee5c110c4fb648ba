// src/api/types.rs
//
// Wire schemas for the six dashboard endpoints plus /health.
// Unknown fields are ignored; fields the backend is known to omit are Option.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub id: i64,
    pub name: String,
    pub email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub query_id: i64,
    /// Not echoed by the backend's per-client listing.
    #[serde(default)]
    pub client_id: Option<i64>,
    pub query_text: String,
    pub frequency: String,
    pub pages_to_scrape: i64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub removed_at: Option<String>,
}

/// Products are keyed by whatever the backend groups on; that has been
/// both an integer id and a product name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Int(n) => write!(f, "{n}"),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub listings: Vec<Listing>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub img_url: Option<String>,
    /// Chronological; the last entry is the current price.
    #[serde(default)]
    pub prices: Vec<Price>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Price {
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/* ---------- request bodies ---------- */

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewClient {
    pub client_name: String,
    pub client_email: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewQuery {
    pub query_text: String,
    pub client_id: i64,
    pub frequency: String,
    pub pages_to_scrape: i64,
}

/* ---------- response bodies ---------- */

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateClientResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// FastAPI sends a string here, or a list of validation errors.
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub client: Option<Client>,
}

impl CreateClientResponse {
    /// Success carries a non-empty `message`; anything else is a rejection.
    pub fn success_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    pub fn rejection(&self) -> String {
        self.detail
            .as_ref()
            .and_then(detail_text)
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| s!("Unknown error"))
    }
}

/// A `detail` value as text: strings as-is, null as absent, anything else as compact JSON.
pub(crate) fn detail_text(v: &Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CreateQueryResponse {
    #[serde(default)]
    pub message: Option<String>,
    /// Opaque echo of the stored row; only its presence matters.
    #[serde(default)]
    pub query: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CreateQueryResponse {
    pub fn is_created(&self) -> bool {
        self.query.as_ref().is_some_and(|q| !q.is_null())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TriggerScrapeResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Health {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}
