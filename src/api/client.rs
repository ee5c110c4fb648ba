// src/api/client.rs
//
// Blocking JSON client for the backend. Every call runs on a worker
// thread (GUI) or the main thread (CLI), never on the UI thread.

use std::time::Duration;

use reqwest::{
    blocking::{Client as HttpClient, RequestBuilder},
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{ApiError, ApiResult, Backend, types::*};
use crate::config::{consts::APP_USER_AGENT, options::normalize_base_url};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    http: HttpClient,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        // Transport timeouts are the backend's business, not ours.
        let http = HttpClient::builder()
            .user_agent(APP_USER_AGENT)
            .default_headers(headers)
            .timeout(None::<Duration>)
            .build()?;

        Ok(Self { base_url: normalize_base_url(base_url), http })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `GET /health`
    pub fn health(&self) -> ApiResult<Health> {
        self.send("GET /health", self.http.get(self.url("/health")))
    }

    /// `GET /query?client_email=`
    pub fn list_queries_by_email(&self, email: &str) -> ApiResult<Vec<Query>> {
        let req = self.http.get(self.url("/query")).query(&[("client_email", email)]);
        self.send("GET /query", req)
    }

    fn send<T: DeserializeOwned>(&self, what: &str, req: RequestBuilder) -> ApiResult<T> {
        logd!("HTTP: {} → {}", what, self.base_url);

        let resp = req.send().map_err(|e| {
            loge!("HTTP: {} transport error: {}", what, e);
            ApiError::from(e)
        })?;

        let status = resp.status();
        if !status.is_success() {
            let detail = resp.text().ok().and_then(|body| extract_detail(&body));
            logw!("HTTP: {} status={} detail={:?}", what, status.as_u16(), detail);
            return Err(ApiError::Status { status: status.as_u16(), detail });
        }

        let body = resp.text()?;
        logd!("HTTP: {} OK status={} bytes={}", what, status.as_u16(), body.len());
        serde_json::from_str(&body).map_err(|e| {
            loge!("HTTP: {} decode error: {}", what, e);
            ApiError::Decode(e.to_string())
        })
    }
}

impl Backend for ApiClient {
    fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.send("GET /client", self.http.get(self.url("/client")))
    }

    fn create_client(&self, body: &NewClient) -> ApiResult<CreateClientResponse> {
        self.send("POST /client", self.http.post(self.url("/client")).json(body))
    }

    fn create_query(&self, body: &NewQuery) -> ApiResult<CreateQueryResponse> {
        self.send("POST /query", self.http.post(self.url("/query")).json(body))
    }

    fn list_queries(&self, client_id: i64) -> ApiResult<Vec<Query>> {
        let req = self.http.get(self.url("/query")).query(&[("client_id", client_id)]);
        self.send("GET /query", req)
    }

    fn query_results(&self, query_id: i64) -> ApiResult<Vec<Product>> {
        let req = self.http.get(self.url("/query/results")).query(&[("query_id", query_id)]);
        self.send("GET /query/results", req)
    }

    fn trigger_scrape(&self) -> ApiResult<TriggerScrapeResponse> {
        self.send("POST /trigger-scrape", self.http.post(self.url("/trigger-scrape")))
    }
}

/// Pull `detail` out of an error body. Non-string details (validation
/// error lists) are kept as compact JSON.
fn extract_detail(body: &str) -> Option<String> {
    let v: Value = serde_json::from_str(body).ok()?;
    detail_text(v.get("detail")?)
}
