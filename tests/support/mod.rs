// tests/support/mod.rs
//
// Shared fixtures: a mockall `Backend`, a small in-memory backend that
// behaves like the real service, and a one-shot HTTP server for the
// reqwest client.
#![allow(dead_code)]

use std::{
    collections::HashMap,
    io::{BufRead, BufReader, Read, Write},
    net::TcpListener,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
        mpsc::{self, Receiver},
    },
    thread,
    time::Duration,
};

use mercado_scrape::api::*;
use mockall::mock;

mock! {
    pub Api {}
    impl Backend for Api {
        fn list_clients(&self) -> ApiResult<Vec<Client>>;
        fn create_client(&self, body: &NewClient) -> ApiResult<CreateClientResponse>;
        fn create_query(&self, body: &NewQuery) -> ApiResult<CreateQueryResponse>;
        fn list_queries(&self, client_id: i64) -> ApiResult<Vec<Query>>;
        fn query_results(&self, query_id: i64) -> ApiResult<Vec<Product>>;
        fn trigger_scrape(&self) -> ApiResult<TriggerScrapeResponse>;
    }
}

/* ---------- builders ---------- */

pub fn client(id: i64, name: &str, email: &str) -> Client {
    Client { id, name: name.to_string(), email: email.to_string() }
}

pub fn query(query_id: i64, text: &str) -> Query {
    Query {
        query_id,
        client_id: None,
        query_text: text.to_string(),
        frequency: "daily".to_string(),
        pages_to_scrape: 1,
        created_at: None,
        removed_at: None,
    }
}

pub fn listing(url: &str, prices: &[Option<f64>]) -> Listing {
    Listing {
        id: None,
        external_id: None,
        title: None,
        url: url.to_string(),
        img_url: None,
        prices: prices.iter().map(|p| Price { price: *p, created_at: None }).collect(),
    }
}

pub fn product(id: i64, title: Option<&str>, listings: Vec<Listing>) -> Product {
    Product { id: ProductId::Int(id), title: title.map(str::to_string), listings }
}

/* ---------- in-memory backend ---------- */

/// Enough of the service to run whole flows: clients are unique by email,
/// queries are listed per client, results are looked up by query id.
#[derive(Default)]
pub struct InMemoryBackend {
    clients: Mutex<Vec<Client>>,
    queries: Mutex<Vec<(i64, Query)>>,
    results: Mutex<HashMap<i64, Vec<Product>>>,
    pub list_clients_calls: AtomicUsize,
    pub list_queries_calls: AtomicUsize,
}

impl InMemoryBackend {
    pub fn with_clients(clients: Vec<Client>) -> Self {
        Self { clients: Mutex::new(clients), ..Self::default() }
    }

    pub fn add_results(&self, query_id: i64, products: Vec<Product>) {
        self.results.lock().unwrap().insert(query_id, products);
    }

    pub fn add_query(&self, client_id: i64, q: Query) {
        self.queries.lock().unwrap().push((client_id, q));
    }

    pub fn clients(&self) -> Vec<Client> {
        self.clients.lock().unwrap().clone()
    }
}

impl Backend for InMemoryBackend {
    fn list_clients(&self) -> ApiResult<Vec<Client>> {
        self.list_clients_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.clients())
    }

    fn create_client(&self, body: &NewClient) -> ApiResult<CreateClientResponse> {
        let mut clients = self.clients.lock().unwrap();
        if clients.iter().any(|c| c.email == body.client_email) {
            return Err(ApiError::Status { status: 400, detail: Some("Client already exists".into()) });
        }
        let id = clients.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let created = Client { id, name: body.client_name.clone(), email: body.client_email.clone() };
        clients.push(created.clone());
        Ok(CreateClientResponse {
            message: Some("Client created successfully".into()),
            client: Some(created),
            ..Default::default()
        })
    }

    fn create_query(&self, body: &NewQuery) -> ApiResult<CreateQueryResponse> {
        if !self.clients.lock().unwrap().iter().any(|c| c.id == body.client_id) {
            return Ok(CreateQueryResponse { error: Some("Client not found".into()), ..Default::default() });
        }
        let mut queries = self.queries.lock().unwrap();
        let q = Query {
            query_id: queries.len() as i64 + 1,
            client_id: Some(body.client_id),
            query_text: body.query_text.clone(),
            frequency: body.frequency.clone(),
            pages_to_scrape: body.pages_to_scrape,
            created_at: None,
            removed_at: None,
        };
        let echo = serde_json::to_value(&q).unwrap();
        queries.push((body.client_id, q));
        Ok(CreateQueryResponse { message: Some("Query created".into()), query: Some(echo), error: None })
    }

    fn list_queries(&self, client_id: i64) -> ApiResult<Vec<Query>> {
        self.list_queries_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .queries
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, _)| *owner == client_id)
            .map(|(_, q)| Query { client_id: None, ..q.clone() })
            .collect())
    }

    fn query_results(&self, query_id: i64) -> ApiResult<Vec<Product>> {
        Ok(self.results.lock().unwrap().get(&query_id).cloned().unwrap_or_default())
    }

    fn trigger_scrape(&self) -> ApiResult<TriggerScrapeResponse> {
        Ok(TriggerScrapeResponse { message: Some("Scrape triggered".into()) })
    }
}

/* ---------- one-shot HTTP fixture ---------- */

#[derive(Debug, Clone)]
pub struct Captured {
    pub method: String,
    /// Path plus query string, as sent.
    pub target: String,
    /// Lower-cased names.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl Captured {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub struct Fixture {
    pub base_url: String,
    rx: Receiver<Captured>,
}

impl Fixture {
    /// Serve exactly one request with `status` and `body`, then hang up.
    pub fn serve(status: u16, body: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();
        let body = body.to_string();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut parts = request_line.split_whitespace();
            let method = parts.next().unwrap_or("").to_string();
            let target = parts.next().unwrap_or("").to_string();

            let mut headers = HashMap::new();
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                let line = line.trim_end();
                if line.is_empty() {
                    break;
                }
                if let Some((k, v)) = line.split_once(':') {
                    headers.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
                }
            }

            let len: usize = headers.get("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
            let mut buf = vec![0u8; len];
            reader.read_exact(&mut buf).unwrap();

            let reason = if status < 400 { "OK" } else { "Error" };
            let resp = format!(
                "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let mut stream = stream;
            stream.write_all(resp.as_bytes()).unwrap();
            stream.flush().unwrap();

            let _ = tx.send(Captured { method, target, headers, body: String::from_utf8_lossy(&buf).into_owned() });
        });

        Self { base_url, rx }
    }

    pub fn request(&self) -> Captured {
        self.rx.recv_timeout(Duration::from_secs(5)).expect("fixture saw no request")
    }
}

/// A base URL nothing is listening on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
