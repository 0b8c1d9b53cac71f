//! Minimal HTTP seam between the dispatcher and the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde_json::{Map, Value};
use tokio::sync::Mutex;

use crate::error::{RobotError, RobotResult};

/// Loosely typed response container. The remote response shape is not
/// contractually fixed, so it decodes into a plain JSON object.
pub type ResponseMap = Map<String, Value>;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// One fully assembled webhook call: everything the underlying HTTP stack
/// needs, nothing it has to infer.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: String,
    /// Query pairs appended to the URL. Keys are unique, so ordering is
    /// irrelevant.
    pub query: Vec<(String, String)>,
    pub body: Value,
    pub timeout: Duration,
}

/// Sends an assembled request and decodes the JSON response.
///
/// Implementations serialize the body, attach the query string and JSON
/// content type, honor the per-request timeout, and decode the response
/// body regardless of HTTP status: the remote end reports application
/// errors inside the JSON itself, so a non-2xx status is not a failure at
/// this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: TransportRequest) -> RobotResult<ResponseMap>;
}

/// Production transport backed by a shared `reqwest` client.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Wraps an existing client so connection pools can be shared.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(&self, request: TransportRequest) -> RobotResult<ResponseMap> {
        let body = serde_json::to_vec(&request.body).map_err(RobotError::Encode)?;

        let response = self
            .client
            .request(request.method, request.url.as_str())
            .query(&request.query)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .timeout(request.timeout)
            .body(body)
            .send()
            .await
            .map_err(RobotError::Transport)?;

        // Consuming the body here (or dropping the response on the error
        // path above) releases the connection on every exit.
        let text = response.text().await.map_err(RobotError::Transport)?;
        serde_json::from_str(&text).map_err(RobotError::Decode)
    }
}

/// Records every request and answers with a canned response map.
pub struct MockTransport {
    pub requests: Mutex<Vec<TransportRequest>>,
    pub response: ResponseMap,
}

impl MockTransport {
    pub fn new(response: ResponseMap) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            response,
        }
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new(ResponseMap::new())
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request(&self, request: TransportRequest) -> RobotResult<ResponseMap> {
        self.requests.lock().await.push(request);
        Ok(self.response.clone())
    }
}
