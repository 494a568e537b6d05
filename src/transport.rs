use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::Value as JsonValue;

use crate::error::BoxError;
use crate::Response;

/// One fully prepared request/response cycle. The client builds this once
/// per call (fixed headers already merged) and clones it per attempt.
#[derive(Clone, Debug)]
pub struct PreparedRequest {
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<JsonValue>,
}

/// Capability to execute one request/response cycle.
///
/// The retry loop is generic over this trait so it can be driven
/// deterministically in tests without real network I/O.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends the request and collects the full response body.
    ///
    /// `Err` means the cycle could not complete at all; a completed response
    /// with a non-success status is still `Ok`.
    async fn send(&self, request: PreparedRequest) -> std::result::Result<Response, BoxError>;
}

/// Default transport over `reqwest`.
///
/// The cookie store is enabled so every request carries ambient credentials,
/// and responses set by the server are replayed on subsequent requests.
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh cookie jar.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialized, same as
    /// [`reqwest::Client::new`].
    pub fn new() -> Self {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");
        Self { http }
    }

    /// Wraps an existing `reqwest::Client`.
    ///
    /// Credential inclusion depends on the supplied client having a cookie
    /// store configured.
    pub fn from_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: PreparedRequest) -> std::result::Result<Response, BoxError> {
        let mut builder = self
            .http
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;
        Ok(Response::new(status, headers, body))
    }
}
