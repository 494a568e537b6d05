use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{self, HeaderValue};
use tokio::time::sleep;

use crate::transport::PreparedRequest;
use crate::{
    ClientOptions, FetchError, ReqwestTransport, RequestOptions, Response, Result, Transport,
};

/// HTTP request executor with a fixed-count retry policy.
///
/// A completed response with a non-success status is retried after a fixed
/// delay until the budget runs out. A transport-level failure is logged once
/// and returned immediately, never retried.
#[derive(Clone)]
pub struct FetchClient {
    transport: Arc<dyn Transport>,
    options: ClientOptions,
}

impl fmt::Debug for FetchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchClient")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Creates a client over the default `reqwest` transport with the
    /// cookie store enabled.
    pub fn new() -> Self {
        Self::with_transport(Arc::new(ReqwestTransport::new()))
    }

    /// Creates a client over a caller-supplied transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            options: ClientOptions::default(),
        }
    }

    /// Applies client options such as the retry budget and delay.
    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes a request with the client's configured retry budget.
    pub async fn fetch(&self, url: &str, options: RequestOptions) -> Result<Response> {
        self.fetch_with_retries(url, options, self.options.max_retries)
            .await
    }

    /// Executes a request, retrying up to `retries` additional times on a
    /// non-success status. Makes at most `retries + 1` attempts, strictly
    /// sequential, separated by the configured delay.
    pub async fn fetch_with_retries(
        &self,
        url: &str,
        options: RequestOptions,
        retries: u32,
    ) -> Result<Response> {
        let request = prepare_request(url, options);
        let mut remaining = retries;
        loop {
            let response = match self.transport.send(request.clone()).await {
                Ok(response) => response,
                Err(err) => {
                    tracing::error!("fetch error: {err}");
                    return Err(FetchError::Transport(err));
                }
            };

            if response.status().is_success() {
                return Ok(response);
            }

            if remaining == 0 {
                return Err(FetchError::RetriesExhausted {
                    status: response.status().as_u16(),
                });
            }

            self.wait_before_retry().await;
            remaining -= 1;
        }
    }

    async fn wait_before_retry(&self) {
        tracing::debug!("retrying request after {} ms", self.options.retry_delay_ms);
        sleep(Duration::from_millis(self.options.retry_delay_ms)).await;
    }
}

/// Builds the per-call request descriptor from the caller's options.
///
/// The fixed JSON headers are inserted after the caller's, so they win over
/// caller-supplied `Content-Type` / `Accept` values.
fn prepare_request(url: &str, options: RequestOptions) -> PreparedRequest {
    let RequestOptions {
        method,
        mut headers,
        body,
    } = options;
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
    PreparedRequest {
        method,
        url: url.to_owned(),
        headers,
        body,
    }
}
