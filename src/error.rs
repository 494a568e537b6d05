/// Boxed error type produced by [`Transport`](crate::Transport) implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request/response cycle itself could not complete (connect
    /// failure, DNS, aborted body read). Never retried.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
    /// The retry budget reached zero with the response still signaling
    /// non-success. Carries the final observed status code.
    #[error("http error! status: {status}")]
    RetriesExhausted { status: u16 },
    /// Response body decoding error from [`Response::json`](crate::Response::json).
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}
