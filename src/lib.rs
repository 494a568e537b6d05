//! `retry-fetch` is an async HTTP request executor with a fixed-count retry
//! policy on non-success responses.
//!
//! Every outgoing request carries `Content-Type: application/json` and
//! `Accept: application/json` (overriding caller-supplied values for those
//! two keys) and includes ambient credentials via the transport's cookie
//! store. A completed response with a non-success status is retried after a
//! fixed delay, up to a bounded budget; a transport-level failure is never
//! retried.
//!
//! Entry points:
//! - [`FetchClient::fetch`]
//! - [`FetchClient::fetch_with_retries`]

mod client;
mod error;
mod options;
mod response;
mod transport;

pub use client::FetchClient;
pub use error::{BoxError, FetchError};
pub use options::{ClientOptions, RequestOptions};
pub use response::Response;
pub use transport::{PreparedRequest, ReqwestTransport, Transport};

pub type Result<T> = std::result::Result<T, FetchError>;
