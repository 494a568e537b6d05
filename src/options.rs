use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde_json::Value as JsonValue;

/// Configures retry behavior for a [`FetchClient`](crate::FetchClient).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClientOptions {
    /// Maximum number of retries after the initial attempt.
    pub max_retries: u32,
    /// Delay between consecutive attempts in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            max_retries: 3,
            retry_delay_ms: 1_000,
        }
    }
}

/// Caller-supplied configuration for one request: method, headers, and an
/// optional JSON body.
///
/// The two fixed JSON headers and credential inclusion are applied by the
/// client on top of these options and cannot be disabled here.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<JsonValue>,
}

impl RequestOptions {
    /// Options for a GET request.
    pub fn get() -> Self {
        Self::with_method(Method::GET)
    }

    /// Options for a POST request carrying a JSON body.
    pub fn post(body: JsonValue) -> Self {
        Self::with_method(Method::POST).json(body)
    }

    /// Options for a PUT request carrying a JSON body.
    pub fn put(body: JsonValue) -> Self {
        Self::with_method(Method::PUT).json(body)
    }

    /// Options for a DELETE request.
    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    /// Options for an arbitrary method with no headers or body.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Adds a header. Later calls with the same name overwrite earlier ones.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the JSON body.
    pub fn json(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ClientOptions;

    #[test]
    fn default_policy_is_three_retries_with_one_second_delay() {
        assert_eq!(
            ClientOptions::default(),
            ClientOptions {
                max_retries: 3,
                retry_delay_ms: 1_000,
            }
        );
    }
}
