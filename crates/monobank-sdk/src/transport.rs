//! HTTP transport seam.
//!
//! The client never talks to reqwest directly; it hands a [`Request`] to a
//! [`Transport`] and gets back the status and raw body. Production code
//! uses [`ReqwestTransport`]; tests inject mocks through the same trait.

use async_trait::async_trait;

use crate::error::BoxError;

/// HTTP method used by the API. Only two are needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

/// One outgoing API request: absolute URL, headers, optional JSON body.
#[derive(Debug, Clone)]
pub struct Request {
    /// HTTP method.
    pub method: Method,
    /// Absolute URL.
    pub url: String,
    /// Headers to attach, name/value pairs.
    pub headers: Vec<(&'static str, String)>,
    /// Serialized JSON body, present on POST.
    pub body: Option<String>,
}

/// Status and raw body of a completed exchange. Interpretation of the
/// status code is the client's job, not the transport's.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

/// Transport over which the client exchanges requests and responses.
///
/// Implementations return `Err` only for failures that prevented obtaining
/// a response (DNS, connection, TLS, timeout); any received status code,
/// success or not, is a `Response`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one exchange.
    async fn send(&self, request: Request) -> std::result::Result<Response, BoxError>;
}

/// Production transport backed by a pooled [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around an already configured client, e.g. one
    /// carrying a custom timeout or proxy.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> std::result::Result<Response, BoxError> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(*name, value);
        }

        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(Response { status, body })
    }
}
