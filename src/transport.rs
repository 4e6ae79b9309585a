//! Pluggable HTTP transport behind the client.
//!
//! Requests and responses cross this seam as plain data, so tests can mock
//! the trait and assert on exactly what would go over the wire. The bundled
//! [`HttpTransport`] executes descriptors with reqwest and owns every
//! transport-level concern: TLS, timeouts, connection pooling, and the
//! default headers (token auth, user agent, API media type).

use async_trait::async_trait;
use log::debug;
use reqwest::{
    Client, Method, StatusCode, Url,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use secrecy::ExposeSecret;

use crate::config::ApiConfig;
use crate::error::Result;

/// Media type requested from the API.
const MEDIA_TYPE: &str = "application/vnd.github+json";

/// A fully-specified HTTP request, ready to execute.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute URL including any query string.
    pub url: Url,
    /// JSON payload; when present the transport sends it with an
    /// `application/json` content type.
    pub body: Option<String>,
}

/// Raw outcome of one HTTP round-trip.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Executes HTTP request descriptors.
///
/// One call maps to one round-trip; implementations hold no per-call state
/// and may be used concurrently. Cancellation is whatever dropping the
/// returned future does in the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// Default transport backed by a shared [`reqwest::Client`].
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Build a reqwest client with the configured token and user agent
    /// applied as default headers.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));

        if let Some(token) = &config.token {
            let token_value = HeaderValue::from_str(
                format!("Bearer {}", token.expose_secret()).as_str(),
            )?;
            headers.insert(AUTHORIZATION, token_value);
        }

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        debug!("{} {}", request.method, request.url);

        let mut builder = self.client.request(request.method, request.url);
        if let Some(body) = request.body {
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(body);
        }

        let response = self.client.execute(builder.build()?).await?;
        let status = response.status();
        let body = response.text().await?;

        Ok(HttpResponse { status, body })
    }
}
