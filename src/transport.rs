//! HTTP transport against the broker base URL

use reqwest::header::CONTENT_TYPE;
use reqwest::{RequestBuilder, StatusCode};
use tracing::debug;

use crate::config::FactbusConfig;
use crate::error::{FactbusError, Result};

/// One HTTP round trip per call, no retries. The base URL and request
/// timeout are fixed at construction.
#[derive(Debug)]
pub(crate) struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

/// Broker response envelope. `body` is `None` exactly when the broker
/// answered 204 No Content; every other non-2xx status is surfaced as
/// [`FactbusError::Http`] before an envelope is ever built.
#[derive(Debug)]
pub(crate) struct HttpResponse {
    pub status: StatusCode,
    pub body: Option<String>,
}

impl HttpTransport {
    pub fn new(config: &FactbusConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET a broker path. `path` must be relative (leading slash).
    pub async fn get(&self, path: &str) -> Result<HttpResponse> {
        let request = self.http.get(self.url(path));
        self.execute("GET", path, request).await
    }

    /// POST a JSON body to a broker path
    pub async fn post(&self, path: &str, body: String) -> Result<HttpResponse> {
        let request = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.execute("POST", path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn execute(&self, method: &str, path: &str, request: RequestBuilder) -> Result<HttpResponse> {
        let response = request.send().await?;
        let status = response.status();
        debug!(method, path, status = status.as_u16(), "broker request");

        if status == StatusCode::NO_CONTENT {
            return Ok(HttpResponse { status, body: None });
        }

        let body = response.text().await?;
        if !status.is_success() {
            return Err(FactbusError::Http { status, body });
        }

        Ok(HttpResponse {
            status,
            body: Some(body),
        })
    }
}
