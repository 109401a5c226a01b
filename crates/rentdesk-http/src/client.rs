//! reqwest-backed transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;
use tracing::{debug, instrument, trace};

use rentdesk_core::error::TransportError;
use rentdesk_core::{ApiUrl, Transport};

/// HTTP client for the back-office REST API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpTransport {
    /// Create a transport with default settings.
    pub fn new(api: ApiUrl) -> Result<Self, TransportError> {
        Self::builder(api).build()
    }

    /// Start configuring a transport.
    pub fn builder(api: ApiUrl) -> HttpTransportBuilder {
        HttpTransportBuilder { api, timeout: None }
    }

    /// Use an already configured reqwest client.
    pub fn with_client(api: ApiUrl, client: reqwest::Client) -> Self {
        Self { client, api }
    }

    /// Returns the API base this transport talks to.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Parse a success body, or turn a failure status into an error.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value, TransportError> {
        let response = check_status(response).await?;
        let text = response.text().await.map_err(transport_error)?;
        trace!(len = text.len(), "response body");

        serde_json::from_str(&text).map_err(TransportError::from)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.api.endpoint(path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        self.handle_response(response).await
    }

    #[instrument(skip(self, body))]
    async fn post(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.api.endpoint(path);
        debug!(%url, "POST");
        trace!(%body, "request body");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        self.handle_response(response).await
    }

    #[instrument(skip(self, body))]
    async fn put(&self, path: &str, body: &Value) -> Result<Value, TransportError> {
        let url = self.api.endpoint(path);
        debug!(%url, "PUT");
        trace!(%body, "request body");

        let response = self
            .client
            .put(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;
        self.handle_response(response).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, path: &str) -> Result<(), TransportError> {
        let url = self.api.endpoint(path);
        debug!(%url, "DELETE");

        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(response).await.map(|_| ())
    }
}

/// Settings for an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct HttpTransportBuilder {
    api: ApiUrl,
    timeout: Option<Duration>,
}

impl HttpTransportBuilder {
    /// Give up on a request after this long. Unset means reqwest's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<HttpTransport, TransportError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("rentdesk/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers());

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(transport_error)?;
        Ok(HttpTransport::with_client(self.api, client))
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Pass success responses through; read the body of anything else into the error.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    trace!(%status, "response");

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok().filter(|b| !b.is_empty());
    Err(TransportError::Status {
        status: status.as_u16(),
        body,
    })
}

fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::decode(err)
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    }
}
