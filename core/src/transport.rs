//! Executes `HttpRequest` values over the network.
//!
//! The optional bound covers the wait for the response head only. When it
//! fires the send future is dropped, which aborts the in-flight reqwest call,
//! and the caller sees `ApiError::Timeout` rather than a network error. Once
//! the status line and headers have arrived the body is read without a bound.

use std::time::Duration;

use reqwest::Method;
use tracing::trace;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder().build().map_err(ApiError::Network)?;
        Ok(Self { client })
    }

    /// Runs one round-trip. Non-2xx statuses are returned as data; only
    /// transport failures and an elapsed bound are errors here.
    pub async fn execute(
        &self,
        request: HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<HttpResponse> {
        trace!(method = request.method.as_str(), url = %request.url, "sending request");

        let send = self.build(request).send();
        let response = match timeout {
            Some(limit) => tokio::time::timeout(limit, send)
                .await
                .map_err(|_| ApiError::Timeout)?,
            None => send.await,
        }
        .map_err(ApiError::Network)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = response.text().await.map_err(ApiError::Network)?;

        trace!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }

    fn build(&self, request: HttpRequest) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method(request.method), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }
        builder
    }
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}
