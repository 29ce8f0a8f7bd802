//! HTTP access to the planner API.
//!
//! [`PlannerClient`] builds endpoint URLs from path segments and encodes
//! bodies; the [`Transport`] it is generic over does the actual POST.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::error::{Result, SeedError};

/// Status and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_any_of(&self, expected: &[StatusCode]) -> bool {
        expected.contains(&self.status)
    }
}

/// Sends one JSON POST and waits for the response.
///
/// An `Err` means no response was received at all; any status code,
/// including 4xx and 5xx, is an `Ok`.
pub trait Transport {
    fn post_json(&self, url: &Url, body: &Value) -> Result<ApiResponse>;
}

/// Blocking reqwest transport.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("planner-seed/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(SeedError::Client)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, url: &Url, body: &Value) -> Result<ApiResponse> {
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .map_err(|source| SeedError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let body = response.text().map_err(|source| SeedError::Http {
            url: url.to_string(),
            source,
        })?;
        Ok(ApiResponse { status, body })
    }
}

/// Logs each request instead of sending it and answers 201 Created.
#[derive(Debug, Default)]
pub struct DryRunTransport;

impl Transport for DryRunTransport {
    fn post_json(&self, url: &Url, body: &Value) -> Result<ApiResponse> {
        info!("dry run: POST {} {}", url, body);
        Ok(ApiResponse {
            status: StatusCode::CREATED,
            body: String::new(),
        })
    }
}

/// Client for the planner API rooted at a base URL such as
/// `http://localhost:8080/api/v1/planner`.
pub struct PlannerClient<T> {
    base: Url,
    transport: T,
}

impl<T: Transport> PlannerClient<T> {
    pub fn new(base_url: &str, transport: T) -> Result<Self> {
        let invalid = |reason: String| SeedError::InvalidUrl {
            url: base_url.to_string(),
            reason,
        };

        let base = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(invalid("must start with http:// or https://".to_string()));
        }
        if base.cannot_be_a_base() {
            return Err(invalid("cannot hold a path".to_string()));
        }

        Ok(Self { base, transport })
    }

    /// Append `segments` to the base path. Each segment is percent-encoded,
    /// so identifiers containing `/` or spaces stay one segment.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn post<B: Serialize>(&self, segments: &[&str], body: &B) -> Result<ApiResponse> {
        let url = self.endpoint(segments);
        let body = serde_json::to_value(body)?;
        debug!("POST {} {}", url, body);
        self.transport.post_json(&url, &body)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
