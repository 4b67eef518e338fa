//! Concurrent first-success-wins query of public IP echo services.

use std::net::IpAddr;

use http::header::ACCEPT;
use http::HeaderValue;
use tokio::task::JoinSet;
use url::Url;

use super::{EndpointError, HttpClient, HttpRequest, ProbeError};

/// Echo services queried when none are configured.
pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://ifconfig.me",
    "https://api.ipify.org",
    "https://icanhazip.com",
];

/// Queries a set of public IP echo services and returns the first
/// successfully observed address.
///
/// All endpoints are queried concurrently; the first success wins and
/// the remaining requests are aborted. An endpoint succeeds only when it
/// returns a 2xx status whose trimmed body parses as an IP address, so a
/// garbage 200 from one service cannot mask a valid answer from another.
///
/// No retries are performed; a failed probe is reported once and the
/// caller decides whether to care.
#[derive(Debug, Clone)]
pub struct ExternalIpProbe<C> {
    client: C,
    endpoints: Vec<Url>,
}

impl<C> ExternalIpProbe<C> {
    /// Creates a probe over the given endpoints, queried in no
    /// particular order.
    #[must_use]
    pub const fn new(client: C, endpoints: Vec<Url>) -> Self {
        Self { client, endpoints }
    }

    /// Returns the configured endpoints.
    #[must_use]
    pub fn endpoints(&self) -> &[Url] {
        &self.endpoints
    }
}

impl<C: HttpClient + Clone + Send + Sync + 'static> ExternalIpProbe<C> {
    /// Observes the host's public IP address.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::NoEndpoints`] when no endpoints are
    /// configured, or [`ProbeError::AllEndpointsFailed`] when every
    /// endpoint fails (network error, non-2xx status, unparseable body).
    pub async fn observe(&self) -> Result<IpAddr, ProbeError> {
        if self.endpoints.is_empty() {
            return Err(ProbeError::NoEndpoints);
        }

        let mut tasks = JoinSet::new();
        for url in self.endpoints.clone() {
            let client = self.client.clone();
            tasks.spawn(async move {
                let outcome = query_endpoint(&client, url.clone()).await;
                (url, outcome)
            });
        }

        let attempts = self.endpoints.len();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((url, Ok(ip))) => {
                    tracing::debug!("External IP observed via {url}: {ip}");
                    tasks.abort_all();
                    return Ok(ip);
                }
                Ok((url, Err(reason))) => {
                    tracing::debug!("External IP endpoint {url} failed: {reason}");
                }
                // A task can only be cancelled here after abort_all, which
                // we never reach without returning first.
                Err(_) => {}
            }
        }

        Err(ProbeError::AllEndpointsFailed { attempts })
    }
}

/// Queries one echo service for the caller's address.
async fn query_endpoint<C: HttpClient>(client: &C, url: Url) -> Result<IpAddr, EndpointError> {
    let request = HttpRequest::get(url).with_header(ACCEPT, HeaderValue::from_static("text/plain"));

    let response = client.request(request).await?;
    if !response.is_success() {
        return Err(EndpointError::Status(response.status));
    }

    response
        .body_text()
        .and_then(|body| body.trim().parse::<IpAddr>().ok())
        .ok_or(EndpointError::NotAnIp)
}
