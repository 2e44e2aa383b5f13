use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{error::SubmitError, protocol::LeadCaptureRequest};
use tracing::{debug, warn};
use url::Url;

use crate::email;

/// Destination for captured leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit(&self, request: &LeadCaptureRequest) -> Result<(), SubmitError>;
}

/// Posts leads as JSON to the third-party collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpLeadSink {
    http: Client,
    endpoint: Url,
    timeout: Option<Duration>,
}

impl HttpLeadSink {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self {
            http,
            endpoint,
            timeout: None,
        }
    }

    /// Bounds each request. Without it the request waits as long as the
    /// transport does.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LeadSink for HttpLeadSink {
    async fn submit(&self, request: &LeadCaptureRequest) -> Result<(), SubmitError> {
        let mut builder = self.http.post(self.endpoint.clone()).json(request);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await.map_err(|err| {
            warn!(endpoint = %self.endpoint, "lead endpoint unreachable: {err}");
            SubmitError::Network(err.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            debug!(
                %status,
                domain = email::domain_of(&request.email),
                "lead endpoint accepted submission"
            );
            Ok(())
        } else {
            warn!(%status, endpoint = %self.endpoint, "lead endpoint rejected submission");
            Err(SubmitError::Rejected {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
#[path = "tests/lead_client_tests.rs"]
mod tests;
