//! Blocking HTTP transport for native builds.

use crate::api::{ApiRequest, ApiResponse, JSON_CONTENT_TYPE, Method};
use crate::client::Transport;
use crate::error::CatalogError;

/// Sends requests with `ureq` using its default timeouts: 30s to connect,
/// no limit on reads or writes.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn send(&self, request: &ApiRequest) -> Result<ApiResponse, CatalogError> {
        let call = self.agent.request(request.method.as_str(), &request.url);
        let result = match (&request.method, &request.body) {
            (Method::Post, Some(body)) => call
                .set("Content-Type", JSON_CONTENT_TYPE)
                .send_string(body),
            _ => call.call(),
        };

        let response = match result {
            Ok(response) => response,
            // Non-2xx still carries a body worth reporting.
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(CatalogError::Network {
                    message: transport.to_string(),
                });
            }
        };

        let status = response.status();
        let body = response.into_string().map_err(|e| CatalogError::Network {
            message: e.to_string(),
        })?;
        Ok(ApiResponse { status, body })
    }
}
