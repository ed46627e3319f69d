use tracing::{debug, error, info, warn};

use crate::{
    client::ExecutionClient,
    config::GatewayConfig,
    error::Error,
    request::RawRequest,
    types::{Envelope, ExecutionRequest, ExecutionResult, ProviderRequest},
};

/// Front door of the crate. Sequences request normalization, language
/// resolution, the provider call, and response reconciliation, and converts
/// every stage failure into the `ok: false` envelope.
#[derive(Clone)]
pub struct Gateway {
    client: ExecutionClient,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        Ok(Self {
            client: ExecutionClient::new(config)?,
        })
    }

    /// Handle one raw invocation end to end. Always yields an envelope;
    /// failures are reported inside it, never thrown past this boundary.
    pub async fn handle(&self, raw: &RawRequest) -> Envelope {
        let request = match raw.normalize() {
            Ok(request) => request,
            Err(e) => {
                warn!("Rejected execution request: {}", e);
                return Envelope::failure(e.to_string());
            }
        };

        match self.execute(&request).await {
            Ok(result) => Envelope::success(result),
            Err(e) => Envelope::failure(e.to_string()),
        }
    }

    /// Execute an already-validated request against the configured provider.
    pub async fn execute(&self, request: &ExecutionRequest) -> Result<ExecutionResult, Error> {
        debug!("Starting code execution for language: {}", request.language);

        let provider_request = ProviderRequest::new(request);
        let result = self
            .client
            .execute(&provider_request)
            .await
            .map(|body| ExecutionResult::from_provider(&body));

        match &result {
            Ok(_) => info!("Code execution completed successfully"),
            Err(e) => error!("Code execution failed: {}", e),
        }

        result
    }
}
