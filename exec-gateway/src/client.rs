use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::{
    config::{GatewayConfig, Provider},
    error::Error,
    types::ProviderRequest,
};

const PROVIDER_NAME: &str = "OneCompiler";

const RAPIDAPI_HOST: &str = "onecompiler-apis.p.rapidapi.com";

/// Client for the provider's code execution endpoint
#[derive(Clone)]
pub struct ExecutionClient {
    client: Client,
    config: GatewayConfig,
}

impl ExecutionClient {
    /// Create a new ExecutionClient with the given configuration
    pub fn new(config: GatewayConfig) -> Result<Self, Error> {
        // Connections are not retained between invocations
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| Error::Transport {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;

        Ok(Self { client, config })
    }

    /// Send one execution request to the configured binding and return the
    /// decoded response body. The credential is checked before any network
    /// traffic, and the first failure is terminal; there are no retries.
    pub async fn execute(&self, request: &ProviderRequest) -> Result<Value, Error> {
        let api_key = self
            .config
            .credential()
            .ok_or_else(|| Error::Config("OneCompiler API key not configured".to_string()))?;

        let outbound = self
            .client
            .post(&self.config.api_url)
            .header("Content-Type", "application/json");

        let outbound = match self.config.provider {
            Provider::Direct => outbound.header("Authorization", format!("Bearer {}", api_key)),
            Provider::RapidApi => outbound
                .header("X-RapidAPI-Key", api_key)
                .header("X-RapidAPI-Host", RAPIDAPI_HOST),
        };

        debug!(url = %self.config.api_url, "sending execution request");

        let response = outbound
            .json(request)
            .send()
            .await
            .map_err(|e| Error::Transport {
                provider: PROVIDER_NAME,
                message: e.to_string(),
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "provider responded");

        // Read the body once up front; error bodies are not always JSON and
        // the stream cannot be consumed twice.
        let text = response.text().await.map_err(|e| Error::Transport {
            provider: PROVIDER_NAME,
            message: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(Error::Upstream {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                body: text,
            });
        }

        match serde_json::from_str(&text) {
            Ok(body) => Ok(body),
            Err(_) => Err(Error::Decode {
                provider: PROVIDER_NAME,
                body: text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExecutionRequest;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(provider: Provider, api_url: String) -> GatewayConfig {
        GatewayConfig::new(provider, Some("test_api_key".to_string())).with_api_url(api_url)
    }

    fn test_request() -> ProviderRequest {
        ProviderRequest::new(&ExecutionRequest {
            code: "print(1)".to_string(),
            language: "python".to_string(),
            stdin: String::new(),
        })
    }

    #[tokio::test]
    async fn test_direct_binding_sends_bearer_auth() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("Content-Type", "application/json"))
            .and(header("Authorization", "Bearer test_api_key"))
            .and(body_json(json!({
                "language": "python",
                "stdin": "",
                "files": [{ "name": "main.py", "content": "print(1)" }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "post": { "properties": { "result": { "stdout": "1\n" } } }
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            ExecutionClient::new(test_config(Provider::Direct, mock_server.uri())).unwrap();
        let body = client.execute(&test_request()).await.unwrap();

        assert_eq!(body["post"]["properties"]["result"]["stdout"], "1\n");
    }

    #[tokio::test]
    async fn test_rapidapi_binding_sends_key_and_host_headers() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/"))
            .and(header("X-RapidAPI-Key", "test_api_key"))
            .and(header("X-RapidAPI-Host", "onecompiler-apis.p.rapidapi.com"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "stdout": "1\n", "executionTime": 4 })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client =
            ExecutionClient::new(test_config(Provider::RapidApi, mock_server.uri())).unwrap();
        let body = client.execute(&test_request()).await.unwrap();

        assert_eq!(body["stdout"], "1\n");
    }

    #[tokio::test]
    async fn test_missing_api_key_short_circuits_before_any_call() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let config = GatewayConfig::new(Provider::Direct, None).with_api_url(mock_server.uri());
        let client = ExecutionClient::new(config).unwrap();
        let result = client.execute(&test_request()).await;

        match result {
            Err(Error::Config(message)) => {
                assert_eq!(message, "OneCompiler API key not configured")
            }
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limited"))
            .mount(&mock_server)
            .await;

        let client =
            ExecutionClient::new(test_config(Provider::Direct, mock_server.uri())).unwrap();
        let err = client.execute(&test_request()).await.unwrap_err();

        assert!(matches!(err, Error::Upstream { status: 429, .. }));
        assert_eq!(err.to_string(), "OneCompiler API error (429): rate limited");
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_a_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let client =
            ExecutionClient::new(test_config(Provider::Direct, mock_server.uri())).unwrap();
        let err = client.execute(&test_request()).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid OneCompiler response: <html>oops</html>"
        );
    }

    #[tokio::test]
    async fn test_connection_failure_is_a_transport_error() {
        // A pooled `MockServer::start()` keeps its listener alive after drop;
        // only an exclusive (builder) server actually frees the port.
        let mock_server = MockServer::builder().start().await;
        let dead_uri = mock_server.uri();
        drop(mock_server);

        let client = ExecutionClient::new(test_config(Provider::Direct, dead_uri)).unwrap();
        let err = client.execute(&test_request()).await.unwrap_err();

        assert!(
            err.to_string().starts_with("Failed to connect to OneCompiler: "),
            "got: {}",
            err
        );
    }
}
