use serde_json::Value;
use tracing::debug;

use crate::{error::Error, types::ExecutionRequest};

/// One inbound invocation before normalization. The hosting front ends
/// deliver the same logical payload through different channels; at most one
/// channel is consulted per call, in the declared priority order.
#[derive(Debug, Clone, Default)]
pub struct RawRequest {
    /// Out-of-band payload channel used by serverless hosts
    pub payload: Option<String>,
    /// Request body: either the already-parsed value or a JSON-encoded string
    pub body: Option<Value>,
    /// Environment-provided data channel used by the hosting variant
    pub data: Option<String>,
}

impl RawRequest {
    /// Wrap a raw HTTP body string. Decoding happens during normalization,
    /// so invalid JSON surfaces as an input error rather than a
    /// transport-level rejection.
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: Some(Value::String(body.into())),
            ..Self::default()
        }
    }

    /// Extract the canonical `{code, language, stdin}` triple from whichever
    /// transport encoding is present.
    pub fn normalize(&self) -> Result<ExecutionRequest, Error> {
        let body = self.decode_source()?;

        let code = non_empty_field(&body, "code");
        let language = non_empty_field(&body, "language");

        match (code, language) {
            (Some(code), Some(language)) => Ok(ExecutionRequest {
                code,
                language,
                stdin: body
                    .get("stdin")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }),
            _ => Err(Error::Input(
                "Missing required fields: code and language are required".to_string(),
            )),
        }
    }

    /// Pick the first populated source channel and decode it. A decode
    /// failure in the chosen channel is terminal; the chain never falls
    /// through to a later channel once a source has been selected.
    fn decode_source(&self) -> Result<Value, Error> {
        if let Some(payload) = non_empty_channel(&self.payload) {
            debug!("normalizing request from payload channel");
            return decode(payload);
        }

        if let Some(body) = &self.body {
            match body {
                Value::String(text) if !text.is_empty() => {
                    debug!("normalizing request from string body");
                    return unwrap_nested(decode(text)?);
                }
                // An empty string or explicit null counts as no body at all
                Value::String(_) | Value::Null => {}
                parsed => {
                    debug!("normalizing request from parsed body");
                    return unwrap_nested(parsed.clone());
                }
            }
        }

        if let Some(data) = non_empty_channel(&self.data) {
            debug!("normalizing request from data channel");
            return decode(data);
        }

        Err(Error::Input("No request body provided".to_string()))
    }
}

/// Upstream forwarding layers sometimes wrap the logical payload in a second
/// JSON-encoded `body` field; unwrap exactly one level. Only a string-typed
/// field is unwrapped.
fn unwrap_nested(body: Value) -> Result<Value, Error> {
    match body.get("body").and_then(Value::as_str) {
        Some(inner) => {
            debug!("unwrapping nested body field");
            decode(inner)
        }
        None => Ok(body),
    }
}

fn decode(text: &str) -> Result<Value, Error> {
    serde_json::from_str(text).map_err(|e| Error::Input(format!("Bad JSON body: {}", e)))
}

fn non_empty_channel(channel: &Option<String>) -> Option<&str> {
    channel.as_deref().filter(|text| !text.is_empty())
}

fn non_empty_field(body: &Value, field: &str) -> Option<String> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
