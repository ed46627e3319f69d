use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which provider binding to call. Both bindings run the same execution
/// engine and accept the same request body; they differ only in endpoint
/// and auth headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Direct OneCompiler API, authenticated with a bearer token
    Direct,
    /// OneCompiler through the RapidAPI marketplace, authenticated with the
    /// RapidAPI key/host header pair
    RapidApi,
}

impl Provider {
    pub(crate) fn endpoint(&self) -> &'static str {
        match self {
            Provider::Direct => "https://onecompiler.com/api/code/exec",
            Provider::RapidApi => "https://onecompiler-apis.p.rapidapi.com/api/v1/run",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Direct => write!(f, "direct"),
            Provider::RapidApi => write!(f, "rapidapi"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Provider::Direct),
            "rapidapi" => Ok(Provider::RapidApi),
            other => Err(format!(
                "unknown provider '{}', expected 'direct' or 'rapidapi'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Provider binding to forward executions to
    pub provider: Provider,

    /// Endpoint URL for the selected binding
    pub api_url: String,

    /// API key for the selected binding; an empty value counts as missing
    pub api_key: Option<String>,
}

impl GatewayConfig {
    pub fn new(provider: Provider, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_url: provider.endpoint().to_string(),
            api_key,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = api_url;
        self
    }

    pub(crate) fn credential(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}
