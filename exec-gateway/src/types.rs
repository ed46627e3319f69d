use serde::{Deserialize, Serialize};

use crate::language::ResolvedLanguage;

/// Canonical code execution request, after transport normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionRequest {
    /// Source code to execute
    pub code: String,
    /// Client-supplied language token
    pub language: String,
    /// Input data for the program
    #[serde(default)]
    pub stdin: String,
}

/// Wire request accepted by both provider bindings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderRequest {
    /// Provider language code, after alias resolution
    pub language: String,
    pub stdin: String,
    /// Always exactly one entry
    pub files: Vec<SourceFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    pub content: String,
}

impl ProviderRequest {
    /// Derive the provider payload from a canonical request
    pub fn new(request: &ExecutionRequest) -> Self {
        let resolved = ResolvedLanguage::resolve(&request.language);

        Self {
            language: resolved.provider_language,
            stdin: request.stdin.clone(),
            files: vec![SourceFile {
                name: resolved.file_name.to_string(),
                content: request.code.clone(),
            }],
        }
    }
}

/// Canonical execution result. Every field is always present on the wire;
/// the defaults stand in for whatever the provider left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Program output (stdout)
    pub stdout: String,
    /// Program errors (stderr)
    pub stderr: String,
    /// Runtime exception reported by the provider, if any
    pub exception: Option<String>,
    /// Execution time in milliseconds
    #[serde(rename = "executionTime")]
    pub execution_time: u64,
}

/// Uniform wrapper returned to the caller regardless of which internal
/// stage failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope {
    Success { ok: bool, result: ExecutionResult },
    Failure { ok: bool, error: String },
}

impl Envelope {
    pub fn success(result: ExecutionResult) -> Self {
        Self::Success { ok: true, result }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            ok: false,
            error: error.into(),
        }
    }
}
