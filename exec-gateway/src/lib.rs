//! # Execution Gateway
//!
//! A gateway adapter that accepts loosely-shaped "run this code" requests,
//! forwards them to the OneCompiler execution provider, and returns one
//! canonical result envelope. The inbound side tolerates the transport
//! encodings used by the different hosting front ends; the outbound side
//! reconciles the provider's divergent response shapes, so callers see a
//! single stable contract in both directions.

mod client;
mod config;
mod error;
mod gateway;
mod language;
mod request;
mod response;
mod types;

pub use client::ExecutionClient;
pub use config::{GatewayConfig, Provider};
pub use error::Error;
pub use gateway::Gateway;
pub use language::ResolvedLanguage;
pub use request::RawRequest;
pub use types::{Envelope, ExecutionRequest, ExecutionResult, ProviderRequest, SourceFile};

/// Result type for gateway operations
pub type Result<T> = std::result::Result<T, Error>;
