use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Input(String),

    #[error("{0}")]
    Config(String),

    #[error("Failed to connect to {provider}: {message}")]
    Transport {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} API error ({status}): {body}")]
    Upstream {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Invalid {provider} response: {body}")]
    Decode {
        provider: &'static str,
        body: String,
    },
}
