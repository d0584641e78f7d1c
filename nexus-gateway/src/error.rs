use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Missing API key")]
    MissingApiKey,
}
