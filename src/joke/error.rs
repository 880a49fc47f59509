use thiserror::Error;

/// Message shown to the user for every kind of fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Please try fetch another joke";

/// Errors that can occur while fetching a joke.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response, or the body could not be read
    #[error("Request to '{url}' failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// Body was not a joke record
    #[error("Malformed joke payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// User-facing message. Identical for all variants; no retry hint
    /// distinguishes transient from permanent failures.
    pub fn user_message(&self) -> &'static str {
        FETCH_ERROR_MESSAGE
    }
}
