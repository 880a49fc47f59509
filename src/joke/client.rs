use reqwest::Client;

use crate::joke::error::FetchError;
use crate::joke::Joke;

/// HTTP client for the random joke endpoint.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct JokeClient {
    client: Client,
    url: String,
}

impl JokeClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(concat!("jokebox/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issue one GET and decode the body as a joke.
    ///
    /// No retries and no timeout: a hung request stays in flight until the
    /// server or the OS gives up.
    pub async fn fetch_random(&self) -> Result<Joke, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Network {
                url: self.url.clone(),
                source,
            })?;

        let joke: Joke = serde_json::from_slice(&body)?;
        tracing::debug!(joke_id = joke.id, "fetched joke");
        Ok(joke)
    }
}
