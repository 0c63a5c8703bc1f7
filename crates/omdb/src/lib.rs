//! REST API client for the OMDb movie-metadata endpoints.
//!
//! Thin passthrough over the provider's HTTP API (title search and
//! by-id detail lookup) using [`reqwest`]. Responses are relayed as
//! raw JSON because the provider's envelope is also the service's own
//! response shape -- including OMDb's `"Response": "False"` error
//! payloads, which arrive with a 200 status and are forwarded verbatim.
//! No caching, no retries, no client-side timeout.

/// HTTP client for the OMDb API.
pub struct OmdbApi {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Errors from the OMDb API layer.
#[derive(Debug, thiserror::Error)]
pub enum OmdbApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// OMDb returned a non-2xx status code.
    #[error("OMDb API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl OmdbApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Provider endpoint, e.g. `http://www.omdbapi.com/`.
    /// * `api_key` - OMDb API key sent with every request.
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Search movies by free-text title.
    ///
    /// Sends `?s={query}&type=movie&r=json` and returns the raw search
    /// envelope (a `Search` list plus `totalResults`, or an OMDb error
    /// object).
    pub async fn search(&self, query: &str) -> Result<serde_json::Value, OmdbApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("s", query),
                ("apikey", self.api_key.as_str()),
                ("type", "movie"),
                ("r", "json"),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Look up full movie details by IMDb id.
    ///
    /// Sends `?i={imdb_id}&plot=full&r=json` and returns the raw detail
    /// object.
    pub async fn find_by_id(&self, imdb_id: &str) -> Result<serde_json::Value, OmdbApiError> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("i", imdb_id),
                ("apikey", self.api_key.as_str()),
                ("plot", "full"),
                ("r", "json"),
            ])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`OmdbApiError::Api`]
    /// containing the status and body text on failure.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, OmdbApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(OmdbApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Check the status and deserialize the body as raw JSON.
    async fn parse_response(
        response: reqwest::Response,
    ) -> Result<serde_json::Value, OmdbApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }
}
