//! HTTP Client Module
//!
//! Thin reqwest wrapper for JSON GET calls against the configured backend.
//! Maps transport and status failures into [`FetchError`]; performs no
//! retries and no error transformation beyond that mapping.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::fetch::options::RequestOptions;

// == Http Client ==
/// Outbound JSON client bound to a backend base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    // == Constructor ==
    /// Creates a client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    // == Url For ==
    /// Joins a path onto the base URL.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    // == Get Json ==
    /// Performs a GET for JSON, attaching query parameters and, when
    /// supplied, a bearer token.
    ///
    /// Non-2xx statuses become [`FetchError::Status`]; network failures
    /// become [`FetchError::Transport`]; undecodable bodies become
    /// [`FetchError::Decode`].
    pub async fn get_json(
        &self,
        url: &str,
        options: &RequestOptions,
        token: Option<&str>,
    ) -> Result<Value> {
        let mut request = self.client.get(url);

        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        debug!(url, "sending GET");

        let response = request.send().await.map_err(|err| FetchError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|err| FetchError::Decode {
                url: url.to_string(),
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_cleanly() {
        let client = HttpClient::new("http://localhost:8000/");
        assert_eq!(
            client.url_for("/api/quotes"),
            "http://localhost:8000/api/quotes"
        );
        assert_eq!(
            client.url_for("api/quotes"),
            "http://localhost:8000/api/quotes"
        );
    }

    #[test]
    fn test_url_for_without_trailing_slash() {
        let client = HttpClient::new("http://localhost:8000");
        assert_eq!(client.url_for("reports"), "http://localhost:8000/reports");
    }
}
