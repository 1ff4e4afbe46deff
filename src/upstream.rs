//! Shared request path for the three upstream APIs
//!
//! One GET per logical lookup, no retries. Every failure is mapped onto a
//! typed `SearchError` and propagated to the caller immediately.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::globals::get_http_client;

/// Errors that can occur in the search pipeline.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network-level failure: connect, DNS, timeout, broken body stream.
    #[error("request to {api} failed: {source}")]
    Transport {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success HTTP status.
    #[error("{api} returned HTTP {status}")]
    Upstream {
        api: &'static str,
        status: reqwest::StatusCode,
    },

    /// The API answered 2xx but the body did not match the expected shape.
    #[error("invalid response from {api}: {source}")]
    Decode {
        api: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The catalog search matched nothing.
    #[error("No movies found for your query.")]
    NoResults,
}

/// Fetch `url` and decode the JSON body into `T`.
///
/// `api` is a short human-readable name ("TMDB", "OMDb", "YouTube") used in
/// error messages so the user can tell which upstream misbehaved.
pub async fn fetch_json<T: DeserializeOwned>(
    api: &'static str,
    url: &str,
) -> Result<T, SearchError> {
    let client = get_http_client();

    let response = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|source| SearchError::Transport { api, source })?;

    if !response.status().is_success() {
        return Err(SearchError::Upstream {
            api,
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|source| SearchError::Decode { api, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_results_message() {
        assert_eq!(
            SearchError::NoResults.to_string(),
            "No movies found for your query."
        );
    }

    #[test]
    fn test_upstream_error_names_api_and_status() {
        let err = SearchError::Upstream {
            api: "OMDb",
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        let msg = err.to_string();
        assert!(msg.contains("OMDb"));
        assert!(msg.contains("401"));
    }
}
