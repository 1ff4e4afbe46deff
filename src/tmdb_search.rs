//! TMDB movie catalog search
//!
//! The catalog lookup is the primary search: its result set decides the
//! order and count of everything shown to the user. Ratings and trailers
//! are attached afterwards by the enrichment pass in `search`.

use serde::Deserialize;

use crate::upstream::{fetch_json, SearchError};

const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
const TMDB_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// Shown in place of a poster when TMDB has none for the movie
const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/500x750.png?text=No+Image";

/// A single movie returned by the catalog search
#[derive(Debug, Clone, Deserialize)]
pub struct MovieHit {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse {
    #[serde(default)]
    results: Vec<MovieHit>,
}

/// Search the TMDB catalog by title
///
/// Returns the hits in TMDB's own ranking order. An empty result set is
/// returned as-is; the caller decides whether that is an error.
pub async fn catalog_search(api_key: &str, query: &str) -> Result<Vec<MovieHit>, SearchError> {
    let url = build_search_url(api_key, query);
    let response: TmdbSearchResponse = fetch_json("TMDB", &url).await?;
    Ok(response.results)
}

fn build_search_url(api_key: &str, query: &str) -> String {
    format!(
        "{}/search/movie?api_key={}&query={}",
        TMDB_BASE_URL,
        urlencoding::encode(api_key),
        urlencoding::encode(query)
    )
}

/// Full poster URL for a hit, or a placeholder image when TMDB has none
pub fn poster_url(poster_path: Option<&str>) -> String {
    match poster_path {
        Some(path) => format!("{}{}", TMDB_IMAGE_BASE, path),
        None => PLACEHOLDER_POSTER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_search_url_encodes_query() {
        let url = build_search_url("test-key", "the matrix");
        assert!(url.starts_with("https://api.themoviedb.org/3/search/movie"));
        assert!(url.contains("api_key=test-key"));
        assert!(url.contains("query=the%20matrix"));
    }

    #[test]
    fn test_poster_url() {
        assert_eq!(
            poster_url(Some("/abc123.jpg")),
            "https://image.tmdb.org/t/p/w500/abc123.jpg"
        );
        assert_eq!(poster_url(None), PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "page": 1,
            "results": [
                {
                    "id": 603,
                    "title": "The Matrix",
                    "release_date": "1999-03-30",
                    "overview": "Set in the 22nd century...",
                    "poster_path": "/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg"
                },
                {
                    "id": 555,
                    "title": "Obscure Short"
                }
            ],
            "total_pages": 1,
            "total_results": 2
        }"#;

        let parsed: TmdbSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.results.len(), 2);
        assert_eq!(parsed.results[0].title, "The Matrix");
        assert_eq!(
            parsed.results[0].release_date.as_deref(),
            Some("1999-03-30")
        );
        assert!(parsed.results[1].release_date.is_none());
        assert!(parsed.results[1].overview.is_none());
        assert!(parsed.results[1].poster_path.is_none());
    }

    #[test]
    fn test_parse_empty_response() {
        let parsed: TmdbSearchResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(parsed.results.is_empty());
    }
}
