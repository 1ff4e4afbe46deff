//! OMDb ratings lookup
//!
//! OMDb is queried by title. The IMDb rating comes straight from the
//! `imdbRating` field; the Rotten Tomatoes rating has to be dug out of the
//! labeled `Ratings` list.

use serde::Deserialize;

use crate::upstream::{fetch_json, SearchError};

const OMDB_BASE_URL: &str = "https://www.omdbapi.com/";

/// Label OMDb uses for the Rotten Tomatoes entry in `Ratings`
const ROTTEN_TOMATOES_SOURCE: &str = "Rotten Tomatoes";

/// Ratings extracted for a single movie
///
/// `None` means the lookup succeeded but OMDb had no such rating. Note that
/// OMDb itself serves the literal string "N/A" for unrated titles; that
/// value is passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieRatings {
    pub imdb: Option<String>,
    pub rotten_tomatoes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(rename = "Ratings", default)]
    ratings: Vec<OmdbRating>,
}

#[derive(Debug, Deserialize)]
struct OmdbRating {
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Value")]
    value: String,
}

/// Look up ratings for a movie title
pub async fn fetch_ratings(api_key: &str, title: &str) -> Result<MovieRatings, SearchError> {
    let url = build_lookup_url(api_key, title);
    let response: OmdbResponse = fetch_json("OMDb", &url).await?;
    Ok(extract_ratings(response))
}

fn build_lookup_url(api_key: &str, title: &str) -> String {
    format!(
        "{}?t={}&apikey={}",
        OMDB_BASE_URL,
        urlencoding::encode(title),
        urlencoding::encode(api_key)
    )
}

fn extract_ratings(response: OmdbResponse) -> MovieRatings {
    let rotten_tomatoes = response
        .ratings
        .into_iter()
        .find(|r| r.source == ROTTEN_TOMATOES_SOURCE)
        .map(|r| r.value);

    MovieRatings {
        imdb: response.imdb_rating,
        rotten_tomatoes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_lookup_url_encodes_title() {
        let url = build_lookup_url("key123", "The Matrix");
        assert!(url.starts_with("https://www.omdbapi.com/?t="));
        assert!(url.contains("t=The%20Matrix"));
        assert!(url.contains("apikey=key123"));
    }

    #[test]
    fn test_extract_ratings_full_response() {
        let json = r#"{
            "Title": "The Matrix",
            "imdbRating": "8.7",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "8.7/10"},
                {"Source": "Rotten Tomatoes", "Value": "83%"},
                {"Source": "Metacritic", "Value": "73/100"}
            ]
        }"#;

        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings = extract_ratings(response);
        assert_eq!(ratings.imdb.as_deref(), Some("8.7"));
        assert_eq!(ratings.rotten_tomatoes.as_deref(), Some("83%"));
    }

    #[test]
    fn test_extract_ratings_no_rotten_tomatoes_entry() {
        let json = r#"{
            "imdbRating": "6.1",
            "Ratings": [
                {"Source": "Internet Movie Database", "Value": "6.1/10"}
            ]
        }"#;

        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings = extract_ratings(response);
        assert_eq!(ratings.imdb.as_deref(), Some("6.1"));
        assert!(ratings.rotten_tomatoes.is_none());
    }

    #[test]
    fn test_extract_ratings_missing_fields() {
        // OMDb "movie not found" responses carry neither field
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings = extract_ratings(response);
        assert!(ratings.imdb.is_none());
        assert!(ratings.rotten_tomatoes.is_none());
    }

    #[test]
    fn test_extract_ratings_picks_first_matching_label() {
        let json = r#"{
            "Ratings": [
                {"Source": "Rotten Tomatoes", "Value": "90%"},
                {"Source": "Rotten Tomatoes", "Value": "10%"}
            ]
        }"#;

        let response: OmdbResponse = serde_json::from_str(json).unwrap();
        let ratings = extract_ratings(response);
        assert_eq!(ratings.rotten_tomatoes.as_deref(), Some("90%"));
    }
}
