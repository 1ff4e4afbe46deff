//! Movie search and enrichment pipeline
//!
//! A search is one catalog lookup followed by a per-hit enrichment fan-out:
//! every hit gets a ratings lookup and a trailer lookup, both in flight at
//! the same time, across all hits at once. A failed secondary lookup only
//! blanks its own fields; it never drops the hit or disturbs its neighbors.

use anyhow::{Context, Result};
use futures::future::join_all;

use crate::omdb_ratings::{self, MovieRatings};
use crate::tmdb_search::{self, MovieHit};
use crate::upstream::SearchError;
use crate::youtube_trailer;

/// API keys for the three upstream services
#[derive(Debug, Clone)]
pub struct ApiKeys {
    pub tmdb: String,
    pub omdb: String,
    pub youtube: String,
}

impl ApiKeys {
    /// Read all three keys from the environment
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            tmdb: std::env::var("TMDB_API_KEY")
                .context("TMDB_API_KEY not set in environment")?,
            omdb: std::env::var("OMDB_API_KEY")
                .context("OMDB_API_KEY not set in environment")?,
            youtube: std::env::var("YOUTUBE_API_KEY")
                .context("YOUTUBE_API_KEY not set in environment")?,
        })
    }
}

/// A catalog hit with its ratings and trailer attached
///
/// `None` in any enrichment field means the data was unavailable, either
/// because the lookup failed or because the service had nothing. Rendering
/// those as "N/A"/blank is the presenter's job.
#[derive(Debug, Clone)]
pub struct EnrichedMovie {
    pub hit: MovieHit,
    pub imdb_rating: Option<String>,
    pub rotten_tomatoes_rating: Option<String>,
    pub trailer_url: Option<String>,
}

impl EnrichedMovie {
    /// Merge a catalog hit with the outcomes of its two secondary lookups
    fn from_lookups(
        hit: MovieHit,
        ratings: Result<MovieRatings, SearchError>,
        trailer: Result<Option<String>, SearchError>,
    ) -> Self {
        let ratings = ratings.unwrap_or_default();
        let trailer_url = trailer.unwrap_or(None);

        Self {
            hit,
            imdb_rating: ratings.imdb,
            rotten_tomatoes_rating: ratings.rotten_tomatoes,
            trailer_url,
        }
    }
}

/// Run the full search pipeline for a query
///
/// The query must already be trimmed and non-empty (the input loop enforces
/// this). Returns one `EnrichedMovie` per catalog hit, in catalog order.
/// A catalog failure or an empty catalog result aborts the whole search;
/// secondary lookup failures do not.
pub async fn search_movies(
    keys: &ApiKeys,
    query: &str,
) -> Result<Vec<EnrichedMovie>, SearchError> {
    let hits = tmdb_search::catalog_search(&keys.tmdb, query).await?;

    if hits.is_empty() {
        return Err(SearchError::NoResults);
    }

    // join_all preserves input order, so the enriched list keeps TMDB's
    // own ranking regardless of which lookups finish first.
    let enriched = join_all(hits.into_iter().map(|hit| enrich_movie(keys, hit))).await;

    Ok(enriched)
}

/// Attach ratings and a trailer to one catalog hit
///
/// The two lookups run together; each one degrades to `None` fields on its
/// own failure, independently of the other.
async fn enrich_movie(keys: &ApiKeys, hit: MovieHit) -> EnrichedMovie {
    let (ratings, trailer) = tokio::join!(
        omdb_ratings::fetch_ratings(&keys.omdb, &hit.title),
        youtube_trailer::fetch_trailer_url(&keys.youtube, &hit.title),
    );

    EnrichedMovie::from_lookups(hit, ratings, trailer)
}
