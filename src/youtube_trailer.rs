//! YouTube trailer search
//!
//! Searches for "<title> trailer" and takes the first video hit. YouTube's
//! search response nests the video id one level deeper than you'd expect
//! (`items[].id.videoId`).

use serde::Deserialize;

use crate::upstream::{fetch_json, SearchError};

const YOUTUBE_SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const YOUTUBE_EMBED_BASE: &str = "https://www.youtube.com/embed/";

#[derive(Debug, Deserialize)]
struct YoutubeSearchResponse {
    #[serde(default)]
    items: Vec<YoutubeItem>,
}

#[derive(Debug, Deserialize)]
struct YoutubeItem {
    id: YoutubeItemId,
}

#[derive(Debug, Deserialize)]
struct YoutubeItemId {
    #[serde(rename = "videoId", default)]
    video_id: Option<String>,
}

/// Find a trailer for a movie title
///
/// Returns `None` when the search matches no videos.
pub async fn fetch_trailer_url(
    api_key: &str,
    title: &str,
) -> Result<Option<String>, SearchError> {
    let url = build_search_url(api_key, title);
    let response: YoutubeSearchResponse = fetch_json("YouTube", &url).await?;
    Ok(extract_trailer_url(response))
}

fn build_search_url(api_key: &str, title: &str) -> String {
    format!(
        "{}?part=snippet&q={}&type=video&key={}",
        YOUTUBE_SEARCH_URL,
        urlencoding::encode(&format!("{} trailer", title)),
        urlencoding::encode(api_key)
    )
}

fn extract_trailer_url(response: YoutubeSearchResponse) -> Option<String> {
    response
        .items
        .into_iter()
        .next()
        .and_then(|item| item.id.video_id)
        .map(|id| format!("{}{}", YOUTUBE_EMBED_BASE, id))
}
