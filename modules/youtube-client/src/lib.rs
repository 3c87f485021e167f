pub mod error;
pub mod types;

pub use error::{Result, YouTubeError};
pub use types::{
    Comment, CommentSnippet, CommentThread, CommentThreadListResponse, CommentThreadSnippet,
    SearchListResponse, SearchResult, SearchResultId, SearchSnippet,
};

use std::time::Duration;

const BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl YouTubeClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL)
    }

    /// Point the client at a non-default base URL (mock servers in tests).
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Relevance-ordered video search for a keyword, optionally biased toward
    /// a language. One request; the API caps `maxResults` at 50.
    pub async fn search_videos(
        &self,
        keyword: &str,
        max_results: u32,
        relevance_language: Option<&str>,
    ) -> Result<SearchListResponse> {
        let url = format!("{}/search", self.base_url);
        let max = max_results.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("type", "video"),
            ("order", "relevance"),
            ("q", keyword),
            ("maxResults", &max),
            ("key", &self.api_key),
        ];
        if let Some(lang) = relevance_language {
            params.push(("relevanceLanguage", lang));
        }

        let resp = self.client.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchListResponse = resp.json().await?;
        tracing::debug!(keyword, count = body.items.len(), "Search page fetched");
        Ok(body)
    }

    /// Fetch one page of top-level comment threads for a video, ordered by
    /// relevance. Pass the previous response's `next_page_token` to continue.
    pub async fn list_comment_threads(
        &self,
        video_id: &str,
        page_size: u32,
        page_token: Option<&str>,
    ) -> Result<CommentThreadListResponse> {
        let url = format!("{}/commentThreads", self.base_url);
        let max = page_size.to_string();
        let mut params = vec![
            ("part", "snippet"),
            ("textFormat", "plainText"),
            ("order", "relevance"),
            ("videoId", video_id),
            ("maxResults", &max),
            ("key", &self.api_key),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token));
        }

        let resp = self.client.get(&url).query(&params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(YouTubeError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: CommentThreadListResponse = resp.json().await?;
        tracing::debug!(video_id, count = body.items.len(), "Comment page fetched");
        Ok(body)
    }
}
