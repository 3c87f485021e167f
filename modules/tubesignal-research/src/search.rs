//! Primary search provider backed by the YouTube Data API.

use async_trait::async_trait;
use tracing::warn;
use youtube_client::YouTubeClient;

use tubesignal_common::{SearchQuery, VideoRecord, UNKNOWN_CHANNEL};

use crate::traits::VideoSearcher;

/// Authenticated, relevance-ordered search via `search.list`. Requires the
/// API credential; selected at pipeline construction when one is present.
pub struct ApiSearcher {
    client: YouTubeClient,
}

impl ApiSearcher {
    pub fn new(api_key: String) -> Self {
        Self {
            client: YouTubeClient::new(api_key),
        }
    }

    pub fn with_client(client: YouTubeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VideoSearcher for ApiSearcher {
    async fn search(&self, query: &SearchQuery) -> Vec<VideoRecord> {
        let resp = match self
            .client
            .search_videos(
                &query.keyword,
                query.max_results,
                query.language_hint.as_deref(),
            )
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(keyword = query.keyword.as_str(), error = %e, "API search failed, continuing with zero videos");
                return Vec::new();
            }
        };

        resp.items
            .into_iter()
            .filter_map(|item| {
                let id = item.id.video_id?;
                Some(VideoRecord::new(
                    id,
                    item.snippet.title,
                    item.snippet
                        .channel_title
                        .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string()),
                ))
            })
            .take(query.max_results as usize)
            .collect()
    }

    fn name(&self) -> &str {
        "youtube-api"
    }
}
