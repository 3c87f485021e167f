//! Comment retrieval: paginated, de-duplicated, cleaned.
//!
//! Comments only exist behind the API credential — there is no scrape
//! fallback for them. Without a key the pipeline uses
//! `DisabledCommentSource`, which degrades to empty lists with a
//! configuration diagnostic.

use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, warn};
use youtube_client::YouTubeClient;

use tubesignal_common::ResearchError;

use crate::cleaner::clean;
use crate::traits::CommentSource;

/// API page-size ceiling for `commentThreads.list`.
const COMMENT_PAGE_MAX: usize = 100;

/// Relevance-ordered top-level comments via `commentThreads.list`.
pub struct ApiCommentSource {
    client: YouTubeClient,
}

impl ApiCommentSource {
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
impl CommentSource for ApiCommentSource {
    /// Iterative pagination over an accumulator plus continuation token.
    /// Stops on cap reached or source exhausted; total API calls are
    /// bounded by ceil(max_comments / 100). Errors mid-loop keep whatever
    /// was accumulated.
    async fn fetch(&self, video_id: &str, max_comments: usize) -> Vec<String> {
        let mut comments: Vec<String> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut page_token: Option<String> = None;

        while comments.len() < max_comments {
            let page_size = (max_comments - comments.len()).min(COMMENT_PAGE_MAX) as u32;
            let page = match self
                .client
                .list_comment_threads(video_id, page_size, page_token.as_deref())
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    warn!(video_id, collected = comments.len(), error = %e, "Comment pagination failed, keeping partial results");
                    return comments;
                }
            };

            for thread in page.items {
                if comments.len() >= max_comments {
                    break;
                }
                let raw = thread.snippet.top_level_comment.snippet.text_display;
                if let Some(cleaned) = clean(&raw) {
                    if seen.insert(cleaned.clone()) {
                        comments.push(cleaned);
                    }
                }
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!(video_id, count = comments.len(), "Comments fetched");
        comments
    }
}

/// Stand-in comment source for credential-less runs. Always empty.
pub struct DisabledCommentSource;

#[async_trait]
impl CommentSource for DisabledCommentSource {
    async fn fetch(&self, video_id: &str, _max_comments: usize) -> Vec<String> {
        let err = ResearchError::Config(
            "YOUTUBE_API_KEY is required for comment fetching".to_string(),
        );
        warn!(video_id, error = %err, "Skipping comments");
        Vec::new()
    }
}
