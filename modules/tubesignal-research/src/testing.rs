// Test mocks for the research pipeline.
//
// Two mocks matching the two trait boundaries:
// - MockSearcher (VideoSearcher) — HashMap-based keyword→videos
// - MockCommentSource (CommentSource) — HashMap-based video id→comments,
//   recording fetch order for ordering assertions
//
// Both degrade to empty for unregistered inputs, matching the real
// providers' failure policy.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use tubesignal_common::{SearchQuery, VideoRecord};

use crate::traits::{CommentSource, VideoSearcher};

// ---------------------------------------------------------------------------
// MockSearcher
// ---------------------------------------------------------------------------

/// Keyword-keyed searcher. Builder pattern: `.on_keyword()`.
#[derive(Default)]
pub struct MockSearcher {
    results: HashMap<String, Vec<VideoRecord>>,
}

impl MockSearcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_keyword(mut self, keyword: &str, videos: Vec<VideoRecord>) -> Self {
        self.results.insert(keyword.to_string(), videos);
        self
    }
}

#[async_trait]
impl VideoSearcher for MockSearcher {
    async fn search(&self, query: &SearchQuery) -> Vec<VideoRecord> {
        let mut videos = self.results.get(&query.keyword).cloned().unwrap_or_default();
        videos.truncate(query.max_results as usize);
        videos
    }

    fn name(&self) -> &str {
        "mock"
    }
}

// ---------------------------------------------------------------------------
// MockCommentSource
// ---------------------------------------------------------------------------

/// Video-id-keyed comment source. Records every fetched id in call order.
#[derive(Default)]
pub struct MockCommentSource {
    comments: HashMap<String, Vec<String>>,
    fetched: Mutex<Vec<String>>,
}

impl MockCommentSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_video(mut self, video_id: &str, comments: Vec<String>) -> Self {
        self.comments.insert(video_id.to_string(), comments);
        self
    }

    /// Video ids fetched so far, in call order.
    pub fn fetched_ids(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommentSource for MockCommentSource {
    async fn fetch(&self, video_id: &str, max_comments: usize) -> Vec<String> {
        self.fetched.lock().unwrap().push(video_id.to_string());
        let mut comments = self.comments.get(video_id).cloned().unwrap_or_default();
        comments.truncate(max_comments);
        comments
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn video(id: &str, title: &str, channel: &str) -> VideoRecord {
    VideoRecord::new(id, title, channel)
}
