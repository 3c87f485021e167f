use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default number of videos analyzed per run.
pub const DEFAULT_MAX_VIDEOS: u32 = 10;

/// Fixed per-video comment cap, independent of the video cap.
pub const PER_VIDEO_COMMENT_CAP: usize = 20;

/// Fixed relevance-language bias applied to primary API searches.
pub const DEFAULT_RELEVANCE_LANGUAGE: &str = "fr";

/// Channel sentinel when the source omits the uploader name.
pub const UNKNOWN_CHANNEL: &str = "Unknown";

/// One search request. Immutable, constructed once per run.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keyword: String,
    pub max_results: u32,
    pub language_hint: Option<String>,
}

impl SearchQuery {
    pub fn new(keyword: impl Into<String>, max_results: u32) -> Self {
        Self {
            keyword: keyword.into(),
            max_results,
            language_hint: Some(DEFAULT_RELEVANCE_LANGUAGE.to_string()),
        }
    }
}

/// A video found by search. Identity is `id`; list position carries the
/// source's relevance order, which is preserved through to the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub channel_name: String,
    pub canonical_url: String,
}

impl VideoRecord {
    /// Build a record, deriving the canonical watch URL from the id.
    pub fn new(id: impl Into<String>, title: impl Into<String>, channel_name: impl Into<String>) -> Self {
        let id = id.into();
        let canonical_url = format!("https://www.youtube.com/watch?v={id}");
        Self {
            id,
            title: title.into(),
            channel_name: channel_name.into(),
            canonical_url,
        }
    }
}

/// Aggregate of one research run: the keyword, the videos in relevance
/// order, and the cleaned comments keyed by video id. Every listed video
/// has exactly one (possibly empty) comments entry.
#[derive(Debug, Clone)]
pub struct ResearchResult {
    pub keyword: String,
    pub videos: Vec<VideoRecord>,
    pub comments: HashMap<String, Vec<String>>,
}

impl ResearchResult {
    pub fn new(keyword: impl Into<String>, videos: Vec<VideoRecord>) -> Self {
        Self {
            keyword: keyword.into(),
            videos,
            comments: HashMap::new(),
        }
    }

    pub fn comments_for(&self, video_id: &str) -> &[String] {
        self.comments.get(video_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
