// Trait abstractions for the research pipeline's two source boundaries.
//
// VideoSearcher — keyword → ordered videos (API or HTML fallback).
// CommentSource — video id → cleaned comments (API, or disabled).
//
// Both are infallible by contract: source failures are absorbed inside the
// implementation and surface as empty/partial results plus a diagnostic, so
// the pipeline only ever sees already-degraded data. These seams enable
// deterministic testing with MockSearcher and MockCommentSource: no network.

use async_trait::async_trait;

use tubesignal_common::{SearchQuery, VideoRecord};

#[async_trait]
pub trait VideoSearcher: Send + Sync {
    /// Find up to `query.max_results` videos, in source relevance order.
    /// Transport or auth failures degrade to an empty list.
    async fn search(&self, query: &SearchQuery) -> Vec<VideoRecord>;

    fn name(&self) -> &str;
}

#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch up to `max_comments` cleaned comments for a video, in source
    /// relevance order. Mid-pagination failures return the partial
    /// accumulation; a missing credential returns an empty list.
    async fn fetch(&self, video_id: &str, max_comments: usize) -> Vec<String>;
}
