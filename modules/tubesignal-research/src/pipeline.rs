//! Run orchestration: search once, fetch comments per video in order,
//! assemble the report.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use tubesignal_common::{
    Config, ResearchError, ResearchResult, SearchQuery, PER_VIDEO_COMMENT_CAP,
};

use crate::comments::{ApiCommentSource, DisabledCommentSource};
use crate::report::{build_report, NO_RESULTS_REPORT};
use crate::scraper::HtmlSearcher;
use crate::search::ApiSearcher;
use crate::traits::{CommentSource, VideoSearcher};

pub struct ResearchPipeline {
    searcher: Arc<dyn VideoSearcher>,
    comment_source: Arc<dyn CommentSource>,
    max_videos: u32,
}

impl ResearchPipeline {
    pub fn new(
        searcher: Arc<dyn VideoSearcher>,
        comment_source: Arc<dyn CommentSource>,
        max_videos: u32,
    ) -> Self {
        Self {
            searcher,
            comment_source,
            max_videos,
        }
    }

    /// Select providers from the credential snapshot, once. A key selects
    /// the API searcher and comment source; no key selects the HTML
    /// fallback searcher and disables comments. Never re-evaluated per run.
    pub fn from_config(config: &Config, max_videos: u32) -> Self {
        match &config.youtube_api_key {
            Some(key) => Self::new(
                Arc::new(ApiSearcher::new(key.clone())),
                Arc::new(ApiCommentSource::new(key.clone())),
                max_videos,
            ),
            None => Self::new(
                Arc::new(HtmlSearcher::new()),
                Arc::new(DisabledCommentSource),
                max_videos,
            ),
        }
    }

    /// Run one research pass for a keyword. The only hard failure is a
    /// blank keyword; source failures have already been degraded inside
    /// the providers, and zero videos is a normal outcome.
    pub async fn run(&self, keyword: &str) -> Result<String, ResearchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ResearchError::InvalidInput(
                "keyword must not be empty".to_string(),
            ));
        }

        info!(
            keyword,
            max_videos = self.max_videos,
            searcher = self.searcher.name(),
            "Research run starting"
        );

        let query = SearchQuery::new(keyword, self.max_videos);
        let videos = self.searcher.search(&query).await;

        if videos.is_empty() {
            info!(keyword, "No videos found");
            return Ok(NO_RESULTS_REPORT.to_string());
        }
        info!(count = videos.len(), "Videos found, fetching comments");

        let mut comments: HashMap<String, Vec<String>> = HashMap::new();
        for video in &videos {
            let fetched = self
                .comment_source
                .fetch(&video.id, PER_VIDEO_COMMENT_CAP)
                .await;
            info!(
                video_id = video.id.as_str(),
                title = video.title.as_str(),
                count = fetched.len(),
                "Video processed"
            );
            comments.insert(video.id.clone(), fetched);
        }

        let result = ResearchResult {
            keyword: keyword.to_string(),
            videos,
            comments,
        };

        Ok(build_report(&result, Utc::now()))
    }
}
