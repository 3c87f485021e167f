//! Fallback search provider: unauthenticated scrape of the YouTube results
//! page. Metadata only — the embedded `ytInitialData` JSON blob is parsed
//! for `videoRenderer` entries, nothing is downloaded.
//!
//! Best-effort by design: used only when no API credential is configured,
//! never as a retry path for transient API failures.

use std::collections::HashSet;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use tubesignal_common::{SearchQuery, VideoRecord, UNKNOWN_CHANNEL};

use crate::traits::VideoSearcher;

const RESULTS_URL: &str = "https://www.youtube.com/results";

/// Marker preceding the embedded search data blob.
const INITIAL_DATA_MARKER: &str = "var ytInitialData = ";

/// Desktop UA. YouTube serves a script-free shell to unknown agents.
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

pub struct HtmlSearcher {
    client: reqwest::Client,
    results_url: String,
}

impl HtmlSearcher {
    pub fn new() -> Self {
        Self::with_results_url(RESULTS_URL)
    }

    /// Point the scraper at a non-default results URL (mock servers in tests).
    pub fn with_results_url(results_url: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            results_url: results_url.to_string(),
        }
    }

    async fn fetch_results_page(&self, keyword: &str) -> Result<String> {
        let url = url::Url::parse_with_params(&self.results_url, &[("search_query", keyword)])
            .context("Invalid results URL")?;

        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            anyhow::bail!("Results page returned status {status}");
        }
        Ok(resp.text().await?)
    }
}

impl Default for HtmlSearcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoSearcher for HtmlSearcher {
    async fn search(&self, query: &SearchQuery) -> Vec<VideoRecord> {
        let html = match self.fetch_results_page(&query.keyword).await {
            Ok(html) => html,
            Err(e) => {
                warn!(keyword = query.keyword.as_str(), error = %e, "Fallback search failed, continuing with zero videos");
                return Vec::new();
            }
        };

        match parse_results_page(&html, query.max_results as usize) {
            Ok(videos) => {
                debug!(count = videos.len(), "Fallback search extracted videos");
                videos
            }
            Err(e) => {
                warn!(keyword = query.keyword.as_str(), error = %e, "Failed to parse results page, continuing with zero videos");
                Vec::new()
            }
        }
    }

    fn name(&self) -> &str {
        "youtube-html"
    }
}

/// Extract up to `max_results` unique videos from a results page, in
/// document order (the page's relevance order).
fn parse_results_page(html: &str, max_results: usize) -> Result<Vec<VideoRecord>> {
    let data = extract_initial_data(html).context("ytInitialData blob not found")?;
    let root: Value = serde_json::from_str(data).context("ytInitialData is not valid JSON")?;
    Ok(collect_video_renderers(&root, max_results))
}

/// Slice out the `ytInitialData` JSON between its assignment marker and the
/// closing script tag.
fn extract_initial_data(html: &str) -> Option<&str> {
    let start = html.find(INITIAL_DATA_MARKER)? + INITIAL_DATA_MARKER.len();
    let rest = &html[start..];
    let end = rest.find(";</script>")?;
    Some(&rest[..end])
}

/// Walk the blob for `videoRenderer` objects. Iterative traversal with an
/// explicit stack; siblings inside an array keep their document order, which
/// is what carries relevance ranking.
fn collect_video_renderers(root: &Value, max_results: usize) -> Vec<VideoRecord> {
    let mut videos = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut stack: Vec<&Value> = vec![root];

    while let Some(value) = stack.pop() {
        if videos.len() >= max_results {
            break;
        }
        match value {
            Value::Object(map) => {
                if let Some(renderer) = map.get("videoRenderer") {
                    if let Some(video) = video_from_renderer(renderer) {
                        if seen.insert(video.id.clone()) {
                            videos.push(video);
                        }
                        continue;
                    }
                }
                // Reverse so the stack pops values in map order.
                for child in map.values().rev() {
                    if child.is_object() || child.is_array() {
                        stack.push(child);
                    }
                }
            }
            Value::Array(items) => {
                for child in items.iter().rev() {
                    if child.is_object() || child.is_array() {
                        stack.push(child);
                    }
                }
            }
            _ => {}
        }
    }

    videos
}

fn video_from_renderer(renderer: &Value) -> Option<VideoRecord> {
    let id = renderer.get("videoId")?.as_str()?;
    let title = first_run_text(renderer.get("title")?)?;
    let channel = renderer
        .get("ownerText")
        .or_else(|| renderer.get("longBylineText"))
        .and_then(first_run_text)
        .unwrap_or_else(|| UNKNOWN_CHANNEL.to_string());

    Some(VideoRecord::new(id, title, channel))
}

/// Text of a YouTube formatted-string node: either `runs[0].text` or the
/// plain `simpleText` form.
fn first_run_text(node: &Value) -> Option<String> {
    if let Some(text) = node.get("simpleText").and_then(Value::as_str) {
        return Some(text.to_string());
    }
    node.get("runs")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_html() -> String {
        let data = serde_json::json!({
            "contents": {
                "sectionListRenderer": {
                    "contents": [
                        {
                            "itemSectionRenderer": {
                                "contents": [
                                    {
                                        "videoRenderer": {
                                            "videoId": "vid-1",
                                            "title": { "runs": [{ "text": "First result" }] },
                                            "ownerText": { "runs": [{ "text": "Chan A" }] }
                                        }
                                    },
                                    { "shelfRenderer": { "title": { "simpleText": "People also watched" } } },
                                    {
                                        "videoRenderer": {
                                            "videoId": "vid-2",
                                            "title": { "simpleText": "Second result" }
                                        }
                                    },
                                    {
                                        "videoRenderer": {
                                            "videoId": "vid-1",
                                            "title": { "runs": [{ "text": "First result (duplicate shelf)" }] },
                                            "ownerText": { "runs": [{ "text": "Chan A" }] }
                                        }
                                    },
                                    {
                                        "videoRenderer": {
                                            "videoId": "vid-3",
                                            "title": { "runs": [{ "text": "Third result" }] },
                                            "longBylineText": { "runs": [{ "text": "Chan C" }] }
                                        }
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        });
        format!(
            "<html><body><script>var ytInitialData = {data};</script></body></html>"
        )
    }

    #[test]
    fn extracts_videos_in_document_order() {
        let videos = parse_results_page(&results_html(), 10).unwrap();
        let ids: Vec<&str> = videos.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["vid-1", "vid-2", "vid-3"]);
        assert_eq!(videos[0].title, "First result");
        assert_eq!(videos[0].channel_name, "Chan A");
        assert_eq!(videos[0].canonical_url, "https://www.youtube.com/watch?v=vid-1");
    }

    #[test]
    fn missing_channel_maps_to_unknown_sentinel() {
        let videos = parse_results_page(&results_html(), 10).unwrap();
        assert_eq!(videos[1].channel_name, UNKNOWN_CHANNEL);
    }

    #[test]
    fn long_byline_used_when_owner_text_absent() {
        let videos = parse_results_page(&results_html(), 10).unwrap();
        assert_eq!(videos[2].channel_name, "Chan C");
    }

    #[test]
    fn truncates_to_max_results() {
        let videos = parse_results_page(&results_html(), 2).unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[1].id, "vid-2");
    }

    #[test]
    fn page_without_blob_is_an_error() {
        assert!(parse_results_page("<html><body>consent wall</body></html>", 10).is_err());
    }
}
