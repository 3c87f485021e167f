//! Report assembly. Pure text formatting: no I/O, no clock — the caller
//! injects the generation timestamp.

use chrono::{DateTime, Utc};

use tubesignal_common::ResearchResult;

const BANNER_WIDTH: usize = 80;

/// Fixed terminal message for the zero-videos outcome. Deliberately short:
/// the structured report is never produced without at least one video.
pub const NO_RESULTS_REPORT: &str = "No videos found for this search.";

const NO_COMMENTS_MARKER: &str = "No comments available for this video";

/// Assemble the full report: header banner, one section per video in
/// search order, closing banner. Deterministic given identical inputs.
pub fn build_report(result: &ResearchResult, generated_at: DateTime<Utc>) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "-".repeat(BANNER_WIDTH);

    let mut lines: Vec<String> = Vec::new();
    lines.push(banner.clone());
    lines.push(format!(
        "YOUTUBE RESEARCH REPORT - {}",
        result.keyword.to_uppercase()
    ));
    lines.push(banner.clone());
    lines.push(format!(
        "Generated: {}",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    lines.push(format!("Videos analyzed: {}", result.videos.len()));
    lines.push(String::new());

    for (idx, video) in result.videos.iter().enumerate() {
        lines.push(rule.clone());
        lines.push(format!("VIDEO {}: {}", idx + 1, video.title));
        lines.push(format!("Channel: {}", video.channel_name));
        lines.push(format!("URL: {}", video.canonical_url));
        lines.push(String::new());

        let comments = result.comments_for(&video.id);
        if comments.is_empty() {
            lines.push(NO_COMMENTS_MARKER.to_string());
            lines.push(String::new());
        } else {
            lines.push(format!("TOP {} COMMENTS:", comments.len()));
            lines.push(String::new());
            for (i, comment) in comments.iter().enumerate() {
                lines.push(format!("{}. {}", i + 1, comment));
                lines.push(String::new());
            }
        }
    }

    lines.push(banner.clone());
    lines.push("END OF REPORT".to_string());
    lines.push(banner);

    lines.join("\n")
}
