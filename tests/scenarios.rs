//! End-to-end runs of preview, selection and download against a mock Instagram.

use indicatif::ProgressBar;
use instagram_downloader::{
    config::ClientConfig,
    download::{download_selected, fetch_previews, resolved_items, RateLimiter},
    media::{parse_command, Selection},
    post::parse_input,
    Config, DownloadStatus, InstagramApi, MediaKind, PreviewState, ResolveError,
};
use tempfile::TempDir;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const IMAGE_BYTES: &[u8] = b"\xff\xd8\xff\xe0 jpeg bytes";
const VIDEO_BYTES: &[u8] = b"\x00\x00\x00\x18ftypmp42 video bytes";

async fn mock_instagram() -> MockServer {
    let server = MockServer::start().await;
    let body = format!(
        r#"{{"data":{{"xdt_shortcode_media":{{"__typename":"XDTGraphSidecar","shortcode":"ABC123",
            "edge_sidecar_to_children":{{"edges":[
                {{"node":{{"is_video":false,"display_url":"{uri}/media/abc-0.jpg"}}}},
                {{"node":{{"is_video":true,"display_url":"{uri}/media/abc-1.jpg","video_url":"{uri}/media/abc-1.mp4"}}}}
            ]}}}}}},"status":"ok"}}"#,
        uri = server.uri()
    );

    Mock::given(method("POST"))
        .and(path("/api/graphql"))
        .and(body_string_contains("ABC123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/graphql"))
        .and(body_string_contains("XYZ789"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/media/abc-0.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/media/abc-1.mp4"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(VIDEO_BYTES))
        .mount(&server)
        .await;

    server
}

fn config_for(server: &MockServer, dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.client = ClientConfig {
        graphql_endpoint: format!("{}/api/graphql", server.uri()),
        ..ClientConfig::default()
    };
    config.options.download_directory = Some(dir.path().join("downloads"));
    config
}

#[tokio::test]
async fn test_preview_then_download_then_rerun() {
    let server = mock_instagram().await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let api = InstagramApi::new(&config.client).unwrap();

    let parsed = parse_input("https://www.instagram.com/p/ABC123/, not-a-url\nhttps://instagram.com/reel/XYZ789/");
    assert_eq!(parsed.posts.len(), 2);
    assert_eq!(parsed.invalid.len(), 1);
    assert_eq!(parsed.invalid[0].input, "not-a-url");

    let previews = fetch_previews(
        &api,
        parsed.posts,
        None,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await;

    assert_eq!(previews.len(), 2);
    assert!(matches!(previews[0].state, PreviewState::Previewed(_)));
    assert_eq!(previews[1].error(), Some(&ResolveError::NotFound));

    let items = resolved_items(&previews);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].kind, MediaKind::Image);
    assert_eq!(items[1].kind, MediaKind::Video);

    let selected = Selection::new(items.len()).pick(&items);
    let summary = download_selected(
        &api,
        &config,
        &selected,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await
    .unwrap();

    assert_eq!(summary.saved, 2);
    assert_eq!(summary.failed, 0);

    let post_dir = dir.path().join("downloads").join("ABC123");
    assert_eq!(std::fs::read(post_dir.join("0.jpg")).unwrap(), IMAGE_BYTES);
    assert_eq!(std::fs::read(post_dir.join("1.mp4")).unwrap(), VIDEO_BYTES);

    // A second run finds both files and leaves them alone.
    let rerun = download_selected(
        &api,
        &config,
        &selected,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await
    .unwrap();

    assert_eq!(rerun.skipped, 2);
    assert!(rerun
        .results
        .iter()
        .all(|result| result.status == DownloadStatus::Skipped));
    assert_eq!(std::fs::read(post_dir.join("0.jpg")).unwrap(), IMAGE_BYTES);

    let mut names: Vec<_> = std::fs::read_dir(&post_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    assert_eq!(names, vec!["0.jpg", "1.mp4"]);
}

#[tokio::test]
async fn test_selection_expression_downloads_only_chosen() {
    let server = mock_instagram().await;
    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let api = InstagramApi::new(&config.client).unwrap();

    let parsed = parse_input("https://www.instagram.com/p/ABC123/");
    let previews = fetch_previews(
        &api,
        parsed.posts,
        None,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await;
    let items = resolved_items(&previews);

    let mut selection = Selection::new(items.len());
    selection.apply(&parse_command("2", items.len()).unwrap());

    let summary = download_selected(
        &api,
        &config,
        &selection.pick(&items),
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await
    .unwrap();

    assert_eq!(summary.saved, 1);
    let post_dir = dir.path().join("downloads").join("ABC123");
    assert!(post_dir.join("1.mp4").exists());
    assert!(!post_dir.join("0.jpg").exists());
}

#[tokio::test]
async fn test_missing_media_file_fails_only_that_item() {
    let server = MockServer::start().await;
    let body = format!(
        r#"{{"data":{{"xdt_shortcode_media":{{"__typename":"XDTGraphSidecar",
            "edge_sidecar_to_children":{{"edges":[
                {{"node":{{"is_video":false,"display_url":"{uri}/media/gone.jpg"}}}},
                {{"node":{{"is_video":false,"display_url":"{uri}/media/ok.jpg"}}}}
            ]}}}}}}}}"#,
        uri = server.uri()
    );
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/gone.jpg"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/media/ok.jpg"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(IMAGE_BYTES))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);
    let api = InstagramApi::new(&config.client).unwrap();

    let previews = fetch_previews(
        &api,
        parse_input("https://www.instagram.com/p/DEF456/").posts,
        None,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await;
    let items = resolved_items(&previews);
    let selected: Vec<_> = items.iter().collect();

    let summary = download_selected(
        &api,
        &config,
        &selected,
        &mut RateLimiter::disabled(),
        &ProgressBar::hidden(),
    )
    .await
    .unwrap();

    assert_eq!(summary.failed, 1);
    assert_eq!(summary.saved, 1);
    assert_eq!(summary.results[0].status, DownloadStatus::Failed);
    assert!(summary.results[0].error.is_some());

    let post_dir = dir.path().join("downloads").join("DEF456");
    assert!(!post_dir.join("0.jpg").exists());
    assert!(post_dir.join("1.jpg").exists());
}
