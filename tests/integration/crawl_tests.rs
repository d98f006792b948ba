//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, writing into temporary corpus directories.

use corpus_harvest::config::{CollisionPolicy, Config};
use corpus_harvest::crawler::{crawl, Coordinator};
use corpus_harvest::{HarvestError, PageOutcome};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing into the given directory
fn create_test_config(dir: &TempDir, max_links: usize) -> Config {
    let mut config = Config::default();
    config.crawler.max_links = max_links;
    config.crawler.timeout_secs = 2;
    config.crawler.random_seed = Some(7);
    config.output.directory = dir.path().to_string_lossy().into_owned();
    config
}

fn page(title: &str, text: &str, links: &[String]) -> String {
    let anchors: String = links
        .iter()
        .map(|link| format!(r#"<a href="{}"></a>"#, link))
        .collect();
    format!(
        "<html><head><title>{}</title></head><body>{}{}</body></html>",
        title, text, anchors
    )
}

async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_site() {
    // Start a mock server
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Home",
            "Hello World",
            &[format!("{}/page1", base_url), format!("{}/page2", base_url)],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        page("Page 1", "Content 1", &[format!("{}/", base_url)]),
    )
    .await;
    mount_page(&mock_server, "/page2", page("Page 2", "Content 2", &[])).await;

    let dir = TempDir::new().expect("Failed to create corpus dir");
    let config = create_test_config(&dir, 15);

    let report = crawl(&config, &format!("{}/", base_url))
        .await
        .expect("Crawl failed");

    // Wiremock verifies each page was fetched exactly once when mock_server drops
    assert_eq!(report.visited.len(), 3);
    assert!(report.pending.is_empty());
    assert_eq!(report.outcome_count(PageOutcome::Harvested), 3);

    assert_eq!(
        std::fs::read_to_string(dir.path().join("Home.txt")).unwrap(),
        "Hello World"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("Page 1.txt")).unwrap(),
        "Content 1"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("Page 2.txt")).unwrap(),
        "Content 2"
    );
}

#[tokio::test]
async fn test_seed_server_error_reports_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 15);

    let report = crawl(&config, &format!("{}/", mock_server.uri()))
        .await
        .expect("Crawl failed");

    assert!(report.visited.is_empty());
    assert!(report.pending.is_empty());
    assert_eq!(report.outcome_count(PageOutcome::HttpError), 1);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    assert!(report.to_string().starts_with("Visited URLs:\nOther found URLs:\n"));
}

#[tokio::test]
async fn test_page_cap_leaves_links_pending() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let links: Vec<String> = (1..=4).map(|i| format!("{}/leaf{}", base_url, i)).collect();
    mount_page(&mock_server, "/", page("Seed", "seed text", &links)).await;

    // Leaves must never be requested with a cap of one
    Mock::given(method("GET"))
        .and(path("/leaf1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 1);

    let report = crawl(&config, &format!("{}/", base_url)).await.unwrap();

    assert_eq!(report.visited, vec![format!("{}/", base_url)]);
    assert_eq!(report.pending.len(), 4);
    assert!(report.hit_cap());
}

#[tokio::test]
async fn test_redirect_and_missing_pages_are_discarded() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Seed",
            "seed text",
            &[format!("{}/moved", base_url), format!("{}/gone", base_url)],
        ),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/"))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 15);

    let report = crawl(&config, &format!("{}/", base_url)).await.unwrap();

    assert_eq!(report.visited.len(), 1);
    assert!(report.pending.is_empty());
    assert_eq!(report.outcome_count(PageOutcome::HttpError), 2);
}

#[tokio::test]
async fn test_unreachable_link_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Seed",
            "seed text",
            &["http://127.0.0.1:9/".to_string(), format!("{}/next", base_url)],
        ),
    )
    .await;
    mount_page(&mock_server, "/next", page("Next", "next text", &[])).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 15);

    let report = crawl(&config, &format!("{}/", base_url)).await.unwrap();

    assert_eq!(report.visited.len(), 2);
    assert_eq!(report.outcome_count(PageOutcome::NetworkError), 1);
    assert!(dir.path().join("Next.txt").exists());
}

#[tokio::test]
async fn test_same_titles_with_suffix_policy() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page("Wiki", "first", &[format!("{}/other", base_url)]),
    )
    .await;
    mount_page(&mock_server, "/other", page("Wiki!", "second", &[])).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, 15);
    config.output.on_collision = CollisionPolicy::Suffix;

    crawl(&config, &format!("{}/", base_url)).await.unwrap();

    // The seed is always visited first
    assert_eq!(
        std::fs::read_to_string(dir.path().join("Wiki.txt")).unwrap(),
        "first"
    );
    assert_eq!(
        std::fs::read_to_string(dir.path().join("Wiki-2.txt")).unwrap(),
        "second"
    );
}

#[tokio::test]
async fn test_markdown_report_written() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", page("Home", "text", &[])).await;

    let dir = TempDir::new().unwrap();
    let report_dir = TempDir::new().unwrap();
    let report_path = report_dir.path().join("report.md");
    let mut config = create_test_config(&dir, 15);
    config.output.summary_path = Some(report_path.to_string_lossy().into_owned());

    crawl(&config, &format!("{}/", mock_server.uri()))
        .await
        .unwrap();

    let markdown = std::fs::read_to_string(&report_path).unwrap();
    assert!(markdown.contains("## Visited URLs (1)"));
}

#[tokio::test]
async fn test_missing_output_directory_aborts_before_fetching() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut config = Config::default();
    config.output.directory = "/nonexistent/corpus/dir".to_string();

    let result = Coordinator::new(&config, &format!("{}/", mock_server.uri()));
    assert!(matches!(result, Err(HarvestError::Output(_))));
}

#[tokio::test]
async fn test_unwritable_summary_keeps_report() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", page("Home", "text", &[])).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir, 15);
    config.output.summary_path = Some("/nonexistent/dir/report.md".to_string());

    let report = crawl(&config, &format!("{}/", mock_server.uri()))
        .await
        .expect("A failed summary write must not fail the crawl");

    assert_eq!(report.visited.len(), 1);
    assert!(dir.path().join("Home.txt").exists());
}

#[tokio::test]
async fn test_overlong_title_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        page(
            "Seed",
            "seed text",
            &[format!("{}/long", base_url), format!("{}/b", base_url)],
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/long",
        page(&"Ж".repeat(150), "long title text", &[]),
    )
    .await;
    mount_page(&mock_server, "/b", page("B", "b text", &[])).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir, 15);

    let report = crawl(&config, &format!("{}/", base_url)).await.unwrap();

    assert_eq!(report.visited.len(), 3);
    assert_eq!(report.outcome_count(PageOutcome::Harvested), 3);
    assert!(dir.path().join("B.txt").exists());

    let long_file = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with('Ж'))
                .unwrap_or(false)
        })
        .expect("Truncated corpus file missing");
    assert_eq!(
        std::fs::read_to_string(long_file).unwrap(),
        "long title text"
    );
}
