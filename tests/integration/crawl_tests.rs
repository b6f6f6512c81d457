//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run full crawls
//! end-to-end, checking both the dead link report on disk and how many times
//! each URL was requested.

use deadlink_crawler::config::{Config, OutputConfig, SiteConfig};
use deadlink_crawler::crawler::crawl;
use deadlink_crawler::output::DeadLinkReporter;
use deadlink_crawler::state::VisitOutcome;
use deadlink_crawler::Crawler;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration rooted at the mock server
fn create_test_config(server: &MockServer, dir: &TempDir) -> Config {
    let domain = format!("{}/", server.uri());

    Config {
        site: SiteConfig {
            home_url: Some(format!("{}index.html", domain)),
            domain,
            ..SiteConfig::default()
        },
        output: OutputConfig {
            report_path: dir.path().join("dead_links.txt").display().to_string(),
            log_path: dir.path().join("error_log.txt").display().to_string(),
        },
        ..Config::default()
    }
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!(
            "<!DOCTYPE html><html><head><title>t</title></head><body>{}</body></html>",
            body
        ))
        .insert_header("content-type", "text/html")
}

/// Mounts an HTML page; internal pages are requested twice (status, then body)
async fn mount_page(server: &MockServer, at: &str, body: &str, times: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(html_page(body))
        .expect(times)
        .mount(server)
        .await;
}

async fn mount_status(server: &MockServer, at: &str, status: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path(at))
        .respond_with(ResponseTemplate::new(status))
        .expect(times)
        .mount(server)
        .await;
}

fn read_report(dir: &TempDir) -> Option<String> {
    std::fs::read_to_string(dir.path().join("dead_links.txt")).ok()
}

#[tokio::test]
async fn test_dead_link_reported_once_with_referrer() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/index.html",
        &format!(
            r#"<a href="{}/missing">gone</a>
               <a href="page2.html">Page 2</a>
               <a href="/missing">gone again</a>"#,
            base
        ),
        2,
    )
    .await;
    mount_page(&server, "/page2.html", r#"<a href="missing">still gone</a>"#, 2).await;
    mount_status(&server, "/missing", 404, 1).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        read_report(&dir).expect("report file should exist"),
        format!(
            "dead link {}/missing found at: {}/index.html\n",
            base, base
        )
    );
    assert_eq!(stats.dead_links, 1);
    assert_eq!(stats.pages_crawled, 2);
}

#[tokio::test]
async fn test_cycle_terminates() {
    let server = MockServer::start().await;

    mount_page(&server, "/index.html", r#"<a href="other.html">other</a>"#, 2).await;
    mount_page(&server, "/other.html", r#"<a href="index.html">home</a>"#, 2).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let mut crawler = Crawler::from_config(&config).unwrap();
    let stats = crawler.run().await.clone();

    assert_eq!(stats.pages_crawled, 2);
    assert_eq!(stats.already_visited, 1);
    assert_eq!(crawler.visited().len(), 2);
    assert!(crawler.dead_links().is_empty());
    assert!(read_report(&dir).is_none());
}

#[tokio::test]
async fn test_self_link_terminates() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/index.html",
        r#"<a href="index.html">me</a><a href="./index.html">me again</a>"#,
        2,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.pages_crawled, 1);
    assert_eq!(stats.already_visited, 1);
}

#[tokio::test]
async fn test_placeholder_host_never_fetched() {
    let server = MockServer::start().await;
    let placeholder = MockServer::start().await;
    let placeholder_host = placeholder.address().to_string();

    mount_page(
        &server,
        "/index.html",
        &format!(r#"<a href="{}/setup">example</a>"#, placeholder.uri()),
        2,
    )
    .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&placeholder)
        .await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server, &dir);
    config.site.placeholder_hosts = vec![placeholder_host];
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.fake, 1);
    assert_eq!(stats.dead_links, 0);
    assert!(read_report(&dir).is_none());
}

#[tokio::test]
async fn test_external_links_checked_but_not_crawled() {
    let server = MockServer::start().await;
    let external = MockServer::start().await;

    mount_page(
        &server,
        "/index.html",
        &format!(
            r#"<a href="{}/landing">partner</a><a href="{}/gone">old partner</a>"#,
            external.uri(),
            external.uri()
        ),
        2,
    )
    .await;
    mount_page(&external, "/landing", r#"<a href="deeper">deeper</a>"#, 1).await;
    mount_status(&external, "/deeper", 200, 0).await;
    mount_status(&external, "/gone", 404, 1).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.external_checked, 1);
    assert_eq!(stats.pages_crawled, 1);
    assert_eq!(
        read_report(&dir).unwrap(),
        format!(
            "dead link {}/gone found at: {}/index.html\n",
            external.uri(),
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_other_error_statuses_not_reported_or_crawled() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/index.html",
        r#"<a href="broken.html">broken</a><a href="busy.html">busy</a>"#,
        2,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken.html"))
        .respond_with(ResponseTemplate::new(500).set_body_string(r#"<a href="child.html">c</a>"#))
        .mount(&server)
        .await;
    mount_status(&server, "/busy.html", 503, 2).await;
    mount_status(&server, "/child.html", 200, 0).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.error_status, 2);
    assert_eq!(stats.dead_links, 0);
    assert!(read_report(&dir).is_none());
}

#[tokio::test]
async fn test_excluded_subtree_checked_but_not_crawled() {
    let server = MockServer::start().await;

    mount_page(&server, "/index.html", r#"<a href="cgit/repo/">repo</a>"#, 2).await;
    mount_page(&server, "/cgit/repo/", r#"<a href="tree">tree</a>"#, 1).await;
    mount_status(&server, "/cgit/repo/tree", 404, 0).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.pages_crawled, 1);
    assert_eq!(stats.external_checked, 1);
    assert!(read_report(&dir).is_none());
}

#[tokio::test]
async fn test_unreachable_link_not_reported() {
    let server = MockServer::start().await;

    mount_page(
        &server,
        "/index.html",
        r#"<a href="http://127.0.0.1:1/nothing-listens-here">down</a>"#,
        2,
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let stats = crawl(&config).await.unwrap();

    assert_eq!(stats.unreachable, 1);
    assert_eq!(stats.dead_links, 0);
    assert!(read_report(&dir).is_none());
}

#[tokio::test]
async fn test_relative_links_resolved_against_page_url() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(&server, "/index.html", r#"<a href="docs/guide.html">guide</a>"#, 2).await;
    mount_page(&server, "/docs/guide.html", r#"<a href="next.html">next</a>"#, 2).await;
    mount_status(&server, "/docs/next.html", 404, 1).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    crawl(&config).await.unwrap();

    assert_eq!(
        read_report(&dir).unwrap(),
        format!(
            "dead link {}/docs/next.html found at: {}/docs/guide.html\n",
            base, base
        )
    );
}

#[tokio::test]
async fn test_report_accumulates_in_discovery_order() {
    let server = MockServer::start().await;
    let base = server.uri();

    mount_page(
        &server,
        "/index.html",
        r#"<a href="section.html">section</a><a href="gone-b">b</a>"#,
        2,
    )
    .await;
    mount_page(&server, "/section.html", r#"<a href="gone-a">a</a>"#, 2).await;
    mount_status(&server, "/gone-a", 404, 1).await;
    mount_status(&server, "/gone-b", 404, 1).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let mut crawler = Crawler::from_config(&config).unwrap();
    crawler.run().await;

    let expected = [
        format!("dead link {}/gone-a found at: {}/section.html", base, base),
        format!("dead link {}/gone-b found at: {}/index.html", base, base),
    ];
    assert_eq!(crawler.reporter().dead_links(), &expected);
    assert_eq!(
        read_report(&dir).unwrap(),
        format!("{}\n{}\n", expected[0], expected[1])
    );
}

#[tokio::test]
async fn test_missing_home_page_is_dead() {
    let server = MockServer::start().await;
    let base = server.uri();
    mount_status(&server, "/index.html", 404, 1).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, &dir);
    let mut crawler = Crawler::from_config(&config).unwrap();
    let home = crawler.home_url().to_string();

    assert_eq!(crawler.visit(&home, &home).await, VisitOutcome::Dead);
    assert_eq!(
        crawler.dead_links(),
        &[format!(
            "dead link {}/index.html found at: {}/index.html",
            base, base
        )]
    );
}
