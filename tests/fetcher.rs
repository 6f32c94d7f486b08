use std::time::Duration;

use headline_scraper::config::DEFAULT_USER_AGENT;
use headline_scraper::{FetchConfig, FetchError, Fetcher};
use reqwest::StatusCode;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn sends_browser_user_agent_and_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/news"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>hi</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
    let body = fetcher
        .fetch(&format!("{}/news", server.uri()))
        .await
        .unwrap();

    assert_eq!(body, "<h1>hi</h1>");
}

#[tokio::test]
async fn error_status_is_a_fetch_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1><a href='/x'>x</a></h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    assert!(err.to_string().contains("404"));
}

#[tokio::test]
async fn server_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::BadStatus { status, .. } if status == StatusCode::SERVICE_UNAVAILABLE));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let config = FetchConfig::default().with_timeout(Duration::from_millis(200));
    let fetcher = Fetcher::new(config).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }), "{err:?}");
}

#[tokio::test]
async fn refused_connection_is_reported() {
    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
    let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, FetchError::ConnectionFailed { .. }), "{err:?}");
}

#[tokio::test]
async fn malformed_url_is_a_request_error() {
    let fetcher = Fetcher::new(FetchConfig::default()).unwrap();
    let err = fetcher.fetch("not a url").await.unwrap_err();

    assert!(matches!(err, FetchError::Request { .. }), "{err:?}");
}
