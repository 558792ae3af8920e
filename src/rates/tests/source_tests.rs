use tokio::task;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::fixtures::{document, rate_row, reference_document};
use crate::rates::{RateError, RateProvider, RateSource, ScrapeError};

/// Helper: serves one document at /exchange-rates.
async fn serve(body: String) -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    server
}

/// Helper: runs the blocking constructor off the async test runtime.
async fn connect(url: String) -> Result<RateSource, RateError> {
    task::spawn_blocking(move || RateSource::with_url(&url))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_construction_loads_table() {
    let server = serve(reference_document()).await;
    let source = connect(format!("{}/exchange-rates", server.uri()))
        .await
        .unwrap();

    assert_eq!(source.names(), vec!["USD", "MXN", "COL"]);
    assert_eq!(source.rate("MXN"), Some(17.5));
    assert_eq!(source.table().len(), 3);
}

#[tokio::test]
async fn test_names_match_table_keys() {
    let server = serve(reference_document()).await;
    let source = connect(format!("{}/exchange-rates", server.uri()))
        .await
        .unwrap();

    let table = source.table();
    for code in source.names() {
        assert!(table.rates().contains_key(&code));
    }
}

#[tokio::test]
async fn test_http_error_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = connect(format!("{}/exchange-rates", server.uri()))
        .await
        .unwrap_err();

    assert!(matches!(err, RateError::Fetch(_)), "got: {err}");
}

#[tokio::test]
async fn test_unreachable_host_is_a_fetch_error() {
    // Port 1 is never listening locally.
    let err = connect("http://127.0.0.1:1/exchange-rates".to_string())
        .await
        .unwrap_err();

    assert!(matches!(err, RateError::Fetch(_)));
}

#[tokio::test]
async fn test_reshaped_page_is_a_scrape_error() {
    let server = serve("<html><body><h1>We moved!</h1></body></html>".to_string()).await;

    let err = connect(format!("{}/exchange-rates", server.uri()))
        .await
        .unwrap_err();

    assert!(
        matches!(err, RateError::Scrape(ScrapeError::TableMissing)),
        "got: {err}"
    );
}

#[tokio::test]
async fn test_reload_replaces_whole_table() {
    let server = MockServer::start().await;

    // First load: two currencies. Later loads: three.
    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(document(
            &[rate_row("USD", "1.0"), rate_row("MXN", "17.5")].concat(),
        )))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reference_document()))
        .mount(&server)
        .await;

    let url = format!("{}/exchange-rates", server.uri());
    let source = connect(url).await.unwrap();
    assert_eq!(source.names(), vec!["USD", "MXN"]);

    let (count, names) = task::spawn_blocking(move || {
        let count = source.reload()?;
        Ok::<_, RateError>((count, source.names()))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(count, 3);
    assert_eq!(names, vec!["USD", "MXN", "COL"]);
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(reference_document()))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/exchange-rates"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            document(&rate_row("USD", "not-a-number")),
        ))
        .mount(&server)
        .await;

    let url = format!("{}/exchange-rates", server.uri());
    let source = connect(url).await.unwrap();

    let (reload_result, names, rate) = task::spawn_blocking(move || {
        let result = source.reload();
        (result, source.names(), source.rate("MXN"))
    })
    .await
    .unwrap();

    assert!(reload_result.is_err(), "reload of a bad page must fail");
    assert_eq!(
        names,
        vec!["USD", "MXN", "COL"],
        "failed reload must leave the old table fully intact"
    );
    assert_eq!(rate, Some(17.5));
}
