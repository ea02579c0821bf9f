use std::sync::Arc;
use std::time::Duration;
use tiingo_rs::{ErrorKind, TiingoClient, TiingoError};
use url::Url;

use crate::common::{FixtureTransport, offline_client};

#[tokio::test]
async fn connection_failure_is_not_reclassified() {
    let client = TiingoClient::builder()
        .api_key("test-key")
        .env_api_key(false)
        .base_url(Url::parse("http://127.0.0.1:1").unwrap())
        .connect_timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let err = client.ticker_price("GOOGL").fetch().await.unwrap_err();
    assert!(matches!(err, TiingoError::Http(_)), "got {err:?}");
    assert_eq!(err.kind(), None);
}

#[tokio::test]
async fn missing_key_short_circuits_without_a_request() {
    let transport = Arc::new(FixtureTransport::new().route("ticker_price", 200, "[]"));
    let client = offline_client(transport.clone(), false);
    assert!(!client.has_api_key());

    let err = client.ticker_price("GOOGL").fetch().await.unwrap_err();
    assert!(matches!(err, TiingoError::MissingApiKey), "got {err:?}");
    assert_eq!(err.kind(), Some(ErrorKind::Auth));

    let err = client.bulk_news_files().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Auth));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn blank_key_counts_as_missing() {
    let transport = Arc::new(FixtureTransport::new());
    let client = TiingoClient::builder()
        .api_key("   ")
        .env_api_key(false)
        .transport(transport)
        .build()
        .unwrap();
    assert!(!client.has_api_key());
}
