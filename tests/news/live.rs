use tiingo_rs::{ErrorKind, TiingoClient};

#[tokio::test]
#[ignore]
async fn live_news_limit_is_honored() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = TiingoClient::builder().build().unwrap();
    let articles = client.news().tickers(["aapl"]).limit(1).fetch().await.unwrap();
    assert_eq!(articles.len(), 1);
}

#[tokio::test]
#[ignore]
async fn live_bulk_news_without_license_is_forbidden() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = TiingoClient::builder().build().unwrap();
    let err = client.bulk_news_files().await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Forbidden), "got {err:?}");
}
