use chrono::NaiveDate;
use tiingo_rs::{Format, TiingoClient};

#[tokio::test]
#[ignore]
async fn live_price_range_json_and_object_agree() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = TiingoClient::builder().build().unwrap();
    let start = NaiveDate::from_ymd_opt(2015, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2015, 1, 5).unwrap();

    let json = client.ticker_price("GOOGL").between(start, end).fetch().await.unwrap();
    let objects = client
        .ticker_price("GOOGL")
        .between(start, end)
        .format(Format::Object)
        .fetch()
        .await
        .unwrap();

    assert!(json.len() > 1);
    assert_eq!(json.len(), objects.len());
}
