use chrono::{Datelike, NaiveDate};
use httpmock::{Method::GET, MockServer};
use std::collections::BTreeSet;
use tiingo_rs::{Format, PriceBar, Response};

fn fixture(endpoint: &str, ext: &str) -> String {
    crate::common::fixture(endpoint, "GOOGL", ext)
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[tokio::test]
async fn offline_latest_price_has_one_bar() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/daily/GOOGL/prices")
            .query_param("format", "json")
            .header("authorization", "Token test-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("ticker_price", "json"));
    });

    let client = crate::common::client_for(&server);
    let prices = client.ticker_price("GOOGL").fetch().await.unwrap();

    mock.assert();
    let records = prices.records().expect("json format yields records");
    assert_eq!(records.len(), 1);
    assert!(records[0].get("adjClose").and_then(|v| v.as_f64()).unwrap() > 0.0);
}

#[tokio::test]
async fn offline_price_range_returns_several_days() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/daily/GOOGL/prices")
            .query_param("startDate", "2015-01-01")
            .query_param("endDate", "2015-01-05");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("ticker_price_range", "json"));
    });

    let client = crate::common::client_for(&server);
    let prices = client
        .ticker_price("GOOGL")
        .between(d(2015, 1, 1), d(2015, 1, 5))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(prices.len() > 1);
}

#[tokio::test]
async fn offline_price_csv_is_returned_verbatim() {
    let server = MockServer::start();
    let body = fixture("ticker_price_range", "csv");
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/daily/GOOGL/prices")
            .query_param("format", "csv")
            .header("accept", "text/csv");
        then.status(200)
            .header("content-type", "text/csv")
            .body(body.clone());
    });

    let client = crate::common::client_for(&server);
    let prices = client
        .ticker_price("GOOGL")
        .between(d(2015, 1, 1), d(2015, 1, 5))
        .format(Format::Csv)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    let text = prices.csv().expect("csv format yields text");
    assert_eq!(text, body);

    let rows: Vec<Vec<&str>> = text.lines().map(|l| l.split(',').collect()).collect();
    assert!(rows.len() > 2, "header plus more than one day of data");
    assert_eq!(rows[0][0], "date");
    assert_eq!(prices.len(), 2);
}

#[tokio::test]
async fn offline_object_and_record_forms_agree() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/daily/GOOGL/prices")
            .query_param("format", "json");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("ticker_price_range", "json"));
    });

    let client = crate::common::client_for(&server);
    let records = client
        .ticker_price("GOOGL")
        .between(d(2015, 1, 1), d(2015, 1, 5))
        .fetch()
        .await
        .unwrap()
        .into_records()
        .unwrap();
    let bars: Vec<PriceBar> = client
        .ticker_price("GOOGL")
        .between(d(2015, 1, 1), d(2015, 1, 5))
        .format(Format::Object)
        .fetch()
        .await
        .unwrap()
        .into_objects()
        .unwrap();

    mock.assert_calls(2);
    assert_eq!(records.len(), bars.len());

    for (rec, bar) in records.iter().zip(&bars) {
        assert_eq!(rec["adjClose"].as_f64(), Some(bar.adj_close));
        assert_eq!(rec["close"].as_f64(), Some(bar.close));
        assert_eq!(rec["volume"].as_f64().map(|v| v as u64), bar.volume);
        assert!(rec["date"].as_str().unwrap().starts_with(&bar.date.date_naive().to_string()));

        let obj = serde_json::to_value(bar).unwrap();
        let obj_keys: BTreeSet<&String> = obj.as_object().unwrap().keys().collect();
        let rec_keys: BTreeSet<&String> = rec.keys().collect();
        assert_eq!(obj_keys, rec_keys);
    }

    // The second bar carries its adjusted volume as a float.
    assert_eq!(bars[1].adj_volume, Some(2_059_840));
    assert_eq!(bars[0].date.year(), 2015);
}

#[tokio::test]
async fn offline_empty_range_decodes_to_empty_sequence() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tiingo/daily/GOOGL/prices");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = crate::common::client_for(&server);
    for fmt in [Format::Json, Format::Object] {
        let prices = client
            .ticker_price("GOOGL")
            .between(d(2015, 1, 3), d(2015, 1, 4))
            .format(fmt)
            .fetch()
            .await
            .unwrap();
        assert!(prices.is_empty());
        match prices {
            Response::Records(r) => assert!(r.is_empty()),
            Response::Objects(o) => assert!(o.is_empty()),
            Response::Csv(_) => panic!("unexpected csv"),
        }
    }
}
