use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use tiingo_rs::{Format, SortBy, TiingoError};

const ARTICLE_KEYS: [&str; 9] = [
    "description",
    "title",
    "url",
    "publishedDate",
    "tags",
    "source",
    "tickers",
    "crawlDate",
    "id",
];

fn fixture() -> String {
    crate::common::fixture("news", "aapl-googl", "json")
}

#[tokio::test]
async fn offline_news_search_builds_query_and_respects_limit() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/news")
            .query_param("tickers", "aapl,googl")
            .query_param("tags", "Technology,Bitcoin")
            .query_param("source", "washingtonpost.com,altcointoday.com")
            .query_param("startDate", "2016-01-01")
            .query_param("endDate", "2017-08-31")
            .query_param("limit", "1")
            .query_param("offset", "0")
            .query_param("sortBy", "publishedDate");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture());
    });

    let client = crate::common::client_for(&server);
    let articles = client
        .news()
        .tickers(["aapl", "googl"])
        .tags(["Technology", "Bitcoin"])
        .sources(["washingtonpost.com", "altcointoday.com"])
        .start_date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2017, 8, 31).unwrap())
        .limit(1)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    let records = articles.records().unwrap();
    assert_eq!(records.len(), 1);
    for article in records {
        for key in ARTICLE_KEYS {
            assert!(article.contains_key(key), "article missing {key}");
        }
    }
}

#[tokio::test]
async fn offline_news_as_objects() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/news")
            .query_param("limit", "100")
            .query_param("sortBy", "crawlDate");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture());
    });

    let client = crate::common::client_for(&server);
    let articles = client
        .news()
        .sort_by(SortBy::CrawlDate)
        .format(Format::Object)
        .fetch()
        .await
        .unwrap()
        .into_objects()
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 1);
    let a = &articles[0];
    assert_eq!(a.id, 4_929_491);
    assert_eq!(a.source, "washingtonpost.com");
    assert_eq!(a.tickers, vec!["aapl", "googl"]);
    assert!(a.tags.iter().any(|t| t == "Technology"));
    assert!(a.crawl_date > a.published_date);
}

#[tokio::test]
async fn offline_news_without_filters_omits_them() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/tiingo/news")
            .query_param_missing("tickers")
            .query_param_missing("tags")
            .query_param_missing("source")
            .query_param_missing("startDate");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let client = crate::common::client_for(&server);
    let articles = client.news().fetch().await.unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn offline_news_rejects_csv_and_inverted_dates() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/tiingo/news");
        then.status(200).body(fixture());
    });
    let client = crate::common::client_for(&server);

    let err = client.news().format(Format::Csv).fetch().await.unwrap_err();
    assert!(matches!(err, TiingoError::UnsupportedFormat { endpoint: "news", .. }), "got {err:?}");

    let err = client
        .news()
        .start_date(NaiveDate::from_ymd_opt(2017, 8, 31).unwrap())
        .end_date(NaiveDate::from_ymd_opt(2016, 1, 1).unwrap())
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, TiingoError::InvalidDates), "got {err:?}");

    mock.assert_calls(0);
}

#[tokio::test]
async fn offline_news_null_fields_keep_object_and_record_forms_aligned() {
    let body = r#"[
      {"id": 1, "title": "Quarterly results", "url": "https://example.com/a",
       "description": null, "publishedDate": "2024-05-01T12:00:00Z",
       "crawlDate": "2024-05-01T12:05:00Z", "source": null, "tags": null, "tickers": ["aapl"]},
      {"id": 2, "title": null, "url": "https://example.com/b",
       "description": "Guidance raised", "publishedDate": "2024-05-02T12:00:00Z",
       "crawlDate": "2024-05-02T12:05:00Z", "source": "example.com", "tags": [], "tickers": null}
    ]"#;
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/tiingo/news");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    });

    let client = crate::common::client_for(&server);
    let records = client.news().fetch().await.unwrap().into_records().unwrap();
    let articles = client
        .news()
        .format(Format::Object)
        .fetch()
        .await
        .unwrap()
        .into_objects()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(articles.len(), records.len());
    for (rec, obj) in records.iter().zip(&articles) {
        assert_eq!(rec["id"], obj.id);
        let serialized = serde_json::to_value(obj).unwrap();
        let mut obj_keys: Vec<&String> = serialized.as_object().unwrap().keys().collect();
        let mut rec_keys: Vec<&String> = rec.keys().collect();
        obj_keys.sort();
        rec_keys.sort();
        assert_eq!(obj_keys, rec_keys);
    }

    assert_eq!(articles[0].description, "");
    assert_eq!(articles[0].source, "");
    assert!(articles[0].tags.is_empty());
    assert_eq!(articles[1].title, "");
    assert!(articles[1].tickers.is_empty());
}
