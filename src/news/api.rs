use crate::{
    core::{Response, TiingoClient, TiingoError, wire::fmt_date},
    news::{BulkNewsFile, NewsArticle, NewsBuilder},
};

const NEWS: &str = "news";
const NEWS_BULK: &str = "news_bulk";
const NEWS_BULK_FILES: &str = "news_bulk_files";

pub(super) async fn fetch_news(q: &NewsBuilder) -> Result<Response<NewsArticle>, TiingoError> {
    TiingoClient::ensure_json_only(NEWS, q.format)?;
    if let (Some(s), Some(e)) = (q.start_date, q.end_date)
        && s > e
    {
        return Err(TiingoError::InvalidDates);
    }

    let mut url = q.client.endpoint_url(&["tiingo", "news"])?;
    {
        let mut qp = url.query_pairs_mut();
        if !q.tickers.is_empty() {
            qp.append_pair("tickers", &q.tickers.join(","));
        }
        if !q.tags.is_empty() {
            qp.append_pair("tags", &q.tags.join(","));
        }
        if !q.sources.is_empty() {
            qp.append_pair("source", &q.sources.join(","));
        }
        if let Some(d) = q.start_date {
            qp.append_pair("startDate", &fmt_date(d));
        }
        if let Some(d) = q.end_date {
            qp.append_pair("endDate", &fmt_date(d));
        }
        qp.append_pair("limit", &q.limit.to_string());
        qp.append_pair("offset", &q.offset.to_string());
        qp.append_pair("sortBy", q.sort_by.as_str());
    }

    let key = if q.tickers.is_empty() {
        "all".to_string()
    } else {
        q.tickers.join("-")
    };
    let req = q.client.api_request(NEWS, key, url, q.format)?;
    q.client.execute(req, q.format).await
}

/// Without a file id this lists the available batches; with one it describes that batch.
pub(super) async fn fetch_bulk(
    client: &TiingoClient,
    file_id: Option<&str>,
    format: crate::core::Format,
) -> Result<Response<BulkNewsFile>, TiingoError> {
    let endpoint = if file_id.is_some() { NEWS_BULK } else { NEWS_BULK_FILES };
    TiingoClient::ensure_json_only(endpoint, format)?;

    let url = match file_id {
        Some(id) => client.endpoint_url(&["tiingo", "news", "bulk_download", id])?,
        None => client.endpoint_url(&["tiingo", "news", "bulk_download"])?,
    };
    let req = client.api_request(endpoint, file_id.unwrap_or("all"), url, format)?;
    client.execute(req, format).await
}
