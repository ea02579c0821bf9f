mod api;
mod model;

pub use model::{BulkNewsFile, NewsArticle};

use chrono::NaiveDate;

use crate::core::{Format, Response, TiingoClient, TiingoError};

/// Ordering of news results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Newest publication first.
    #[default]
    PublishedDate,
    /// Most recently crawled first.
    CrawlDate,
}

impl SortBy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PublishedDate => "publishedDate",
            Self::CrawlDate => "crawlDate",
        }
    }
}

impl TiingoClient {
    /// Starts a news search. With no filters this returns the latest articles.
    pub fn news(&self) -> NewsBuilder {
        NewsBuilder::new(self)
    }

    /// Starts a bulk news request. Requires an institutional license.
    pub fn bulk_news(&self) -> BulkNewsBuilder {
        BulkNewsBuilder::new(self)
    }

    /// Lists the bulk news batches available for download. Requires an institutional license.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Api` with `ErrorKind::Forbidden` when the key is not licensed.
    pub async fn bulk_news_files(&self) -> Result<Response<BulkNewsFile>, TiingoError> {
        self.bulk_news().fetch().await
    }
}

/// A builder for searching news articles.
pub struct NewsBuilder {
    client: TiingoClient,
    tickers: Vec<String>,
    tags: Vec<String>,
    sources: Vec<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    limit: u32,
    offset: u32,
    sort_by: SortBy,
    format: Format,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with Tiingo's defaults (100 articles, newest first).
    pub fn new(client: &TiingoClient) -> Self {
        Self {
            client: client.clone(),
            tickers: Vec::new(),
            tags: Vec::new(),
            sources: Vec::new(),
            start_date: None,
            end_date: None,
            limit: 100,
            offset: 0,
            sort_by: SortBy::default(),
            format: Format::default(),
        }
    }

    /// Restricts results to articles about any of these tickers.
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers.extend(tickers.into_iter().map(Into::into));
        self
    }

    /// Restricts results to articles carrying any of these tags (e.g. `Technology`).
    #[must_use]
    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Restricts results to these publisher domains.
    #[must_use]
    pub fn sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources.extend(sources.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Maximum number of articles to return. Default: 100.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Number of articles to skip. Default: 0.
    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub const fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Selects the response shape. `Format::Csv` is rejected.
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Executes the search.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::UnsupportedFormat` for CSV, `TiingoError::InvalidDates` for an
    /// inverted range, `TiingoError::Api` if Tiingo rejects the request, or a
    /// transport/decoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(limit = self.limit)))]
    pub async fn fetch(self) -> Result<Response<NewsArticle>, TiingoError> {
        api::fetch_news(&self).await
    }
}

/// A builder for the license-gated bulk news endpoints.
///
/// Without a file id it lists available batches; with one it fetches that batch.
pub struct BulkNewsBuilder {
    client: TiingoClient,
    file_id: Option<String>,
    format: Format,
}

impl BulkNewsBuilder {
    pub fn new(client: &TiingoClient) -> Self {
        Self {
            client: client.clone(),
            file_id: None,
            format: Format::default(),
        }
    }

    /// Selects a single batch by id.
    #[must_use]
    pub fn file_id(mut self, id: impl Into<String>) -> Self {
        self.file_id = Some(id.into());
        self
    }

    /// Selects the response shape. `Format::Csv` is rejected.
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Api` with `ErrorKind::Forbidden` when the key lacks the
    /// institutional license, in every format.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(file_id = ?self.file_id)))]
    pub async fn fetch(self) -> Result<Response<BulkNewsFile>, TiingoError> {
        api::fetch_bulk(&self.client, self.file_id.as_deref(), self.format).await
    }
}
