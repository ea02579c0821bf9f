use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{
    Record,
    wire::{de_null_default, de_opt_date, de_opt_string, de_u64_from_any_number},
};

/// A news article from `tiingo/news`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: u64,
    #[serde(default, deserialize_with = "de_null_default")]
    pub title: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub url: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub description: String,
    /// When the publisher released the article.
    pub published_date: DateTime<Utc>,
    /// When Tiingo picked the article up.
    pub crawl_date: DateTime<Utc>,
    /// Publisher domain, e.g. `washingtonpost.com`.
    #[serde(default, deserialize_with = "de_null_default")]
    pub source: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub tags: Vec<String>,
    /// Lowercase ticker symbols the article is about.
    #[serde(default, deserialize_with = "de_null_default")]
    pub tickers: Vec<String>,
    #[serde(flatten)]
    pub extra: Record,
}

/// One downloadable batch from `tiingo/news/bulk_download`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkNewsFile {
    pub id: u64,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub filename: Option<String>,
    /// `base` for the historical archive, `incremental` for daily updates.
    #[serde(default, deserialize_with = "de_opt_string")]
    pub batch_type: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    pub file_size_compressed: Option<u64>,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    pub file_size_uncompressed: Option<u64>,
    #[serde(flatten)]
    pub extra: Record,
}
