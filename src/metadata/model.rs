use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    Record,
    wire::{de_opt_date, de_opt_string},
};

/// Descriptive data for a ticker from `tiingo/daily/{ticker}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerMetadata {
    pub ticker: String,
    pub name: String,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub exchange_code: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub description: Option<String>,
    /// First date with price data.
    #[serde(default, deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,
    /// Last date with price data.
    #[serde(default, deserialize_with = "de_opt_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Record,
}
