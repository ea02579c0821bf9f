use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::{
    Record,
    wire::{de_opt_date, de_opt_string},
};

/// One row of Tiingo's supported-tickers listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerListing {
    pub ticker: String,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub exchange: Option<String>,
    /// `Stock`, `ETF` or `Mutual Fund`.
    pub asset_type: String,
    #[serde(default, deserialize_with = "de_opt_string")]
    pub price_currency: Option<String>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "de_opt_date")]
    pub end_date: Option<NaiveDate>,
    #[serde(flatten)]
    pub extra: Record,
}
