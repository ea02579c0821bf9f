use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Record, wire::de_u64_from_any_number};

/// One end-of-day bar from `tiingo/daily/{ticker}/prices`.
///
/// Field names serialize back to the API's camelCase keys, so a `PriceBar` and the
/// matching [`Record`] describe the same fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBar {
    /// Session date (midnight UTC).
    pub date: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    pub volume: Option<u64>,
    /// Prices adjusted for splits and dividends.
    pub adj_open: f64,
    pub adj_high: f64,
    pub adj_low: f64,
    pub adj_close: f64,
    #[serde(default, deserialize_with = "de_u64_from_any_number")]
    pub adj_volume: Option<u64>,
    /// Cash dividend paid on this date, if any.
    #[serde(default)]
    pub div_cash: Option<f64>,
    /// Split ratio effective on this date (`1.0` when none).
    #[serde(default)]
    pub split_factor: Option<f64>,
    /// Fields not modeled above, kept verbatim.
    #[serde(flatten)]
    pub extra: Record,
}
