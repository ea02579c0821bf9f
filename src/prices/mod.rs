mod api;
mod model;

pub use model::PriceBar;

use chrono::NaiveDate;

use crate::core::{Format, Response, TiingoClient, TiingoError};

/// Bar size requested through `resampleFreq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Annually,
}

impl Frequency {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Annually => "annually",
        }
    }
}

impl TiingoClient {
    /// Starts an end-of-day price request for `ticker`.
    ///
    /// Without a date range Tiingo returns only the latest bar.
    pub fn ticker_price(&self, ticker: impl Into<String>) -> PriceBuilder {
        PriceBuilder::new(self, ticker)
    }
}

/// A builder for end-of-day prices of a single ticker.
pub struct PriceBuilder {
    client: TiingoClient,
    ticker: String,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    frequency: Frequency,
    format: Format,
}

impl PriceBuilder {
    /// Creates a new `PriceBuilder` for a given ticker.
    pub fn new(client: &TiingoClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            start_date: None,
            end_date: None,
            frequency: Frequency::default(),
            format: Format::default(),
        }
    }

    /// First session to include.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Last session to include.
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets both ends of the date range.
    #[must_use]
    pub const fn between(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date(start).end_date(end)
    }

    /// Resamples bars to a coarser frequency. Default: daily.
    #[must_use]
    pub const fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Selects the response shape. All three formats are supported.
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Executes the request.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::InvalidDates` if the start date is after the end date,
    /// `TiingoError::Api` if Tiingo rejects the request (e.g. `NotFound` for an unknown
    /// ticker), or a transport/decoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(ticker = %self.ticker)))]
    pub async fn fetch(self) -> Result<Response<PriceBar>, TiingoError> {
        api::fetch_prices(
            &self.client,
            &self.ticker,
            self.start_date,
            self.end_date,
            self.frequency,
            self.format,
        )
        .await
    }
}
