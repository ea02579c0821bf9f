mod model;

pub use model::TickerMetadata;

use crate::core::{Format, Response, TiingoClient, TiingoError};

const ENDPOINT: &str = "ticker_metadata";

impl TiingoClient {
    /// Starts a metadata request for `ticker` (name, exchange, description, data range).
    pub fn ticker_metadata(&self, ticker: impl Into<String>) -> MetadataBuilder {
        MetadataBuilder::new(self, ticker)
    }
}

/// A builder for the metadata of a single ticker.
///
/// The endpoint answers with one JSON object, decoded as a one-element response.
pub struct MetadataBuilder {
    client: TiingoClient,
    ticker: String,
    format: Format,
}

impl MetadataBuilder {
    pub fn new(client: &TiingoClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            format: Format::default(),
        }
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
    /// Returns `TiingoError::UnsupportedFormat` for CSV, `TiingoError::Api` if Tiingo rejects
    /// the request, or a transport/decoding error.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(ticker = %self.ticker)))]
    pub async fn fetch(self) -> Result<Response<TickerMetadata>, TiingoError> {
        TiingoClient::ensure_json_only(ENDPOINT, self.format)?;
        let url = self.client.endpoint_url(&["tiingo", "daily", &self.ticker])?;
        let req = self
            .client
            .api_request(ENDPOINT, self.ticker.as_str(), url, self.format)?;
        self.client.execute(req, self.format).await
    }
}
