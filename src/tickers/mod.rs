mod api;
mod model;

pub use model::TickerListing;

use crate::core::{Format, Response, TiingoClient, TiingoError};

/// Asset classes present in the supported-tickers listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetType {
    Stock,
    Etf,
    MutualFund,
}

impl AssetType {
    /// The value used in the listing's `assetType` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Etf => "ETF",
            Self::MutualFund => "Mutual Fund",
        }
    }
}

impl TiingoClient {
    /// Starts a request for the supported-tickers listing.
    pub fn list_tickers(&self) -> TickerListBuilder {
        TickerListBuilder::new(self)
    }

    /// Every listed stock.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be downloaded or parsed.
    pub async fn list_stock_tickers(&self) -> Result<Response<TickerListing>, TiingoError> {
        self.list_tickers().asset_type(AssetType::Stock).fetch().await
    }

    /// Every listed ETF.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be downloaded or parsed.
    pub async fn list_etf_tickers(&self) -> Result<Response<TickerListing>, TiingoError> {
        self.list_tickers().asset_type(AssetType::Etf).fetch().await
    }

    /// Every listed mutual fund.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing cannot be downloaded or parsed.
    pub async fn list_fund_tickers(&self) -> Result<Response<TickerListing>, TiingoError> {
        self.list_tickers()
            .asset_type(AssetType::MutualFund)
            .fetch()
            .await
    }
}

/// A builder for the supported-tickers listing, filtered client-side by asset type.
///
/// The listing is a public file and needs no API key.
pub struct TickerListBuilder {
    client: TiingoClient,
    asset_types: Vec<AssetType>,
    format: Format,
}

impl TickerListBuilder {
    pub fn new(client: &TiingoClient) -> Self {
        Self {
            client: client.clone(),
            asset_types: Vec::new(),
            format: Format::default(),
        }
    }

    /// Keeps rows of this asset type. May be called repeatedly; no call keeps every row.
    #[must_use]
    pub fn asset_type(mut self, asset_type: AssetType) -> Self {
        if !self.asset_types.contains(&asset_type) {
            self.asset_types.push(asset_type);
        }
        self
    }

    /// Selects the response shape. `Format::Csv` returns the filtered rows with their header.
    #[must_use]
    pub const fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Downloads and filters the listing.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Api` if the download is rejected, or a zip/CSV error if the
    /// listing cannot be read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<Response<TickerListing>, TiingoError> {
        let asset_types: Vec<&str> = self.asset_types.iter().map(|t| t.as_str()).collect();
        api::fetch_listing(&self.client, &asset_types, self.format).await
    }
}
