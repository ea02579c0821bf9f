//! tiingo-rs: async client for the Tiingo financial data API.
//!
//! Every endpoint is reached through a builder on [`TiingoClient`] and returns a
//! [`Response`], whose shape follows the requested [`Format`]:
//!
//! - [`Format::Json`] (default): raw field mappings with the API's own key names.
//! - [`Format::Object`]: typed value-objects such as [`PriceBar`] or [`NewsArticle`].
//! - [`Format::Csv`]: unmodified CSV text, where the endpoint can produce it.
//!
//! Non-2xx answers become [`TiingoError::Api`] classified by [`ErrorKind`].
//!
//! ```no_run
//! # use tiingo_rs::{Format, TiingoClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TiingoClient::builder().api_key("my-key").build()?;
//! let bars = client.ticker_price("GOOGL").format(Format::Object).fetch().await?;
//! for bar in bars.objects().unwrap_or_default() {
//!     println!("{} {}", bar.date, bar.adj_close);
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod metadata;
pub mod news;
pub mod prices;
pub mod tickers;

pub use crate::core::{
    API_KEY_ENV, ApiRequest, ErrorKind, Format, HttpTransport, RawResponse, Record, Response,
    TiingoClient, TiingoClientBuilder, TiingoError, Transport,
};
pub use metadata::{MetadataBuilder, TickerMetadata};
pub use news::{BulkNewsBuilder, BulkNewsFile, NewsArticle, NewsBuilder, SortBy};
pub use prices::{Frequency, PriceBar, PriceBuilder};
pub use tickers::{AssetType, TickerListBuilder, TickerListing};
