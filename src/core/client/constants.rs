//! Centralized constants for default endpoints, UA and environment.

/// Default UA identifying this client.
pub(crate) const USER_AGENT: &str = concat!("tiingo-rs/", env!("CARGO_PKG_VERSION"));

/// Tiingo REST API base. Shown verbatim in the client's string representation.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.tiingo.com";

/// Zip archive listing every ticker Tiingo carries (one CSV inside).
pub(crate) const DEFAULT_LISTING_URL: &str =
    "https://apimedia.tiingo.com/docs/tiingo/daily/supported_tickers.zip";

/// Environment variable consulted when no API key is given to the builder.
pub const API_KEY_ENV: &str = "TIINGO_API_KEY";
