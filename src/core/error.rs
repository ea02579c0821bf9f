use thiserror::Error;

/// Classification of an unsuccessful answer from the Tiingo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The API key is missing or was rejected (HTTP 401).
    Auth,
    /// The ticker or resource does not exist (HTTP 404).
    NotFound,
    /// The key is valid but the account is not licensed for this endpoint (HTTP 403).
    ///
    /// The bulk news endpoints answer this way for keys without an institutional license.
    Forbidden,
    /// The server failed to handle the request (HTTP 5xx).
    Server,
    /// Any other rejected request, e.g. a malformed parameter (remaining 4xx codes).
    Client,
}

impl ErrorKind {
    /// Maps a non-2xx HTTP status code to its kind.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        match status {
            401 => Self::Auth,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            500..=599 => Self::Server,
            _ => Self::Client,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::NotFound => "not found",
            Self::Forbidden => "forbidden",
            Self::Server => "server",
            Self::Client => "client",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum TiingoError {
    /// An error occurred during an HTTP request. Network failures are never reclassified.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The API key or user agent cannot be sent as an HTTP header value.
    #[error("Invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The body of a successful response was not valid JSON.
    #[error("JSON decoding error at {endpoint}: {source}")]
    Json {
        /// The endpoint whose response failed to decode.
        endpoint: &'static str,
        /// The underlying parser error.
        #[source]
        source: serde_json::Error,
    },

    /// The ticker listing could not be parsed as CSV.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The ticker listing archive could not be opened.
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Reading the ticker listing archive failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// An invalid date range was provided (start must not be after end).
    #[error("invalid date range: start must not be after end")]
    InvalidDates,

    /// The endpoint cannot produce the requested format (only prices and listings do CSV).
    #[error("{endpoint} does not support the {format:?} format")]
    UnsupportedFormat {
        /// The endpoint the format was requested for.
        endpoint: &'static str,
        /// The rejected format.
        format: crate::core::Format,
    },

    /// No API key was configured, neither on the builder nor through `TIINGO_API_KEY`.
    #[error("no Tiingo API key configured (set TIINGO_API_KEY or use the builder)")]
    MissingApiKey,

    /// The API answered with a non-2xx status.
    #[error("{endpoint} failed with {kind} error (status {status}): {message}")]
    Api {
        /// The classification of the failure.
        kind: ErrorKind,
        /// The HTTP status code.
        status: u16,
        /// The endpoint that returned the error, e.g. `news_bulk`.
        endpoint: &'static str,
        /// The upstream body, verbatim.
        message: String,
    },
}

impl TiingoError {
    /// The classified kind of this error.
    ///
    /// Returns `None` for transport and decoding failures, which are not classified.
    #[must_use]
    pub const fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Api { kind, .. } => Some(*kind),
            Self::MissingApiKey => Some(ErrorKind::Auth),
            _ => None,
        }
    }

    /// The HTTP status of a classified upstream error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// The `detail` field of a Tiingo JSON error body, when the message carries one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let Self::Api { message, .. } = self else {
            return None;
        };
        serde_json::from_str::<serde_json::Value>(message)
            .ok()?
            .get("detail")?
            .as_str()
            .map(str::to_owned)
    }
}
