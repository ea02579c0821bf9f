//! Public client surface + builder.
//! Defaults (base URLs, UA, env var) live in `constants`.

mod constants;

pub use constants::API_KEY_ENV;

use crate::core::{
    ApiRequest, Format, HttpTransport, RawResponse, Response, TiingoError, Transport, classify,
    decode,
};
use constants::{DEFAULT_BASE_URL, DEFAULT_LISTING_URL, USER_AGENT};
use reqwest::Method;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Client for the Tiingo REST API.
///
/// Cheap to clone: clones share the underlying transport. Each endpoint is reached through
/// a builder obtained from the client, e.g. [`TiingoClient::ticker_price`] or
/// [`TiingoClient::news`].
///
/// The `Debug` and `Display` output is `<TiingoClient(url="https://api.tiingo.com")>`;
/// the API key is never printed.
#[derive(Clone)]
pub struct TiingoClient {
    transport: Arc<dyn Transport>,
    base_url: Url,
    listing_url: Url,
    api_key: Option<String>,
}

impl Default for TiingoClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl fmt::Debug for TiingoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TiingoClient(url=\"{}\")>",
            self.base_url.as_str().trim_end_matches('/')
        )
    }
}

impl fmt::Display for TiingoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl TiingoClient {
    /// Create a new builder.
    pub fn builder() -> TiingoClientBuilder {
        TiingoClientBuilder::default()
    }

    /// The REST API base URL.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The supported-tickers archive URL.
    pub const fn listing_url(&self) -> &Url {
        &self.listing_url
    }

    /// Whether an API key is configured.
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /* -------- internal plumbing used by the endpoint modules -------- */

    /// `base_url` with `segments` appended as individually-encoded path segments.
    pub(crate) fn endpoint_url(&self, segments: &[&str]) -> Result<Url, TiingoError> {
        if self.base_url.cannot_be_a_base() {
            return Err(TiingoError::Data(format!(
                "base URL cannot be a base: {}",
                self.base_url
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TiingoError::Data("base URL cannot be a base".into()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Builds an authenticated API request.
    ///
    /// Fails with `MissingApiKey` before anything is sent when no key is configured.
    pub(crate) fn api_request(
        &self,
        endpoint: &'static str,
        key: impl Into<String>,
        url: Url,
        fmt: Format,
    ) -> Result<ApiRequest, TiingoError> {
        let api_key = self.api_key.as_deref().ok_or(TiingoError::MissingApiKey)?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(fmt.accept()));
        let mut auth = HeaderValue::from_str(&format!("Token {api_key}"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        Ok(ApiRequest {
            endpoint,
            key: key.into(),
            ext: fmt.wire_format(),
            method: Method::GET,
            url,
            headers,
        })
    }

    /// Builds an unauthenticated request, for resources served outside the REST API.
    pub(crate) fn public_request(
        endpoint: &'static str,
        key: impl Into<String>,
        url: Url,
        ext: &'static str,
    ) -> ApiRequest {
        ApiRequest {
            endpoint,
            key: key.into(),
            ext,
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Rejects formats an endpoint cannot serve, before anything is sent.
    pub(crate) fn ensure_json_only(
        endpoint: &'static str,
        fmt: Format,
    ) -> Result<(), TiingoError> {
        match fmt {
            Format::Csv => Err(TiingoError::UnsupportedFormat {
                endpoint,
                format: fmt,
            }),
            Format::Json | Format::Object => Ok(()),
        }
    }

    /// Sends a request and classifies the answer, returning the raw body on success.
    pub(crate) async fn send_classified(&self, req: &ApiRequest) -> Result<RawResponse, TiingoError> {
        let raw = self.transport.send(req).await?;
        classify(req.endpoint, raw.status, &raw.body)?;
        Ok(raw)
    }

    /// Transport, then classification, then decoding.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        req: ApiRequest,
        fmt: Format,
    ) -> Result<Response<T>, TiingoError> {
        let raw = self.send_classified(&req).await?;
        decode(req.endpoint, &raw.body, fmt)
    }
}

/* ----------------------- Builder ----------------------- */

pub struct TiingoClientBuilder {
    api_key: Option<String>,
    read_env: bool,
    base_url: Option<Url>,
    listing_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl Default for TiingoClientBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            read_env: true,
            base_url: None,
            listing_url: None,
            user_agent: None,
            timeout: None,
            connect_timeout: None,
            transport: None,
        }
    }
}

impl TiingoClientBuilder {
    /// Set the API key. Without one, `TIINGO_API_KEY` is consulted at build time.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Whether to fall back to `TIINGO_API_KEY` when no key is set. Default: `true`.
    #[must_use]
    pub const fn env_api_key(mut self, enabled: bool) -> Self {
        self.read_env = enabled;
        self
    }

    /// Override the REST API base (e.g., `https://api.tiingo.com`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the supported-tickers archive URL.
    #[must_use]
    pub fn listing_url(mut self, url: Url) -> Self {
        self.listing_url = Some(url);
        self
    }

    /// Override the User-Agent. Ignored when a custom transport is supplied.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Replace the HTTP transport, e.g. with a fixture-backed one in tests.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<TiingoClient, TiingoError> {
        let base_url = with_trailing_slash(self.base_url.unwrap_or(Url::parse(DEFAULT_BASE_URL)?));
        let listing_url = self.listing_url.unwrap_or(Url::parse(DEFAULT_LISTING_URL)?);

        let api_key = self
            .api_key
            .or_else(|| {
                if self.read_env {
                    std::env::var(API_KEY_ENV).ok()
                } else {
                    None
                }
            })
            .filter(|k| !k.trim().is_empty());

        let transport: Arc<dyn Transport> = match self.transport {
            Some(t) => t,
            None => {
                let mut httpb = reqwest::Client::builder()
                    .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                Arc::new(HttpTransport::new(httpb.build()?))
            }
        };

        Ok(TiingoClient {
            transport,
            base_url,
            listing_url,
            api_key,
        })
    }
}

fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
