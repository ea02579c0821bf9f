//! The HTTP seam. Everything above it deals in [`ApiRequest`] and [`RawResponse`] only,
//! so tests can swap the network for recorded fixtures.

use futures::future::BoxFuture;
use reqwest::{Method, header::HeaderMap};
use url::Url;

use crate::core::{TiingoError, net};

/// A fully-built request for one endpoint call.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    /// Logical endpoint name, e.g. `ticker_price`. Used in errors and fixture names.
    pub endpoint: &'static str,
    /// Fixture key for this call, usually the ticker symbol.
    pub key: String,
    /// Expected body extension (`json`, `csv`, `zip`), used when recording fixtures.
    pub ext: &'static str,
    pub method: Method,
    /// Absolute URL including the query string.
    pub url: Url,
    pub headers: HeaderMap,
}

/// Status and body of an HTTP exchange, uninterpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    /// The final URL after redirects.
    pub url: Url,
    pub body: Vec<u8>,
}

/// Sends requests and returns raw responses.
///
/// Implementations must not inspect the body or the status: classification and decoding
/// happen after the transport returns. Only network-level failures are errors here.
pub trait Transport: Send + Sync {
    /// Performs one request.
    ///
    /// # Errors
    ///
    /// Returns `TiingoError::Http` if the request could not be completed.
    fn send<'a>(&'a self, req: &'a ApiRequest) -> BoxFuture<'a, Result<RawResponse, TiingoError>>;
}

/// The default transport, backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    pub const fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn send<'a>(&'a self, req: &'a ApiRequest) -> BoxFuture<'a, Result<RawResponse, TiingoError>> {
        Box::pin(async move {
            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = req.endpoint, url = %req.url, "sending request");

            let resp = self
                .http
                .request(req.method.clone(), req.url.clone())
                .headers(req.headers.clone())
                .send()
                .await?;

            let status = resp.status().as_u16();
            let url = resp.url().clone();
            let body = net::get_bytes(resp, req.endpoint, &req.key, req.ext).await?;

            #[cfg(feature = "tracing")]
            tracing::debug!(endpoint = req.endpoint, status, bytes = body.len(), "received response");

            Ok(RawResponse { status, url, body })
        })
    }
}
