//! Core components of the `tiingo-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TiingoClient`] and its builder.
//! - The primary [`TiingoError`] type and its [`ErrorKind`] taxonomy.
//! - The [`Transport`] seam and its default `reqwest` implementation.
//! - Response classification and decoding into [`Response`].

/// Status classification of raw responses.
pub mod classify;
/// The main client (`TiingoClient`), builder, and configuration.
pub mod client;
/// Format selection and response decoding.
pub mod decode;
/// The primary error type (`TiingoError`) for the crate.
pub mod error;
/// The `Transport` trait and the default HTTP transport.
pub mod transport;
pub(crate) mod wire;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::TiingoClient`
pub use classify::classify;
pub use client::{API_KEY_ENV, TiingoClient, TiingoClientBuilder};
pub use decode::{Format, Record, Response, decode};
pub use error::{ErrorKind, TiingoError};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
