//! Maps HTTP status + body to success or a classified [`TiingoError::Api`].

use crate::core::{ErrorKind, TiingoError};

/// Decides whether a response may proceed to decoding.
///
/// Any 2xx status succeeds. Every other status yields [`TiingoError::Api`] carrying the
/// endpoint and the upstream body verbatim.
///
/// # Errors
///
/// Returns `TiingoError::Api` for every non-2xx status.
pub fn classify(endpoint: &'static str, status: u16, body: &[u8]) -> Result<(), TiingoError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    let kind = ErrorKind::from_status(status);

    #[cfg(feature = "tracing")]
    tracing::warn!(endpoint, status, %kind, "tiingo request rejected");

    Err(TiingoError::Api {
        kind,
        status,
        endpoint,
        message: String::from_utf8_lossy(body).into_owned(),
    })
}
