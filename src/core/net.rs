#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as bytes.
/// In `test-mode`, if `TIINGO_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let body = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("TIINGO_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &body)
        {
            eprintln!("TIINGO_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(body)
}
