#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `ETF_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _ticker: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("ETF_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _ticker, _ext, &text)
        {
            tracing::warn!(ticker = _ticker, error = %e, "ETF_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}
