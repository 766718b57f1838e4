use url::Url;

use crate::core::EtfError;

/// Appends `ticker` to `base` as a single path segment.
///
/// The ticker is percent-encoded, so `/`, `?` and `#` stay inside the segment
/// and the result always keeps the scheme, host and path of `base`. A trailing
/// slash on `base` is optional: `https://etfdb.com/etf` and
/// `https://etfdb.com/etf/` both give `https://etfdb.com/etf/SPY`.
///
/// ```
/// use etf_snapshot::core::urls::ticker_url;
/// use url::Url;
///
/// let base = Url::parse("https://etfdb.com/etf/").unwrap();
/// assert_eq!(ticker_url(&base, "SPY").unwrap().as_str(), "https://etfdb.com/etf/SPY");
/// assert_eq!(
///     ticker_url(&base, "../SPY").unwrap().as_str(),
///     "https://etfdb.com/etf/..%2FSPY"
/// );
/// ```
///
/// # Errors
///
/// Returns [`EtfError::BaseUrl`] if `base` cannot have a path (e.g. `mailto:`).
pub fn ticker_url(base: &Url, ticker: &str) -> Result<Url, EtfError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| EtfError::BaseUrl(base.to_string()))?
        .pop_if_empty()
        .push(ticker);
    Ok(url)
}
