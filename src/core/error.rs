use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Missing or malformed page fragments are not errors: those degrade the single
/// affected field of the snapshot. Only input, page-load and transport failures
/// surface here.
#[derive(Debug, Error)]
pub enum EtfError {
    /// No ticker (or an empty one) was supplied.
    #[error("ETF ticker missing")]
    MissingTicker,

    /// The renderer could not launch, navigate, or reach the readiness selector.
    #[error("{0}")]
    PageLoad(String),

    /// An error occurred during an HTTP request to the flows source.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A source URL could not be built for the ticker.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A configured base URL cannot take a ticker path segment.
    #[error("base URL cannot take a ticker path: {0}")]
    BaseUrl(String),
}

impl EtfError {
    /// True for errors caused by the caller's input rather than a failing source.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingTicker)
    }
}
