//! Centralized constants for default endpoints, UA and renderer settings.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// ETF profile page base (ticker is appended). Client-rendered.
pub(crate) const DEFAULT_BASE_PROFILE: &str = "https://www.etf.com/";

/// Fund-flow page base (ticker is appended). Server-rendered.
pub(crate) const DEFAULT_BASE_FLOWS: &str = "https://etfdb.com/etf/";

/// Viewport the profile page is rendered at.
pub(crate) const DEFAULT_VIEWPORT_WIDTH: u32 = 1680;
pub(crate) const DEFAULT_VIEWPORT_HEIGHT: u32 = 1050;
