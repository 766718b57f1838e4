//! The ETF profile page: rendered in a browser session, then read field by field.
//!
//! Internals are split into:
//! - `model`:   public profile types
//! - `extract`: label/selector driven extraction from the rendered DOM

pub mod extract;
mod model;

pub use model::{FundProfile, Performance, Rated, UNAVAILABLE};

use crate::core::urls::ticker_url;
use crate::render::with_rendered_page;
use crate::{EtfClient, EtfError};
use extract::{NAME_SELECTOR, extract_profile};

/// Renders the profile page for `ticker` and extracts its fields.
///
/// The renderer session is closed before this returns, whether or not loading
/// succeeded.
///
/// # Errors
///
/// Returns [`EtfError::PageLoad`] if the page cannot be rendered or never shows
/// the fund name, and [`EtfError::BaseUrl`] if the profile base cannot take a
/// ticker path.
pub async fn load_profile(client: &EtfClient, ticker: &str) -> Result<FundProfile, EtfError> {
    let url = ticker_url(client.base_profile(), ticker)?;
    tracing::debug!(%url, "rendering profile page");

    let html = with_rendered_page(client.renderer(), &url, NAME_SELECTOR, client.viewport()).await?;

    #[cfg(feature = "debug-dumps")]
    {
        if crate::debug::enabled() {
            let _ = crate::debug::debug_dump_html("profile", ticker, &html);
        }
    }

    let profile = extract_profile(&html);
    tracing::debug!(name = %profile.name, grade = ?profile.grade, "profile extracted");
    Ok(profile)
}
