//! Net fund flows from the server-rendered fund-flow page.

use std::sync::LazyLock;

use rust_decimal::Decimal;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::core::net::get_text;
use crate::core::normalize::parse_abbreviated_number;
use crate::core::urls::ticker_url;
use crate::{EtfClient, EtfError};

const FLOW_CLASS: &str = "net-fund-flow";
const FIVE_DAY_CLASS: &str = "5-day";
const ONE_MONTH_CLASS: &str = "1-month";

/// The flow cell renders as a caption line followed by the amount line.
const FLOW_LINE_INDEX: usize = 1;

static FLOW: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(&format!(".{FLOW_CLASS}"))
        .unwrap_or_else(|e| panic!("invalid built-in selector: {e}"))
});

/// Net creations minus redemptions over two trailing windows, in currency units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FundFlows {
    pub five_day: Decimal,
    pub one_month: Decimal,
}

/// Fetches `url` and returns the body whatever the status code.
///
/// A non-2xx answer is logged and handed back like any other body; only
/// transport failures are errors. Nothing is retried.
///
/// # Errors
///
/// Returns [`EtfError::Http`] if the request cannot be sent or the body cannot be read.
pub async fn fetch_document(client: &EtfClient, url: &Url, ticker: &str) -> Result<String, EtfError> {
    let resp = client.http().get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(%url, status = status.as_u16(), "flows page returned an error status");
    }
    Ok(get_text(resp, "flows_html", ticker, "html").await?)
}

fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// Concatenated text of every flow element carrying `window_class`, trimmed,
/// then the amount line of it.
fn flow_line(document: &Html, window_class: &str) -> Option<String> {
    let text: String = document
        .select(&FLOW)
        .filter(|el| has_class(el, window_class))
        .flat_map(|el| el.text())
        .collect();
    text.trim()
        .split('\n')
        .nth(FLOW_LINE_INDEX)
        .map(str::to_string)
}

/// Reads both flow figures from a fund-flow page body. Missing cells read as zero.
#[must_use]
pub fn extract_flows(html: &str) -> FundFlows {
    let document = Html::parse_document(html);
    let five_day = flow_line(&document, FIVE_DAY_CLASS);
    let one_month = flow_line(&document, ONE_MONTH_CLASS);
    if five_day.is_none() || one_month.is_none() {
        tracing::debug!(
            five_day = five_day.is_some(),
            one_month = one_month.is_some(),
            "flow cells missing from flows page"
        );
    }

    FundFlows {
        five_day: parse_abbreviated_number(five_day.as_deref()),
        one_month: parse_abbreviated_number(one_month.as_deref()),
    }
}

/// Fetches the fund-flow page for `ticker` and reads both flow figures.
///
/// # Errors
///
/// Returns [`EtfError::Http`] on transport failure and [`EtfError::BaseUrl`] if
/// the flows base cannot take a ticker path. Error statuses are not errors.
pub async fn load_flows(client: &EtfClient, ticker: &str) -> Result<FundFlows, EtfError> {
    let url = ticker_url(client.base_flows(), ticker)?;
    let body = fetch_document(client, &url, ticker).await?;

    #[cfg(feature = "debug-dumps")]
    {
        if crate::debug::enabled() {
            let _ = crate::debug::debug_dump_html("flows", ticker, &body);
        }
    }

    Ok(extract_flows(&body))
}
