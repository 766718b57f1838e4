//! Assembly of the single-record ETF snapshot from both sources.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core::normalize::serialize_number;
use crate::flows::{FundFlows, load_flows};
use crate::profile::{FundProfile, Performance, Rated, load_profile};
use crate::{EtfClient, EtfError};

/// Everything known about one ETF at request time.
///
/// Serializes with the public JSON keys (`"Name"`, `"Expense Ratio"`, `"5D Flow"`, ...).
/// Optional text fields serialize as `null` so the key set never changes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EtfSnapshot {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Segment")]
    pub segment: String,
    #[serde(rename = "AUM", serialize_with = "serialize_number")]
    pub aum: Decimal,
    #[serde(rename = "Grade")]
    pub grade: Rated<u8>,
    #[serde(rename = "Score")]
    pub score: Rated<Decimal>,
    #[serde(rename = "Pick")]
    pub pick: bool,
    #[serde(rename = "Expense Ratio")]
    pub expense_ratio: Option<String>,
    #[serde(rename = "Performance")]
    pub performance: Performance,
    #[serde(rename = "Dividend")]
    pub dividend: Option<String>,
    #[serde(rename = "Inception")]
    pub inception: Option<String>,
    #[serde(rename = "5D Flow", serialize_with = "serialize_number")]
    pub flow_5d: Decimal,
    #[serde(rename = "1M Flow", serialize_with = "serialize_number")]
    pub flow_1m: Decimal,
}

impl EtfSnapshot {
    #[must_use]
    pub fn from_parts(profile: FundProfile, flows: FundFlows) -> Self {
        Self {
            name: profile.name,
            segment: profile.segment,
            aum: profile.aum,
            grade: profile.grade,
            score: profile.score,
            pick: profile.pick,
            expense_ratio: profile.expense_ratio,
            performance: profile.performance,
            dividend: profile.dividend,
            inception: profile.inception,
            flow_5d: flows.five_day,
            flow_1m: flows.one_month,
        }
    }
}

/// Builds the snapshot for `ticker`: profile page first, then the flows page.
///
/// The ticker is used as supplied (no case folding, no symbol validation).
///
/// # Errors
///
/// - [`EtfError::MissingTicker`] if `ticker` is empty.
/// - [`EtfError::PageLoad`] if the profile page cannot be rendered.
/// - [`EtfError::Http`] if the flows page is unreachable.
#[tracing::instrument(skip(client), err)]
pub async fn fetch_snapshot(client: &EtfClient, ticker: &str) -> Result<EtfSnapshot, EtfError> {
    if ticker.is_empty() {
        return Err(EtfError::MissingTicker);
    }

    let profile = load_profile(client, ticker).await?;
    let flows = load_flows(client, ticker).await?;

    Ok(EtfSnapshot::from_parts(profile, flows))
}
