use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::core::normalize::serialize_number;

/// Wire form of a rating that could not be read from the page.
pub const UNAVAILABLE: &str = "unavailable";

/// A rating component that is either a value or explicitly unavailable.
///
/// Serializes as the bare value, or as the string `"unavailable"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Rated<T> {
    Value(T),
    #[default]
    Unavailable,
}

impl<T> Rated<T> {
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Unavailable => None,
        }
    }

    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl<T> From<Option<T>> for Rated<T> {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Unavailable, Self::Value)
    }
}

impl Serialize for Rated<u8> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_u8(*v),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

impl Serialize for Rated<Decimal> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serialize_number(v, serializer),
            Self::Unavailable => serializer.serialize_str(UNAVAILABLE),
        }
    }
}

/// Trailing returns as displayed on the profile page (e.g. `"12.34%"`), unparsed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Performance {
    #[serde(rename = "YTD")]
    pub ytd: String,
    #[serde(rename = "1M")]
    pub one_month: String,
    #[serde(rename = "3M")]
    pub three_months: String,
    #[serde(rename = "1Y")]
    pub one_year: String,
    #[serde(rename = "3Y")]
    pub three_years: String,
    #[serde(rename = "5Y")]
    pub five_years: String,
    #[serde(rename = "10Y")]
    pub ten_years: String,
}

/// Everything read from the rendered profile page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FundProfile {
    pub name: String,
    pub segment: String,
    /// Assets under management, in currency units.
    pub aum: Decimal,
    /// Fund rating letter mapped to 1..=26 (`A` = 1).
    pub grade: Rated<u8>,
    pub score: Rated<Decimal>,
    /// Whether the fund carries the analyst-pick marker.
    pub pick: bool,
    pub expense_ratio: Option<String>,
    pub performance: Performance,
    /// Distribution yield as displayed.
    pub dividend: Option<String>,
    pub inception: Option<String>,
}
